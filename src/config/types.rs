//! Configuration type definitions.
//!
//! This module contains all the data structures used in docweld configuration
//! files. These types are pure data - no I/O or complex logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Top-level config
// =============================================================================

/// The full configuration for an assembly run.
///
/// ```yaml
/// site:
///   title: My Project
///   description: "One-line summary shown in the hero"
///   repository: https://github.com/me/my-project
/// input:
///   source: README.md
/// output:
///   path: index.md
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Product metadata rendered into the page templates
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// =============================================================================
// Site metadata
// =============================================================================

/// Static product metadata filled into the front matter, hero section,
/// and footer templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page and hero title
    #[serde(default = "default_title")]
    pub title: String,
    /// One-line summary, shown under the hero title and in the front matter
    #[serde(default)]
    pub description: String,
    /// Longer pitch paragraph shown in the hero (omitted when absent)
    pub tagline: Option<String>,
    /// Repository URL for the hero's "View on GitHub" button
    pub repository: Option<String>,
    /// Position of the page in the site navigation
    #[serde(default = "default_nav_order")]
    pub nav_order: u32,
    /// Permalink for the assembled page
    #[serde(default = "default_permalink")]
    pub permalink: String,
    /// Documentation version shown in the footer
    #[serde(default = "default_version")]
    pub docs_version: String,
    /// System version shown in the footer
    #[serde(default = "default_version")]
    pub system_version: String,
    /// Human-readable "Last Updated" date (footer line omitted when absent)
    pub updated: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            tagline: None,
            repository: None,
            nav_order: default_nav_order(),
            permalink: default_permalink(),
            docs_version: default_version(),
            system_version: default_version(),
            updated: None,
        }
    }
}

fn default_title() -> String {
    "Documentation".to_string()
}

fn default_nav_order() -> u32 {
    1
}

fn default_permalink() -> String {
    "/".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

// =============================================================================
// Input and output locations
// =============================================================================

/// Where the source content comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// The main source document, relative to the config file
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Directory of auxiliary documentation fragments.
    ///
    /// Reserved: parsed and retained for forward compatibility, but no
    /// assembly stage reads it. Fragment merging is unspecified.
    pub fragments: Option<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            fragments: None,
        }
    }
}

fn default_source() -> PathBuf {
    "README.md".into()
}

/// Where the assembled document is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file path, relative to the config file; overwritten each run
    #[serde(default = "default_output")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output(),
        }
    }
}

fn default_output() -> PathBuf {
    "index.md".into()
}
