//! Orchestration of a single assembly run.

use std::path::{Path, PathBuf};

use crate::config::Config;

use super::pipeline::Pipeline;
use super::templates;

#[derive(thiserror::Error, Debug)]
pub enum AssembleError {
    #[error("failed to read source document {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write output document {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Summary of a completed assembly run, for reporting and assertions.
#[derive(Debug)]
pub struct AssembleResult {
    pub output_path: PathBuf,
    pub characters: usize,
    pub lines: usize,
}

/// Assembles one source document into the final output page.
///
/// A run is a single linear pass: read the source fully into memory,
/// transform it through the default pipeline, wrap the result in the fixed
/// templates, and write the output file. The output is only opened once the
/// full text exists in memory, so a read failure can never truncate a
/// previously written output.
pub struct Assembler {
    config: Config,
    /// Base path for resolving relative paths (the config file's directory)
    base_path: PathBuf,
}

impl Assembler {
    pub fn new(config: Config, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    /// Run the full assembly: read, transform, concatenate, write.
    pub fn assemble(&self) -> Result<AssembleResult, AssembleError> {
        let source_path = self.resolve(&self.config.input.source);
        println!("Reading {}...", source_path.display());
        let source =
            std::fs::read_to_string(&source_path).map_err(|e| AssembleError::ReadSource {
                path: source_path.clone(),
                source: e,
            })?;

        let pipeline = Pipeline::default_pipeline();
        println!("Transforming content ({})...", pipeline.stage_names().join(", "));
        let transformed = pipeline.run(&source);

        // Fixed concatenation order: front matter, hero, content, footer
        println!("Combining content...");
        let site = &self.config.site;
        let full_content = [
            templates::front_matter(site),
            templates::hero(site),
            transformed,
            templates::footer(site),
        ]
        .concat();

        let output_path = self.resolve(&self.config.output.path);
        println!("Writing to {}...", output_path.display());
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AssembleError::WriteOutput {
                path: output_path.clone(),
                source: e,
            })?;
        }
        std::fs::write(&output_path, &full_content).map_err(|e| AssembleError::WriteOutput {
            path: output_path.clone(),
            source: e,
        })?;

        Ok(AssembleResult {
            output_path,
            characters: full_content.chars().count(),
            lines: full_content.lines().count(),
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.base_path.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::templates;

    fn assembler_in(dir: &Path) -> Assembler {
        Assembler::new(Config::default(), dir.to_path_buf())
    }

    #[test]
    fn test_assemble_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let source = "---\ntitle: Source\n---\n\n## API\n\n**Method:** GET /things\n\n> Note: be kind.\n";
        std::fs::write(dir.path().join("README.md"), source).unwrap();

        let result = assembler_in(dir.path()).assemble().unwrap();
        let output = std::fs::read_to_string(&result.output_path).unwrap();

        assert!(output.contains("{: .fs-9 }"));
        assert!(output.contains("{: .label .label-green }"));
        assert!(output.contains("{: .note }"));
        assert!(!output.contains("**Method:**"));
        assert!(!output.contains("title: Source"));
        assert_eq!(result.characters, output.chars().count());
        assert_eq!(result.lines, output.lines().count());
    }

    #[test]
    fn test_concatenation_invariant() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "Body text.\n").unwrap();

        let result = assembler_in(dir.path()).assemble().unwrap();
        let output = std::fs::read_to_string(&result.output_path).unwrap();

        let config = Config::default();
        let prefix = templates::front_matter(&config.site) + &templates::hero(&config.site);
        assert!(output.starts_with(&prefix));
        assert!(output.ends_with(&templates::footer(&config.site)));
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let err = assembler_in(dir.path()).assemble().unwrap_err();
        assert!(matches!(err, AssembleError::ReadSource { .. }));
        assert!(!dir.path().join("index.md").exists());
    }

    #[test]
    fn test_output_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "New content.\n").unwrap();
        std::fs::write(dir.path().join("index.md"), "stale output").unwrap();

        assembler_in(dir.path()).assemble().unwrap();
        let output = std::fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(output.contains("New content."));
        assert!(!output.contains("stale output"));
    }
}
