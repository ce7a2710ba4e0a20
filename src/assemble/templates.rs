//! Fixed page templates.
//!
//! The assembled document is always `front_matter + hero + content + footer`.
//! The template skeletons are fixed; only static product metadata from the
//! site config is filled in. There is no templating language.

use crate::config::SiteConfig;

/// Closing hero markup: the call-to-action buttons are followed by a rule
/// and an auto-generated table of contents.
const HERO_TAIL: &str = r#"
</div>

---

## Table of Contents
{: .no_toc .text-delta }

1. TOC
{:toc}

---

"#;

/// Mermaid bootstrap appended after the footer metadata, themed to match
/// the dark Just the Docs palette.
const MERMAID_SCRIPT: &str = r#"<script src="https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js"></script>
<script>
mermaid.initialize({
  startOnLoad: true,
  theme: 'dark',
  themeVariables: {
    primaryColor: '#21262d',
    primaryTextColor: '#c9d1d9',
    primaryBorderColor: '#58a6ff',
    lineColor: '#58a6ff',
    secondaryColor: '#161b22',
    tertiaryColor: '#0d1117'
  }
});
</script>
"#;

/// Render the Jekyll front matter block for the assembled page.
pub fn front_matter(site: &SiteConfig) -> String {
    format!(
        "---\n\
         layout: default\n\
         title: {title}\n\
         nav_order: {nav_order}\n\
         description: \"{description}\"\n\
         permalink: {permalink}\n\
         ---\n\n",
        title = site.title,
        nav_order = site.nav_order,
        description = site.description,
        permalink = site.permalink,
    )
}

/// Render the hero section: title, summary, optional pitch paragraph,
/// call-to-action buttons, and a table of contents.
pub fn hero(site: &SiteConfig) -> String {
    let mut hero = format!(
        "<div class=\"hero\" markdown=\"1\">\n\n\
         # {title}\n\
         {{: .fs-10 .fw-700 .text-center }}\n\n\
         {description}\n\
         {{: .fs-6 .fw-300 .text-center }}\n\n",
        title = site.title,
        description = site.description,
    );

    if let Some(tagline) = &site.tagline {
        hero.push_str(&format!(
            "{tagline}\n{{: .fs-5 .fw-300 .text-center }}\n\n"
        ));
    }

    hero.push_str(
        "[Get Started](#getting-started){: .btn .btn-primary .fs-5 .mb-4 .mb-md-0 .mr-2 }\n",
    );
    if let Some(repository) = &site.repository {
        hero.push_str(&format!(
            "[View on GitHub]({repository}){{: .btn .btn-outline .fs-5 .mb-4 .mb-md-0 }}\n"
        ));
    }

    hero.push_str(HERO_TAIL);
    hero
}

/// Render the footer: version metadata and the Mermaid bootstrap script.
pub fn footer(site: &SiteConfig) -> String {
    let mut footer = String::from("\n\n---\n\n");

    if let Some(updated) = &site.updated {
        footer.push_str(&format!("**Last Updated**: {updated}\n"));
    }
    footer.push_str(&format!(
        "**Documentation Version**: {docs_version}\n\
         **System Version**: {system_version}\n\n",
        docs_version = site.docs_version,
        system_version = site.system_version,
    ));

    footer.push_str(MERMAID_SCRIPT);
    footer
}
