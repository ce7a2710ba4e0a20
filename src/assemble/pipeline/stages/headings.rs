//! Heading annotation stage.

use crate::assemble::pipeline::Stage;

/// Stage that tags headings with Just the Docs font size classes.
///
/// Each level-2 through level-4 heading line is followed by a `{: .fs-N }`
/// tag line and a blank line, sized per level. Level-1 titles and deeper
/// headings keep the theme default. Processing is purely line-local, so
/// insertions always directly follow their trigger line.
pub struct HeadingStage;

impl Stage for HeadingStage {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn apply(&self, input: &str) -> String {
        let mut formatted: Vec<String> = Vec::new();

        for line in input.lines() {
            formatted.push(line.to_string());
            if let Some(tag) = size_tag(line) {
                formatted.push(tag.to_string());
                formatted.push(String::new());
            }
        }

        formatted.join("\n")
    }
}

/// The size tag for a heading line, chosen by marker depth.
fn size_tag(line: &str) -> Option<&'static str> {
    let line = line.trim_start();
    if line.starts_with("## ") && !line.starts_with("###") {
        Some("{: .fs-9 }")
    } else if line.starts_with("### ") && !line.starts_with("####") {
        Some("{: .fs-7 }")
    } else if line.starts_with("#### ") {
        Some("{: .fs-6 }")
    } else {
        None
    }
}
