//! Front matter stripping stage.

use crate::assemble::pipeline::Stage;

/// Stage that removes a leading `---`-delimited metadata block.
///
/// Source documents often carry front matter for their own site rendering;
/// the assembled page supplies its own, so a leading block is dropped along
/// with any blank lines that follow it. The match is non-greedy: the block
/// ends at the *first* closing `---`, not the last one in the document.
///
/// A document with no leading block, or with an unterminated one, passes
/// through unchanged, which also makes the stage idempotent.
pub struct FrontMatterStage;

impl Stage for FrontMatterStage {
    fn name(&self) -> &'static str {
        "front-matter"
    }

    fn apply(&self, input: &str) -> String {
        let lines: Vec<&str> = input.lines().collect();

        if lines.first() != Some(&"---") {
            return input.to_string();
        }

        // First closing delimiter after the opening line
        let Some(close) = lines[1..].iter().position(|line| *line == "---") else {
            return input.to_string();
        };

        // Skip past the closing `---` and any blank lines trailing the block
        let mut rest = &lines[close + 2..];
        while let Some((first, tail)) = rest.split_first() {
            if !first.trim().is_empty() {
                break;
            }
            rest = tail;
        }

        rest.join("\n")
    }
}
