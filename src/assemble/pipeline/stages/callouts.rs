//! Blockquote callout stage.

use crate::assemble::pipeline::Stage;

/// Keyword groups checked in priority order; the first hit wins even when
/// later groups' keywords are also present.
const CALLOUT_CLASSES: &[(&str, &[&str])] = &[
    ("{: .note }", &["note", "info", "remember"]),
    ("{: .warning }", &["warning", "caution", "careful"]),
    ("{: .important }", &["important", "critical", "must"]),
    ("{: .tip }", &["tip", "pro tip", "best practice"]),
];

/// Marker used when no keyword group matches.
const FALLBACK_CLASS: &str = "{: .highlight }";

/// Stage that converts blockquote runs into styled callouts.
///
/// A run is a maximal contiguous sequence of lines starting with `> `; any
/// other line (including a blank line) ends it. Each run is classified by
/// its keyword content and re-emitted as a callout marker line, the quoted
/// lines, and a trailing blank line. A run that reaches the end of the
/// document is flushed the same way.
pub struct CalloutStage;

impl Stage for CalloutStage {
    fn name(&self) -> &'static str {
        "callouts"
    }

    fn apply(&self, input: &str) -> String {
        let mut formatted: Vec<String> = Vec::new();
        let mut run: Vec<String> = Vec::new();

        for line in input.lines() {
            let trimmed = line.trim_start();
            if let Some(quoted) = trimmed.strip_prefix("> ") {
                run.push(quoted.trim().to_string());
            } else {
                flush_run(&mut formatted, &mut run);
                formatted.push(line.to_string());
            }
        }
        flush_run(&mut formatted, &mut run);

        formatted.join("\n")
    }
}

/// Emit a completed blockquote run as a callout, clearing the run buffer.
fn flush_run(formatted: &mut Vec<String>, run: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }

    formatted.push(classify(run).to_string());
    for line in run.drain(..) {
        formatted.push(format!("> {line}"));
    }
    formatted.push(String::new());
}

/// Pick the callout marker for a run by scanning its joined, lowercased text.
fn classify(run: &[String]) -> &'static str {
    let text = run.join(" ").to_lowercase();
    for (marker, keywords) in CALLOUT_CLASSES {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return marker;
        }
    }
    FALLBACK_CLASS
}
