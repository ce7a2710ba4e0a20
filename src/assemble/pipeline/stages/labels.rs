//! HTTP method label stage.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::assemble::pipeline::Stage;

static RE_METHOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Method:\*\* (GET|POST|PUT|DELETE)").unwrap());

/// Stage that rewrites `**Method:** VERB` markers into colored labels.
///
/// Each marker becomes a Just the Docs label tag colored per verb (GET green,
/// POST blue, PUT yellow, DELETE red), the verb on its own line, and an
/// `**Endpoint:**` field marker for the endpoint text that followed the
/// original method field. The substitution is global; since the replacement
/// no longer contains `**Method:**`, matches cannot overlap or cascade.
pub struct LabelStage;

impl Stage for LabelStage {
    fn name(&self) -> &'static str {
        "labels"
    }

    fn apply(&self, input: &str) -> String {
        RE_METHOD
            .replace_all(input, |caps: &Captures<'_>| {
                let verb = &caps[1];
                format!(
                    "{{: .label .{} }}\n{}\n\n**Endpoint:**",
                    label_class(verb),
                    verb
                )
            })
            .to_string()
    }
}

/// The label color class for an HTTP verb.
fn label_class(verb: &str) -> &'static str {
    match verb {
        "GET" => "label-green",
        "POST" => "label-blue",
        "PUT" => "label-yellow",
        "DELETE" => "label-red",
        _ => unreachable!("verb not covered by the method pattern: {verb}"),
    }
}
