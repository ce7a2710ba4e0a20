//! Default pipeline stages.
//!
//! The standard document transformation pipeline consists of:
//!
//! 1. **FrontMatterStage** - Strip the source's leading metadata block
//! 2. **HeadingStage** - Tag headings with per-level font size classes
//! 3. **LabelStage** - Rewrite HTTP method markers into colored labels
//! 4. **CalloutStage** - Convert blockquote runs into styled callouts

mod callouts;
mod front_matter;
mod headings;
mod labels;

pub use callouts::CalloutStage;
pub use front_matter::FrontMatterStage;
pub use headings::HeadingStage;
pub use labels::LabelStage;
