//! Transformation pipeline for document text.
//!
//! The pipeline rewrites the source document through a series of stages:
//! 1. Front matter stripping (drop the source's own metadata block)
//! 2. Heading annotation (per-level font size tags)
//! 3. Method labels (HTTP verb markers become colored labels)
//! 4. Callouts (blockquote runs become styled callouts)
//!
//! Each stage is a pure text-to-text transform over the whole document;
//! no stage depends on the output of a later stage. Front matter stripping
//! must run first so stray `---` lines from the metadata block cannot be
//! misread by later stages.

mod stages;

pub use stages::{CalloutStage, FrontMatterStage, HeadingStage, LabelStage};

/// A stage in the document transformation pipeline.
pub trait Stage {
    /// Unique name for this stage (used in progress reporting).
    fn name(&self) -> &'static str;

    /// Transform the document text, returning the rewritten text.
    fn apply(&self, input: &str) -> String;
}

/// The document transformation pipeline.
///
/// Runs each stage in sequence over the whole document text. The default
/// pipeline is: front-matter → headings → labels → callouts.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with the standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(FrontMatterStage);
        pipeline.add_stage(HeadingStage);
        pipeline.add_stage(LabelStage);
        pipeline.add_stage(CalloutStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage in sequence over the document text.
    pub fn run(&self, input: &str) -> String {
        let mut content = input.to_string();
        for stage in &self.stages {
            content = stage.apply(&content);
        }
        content
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
