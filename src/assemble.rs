mod assembler;
pub mod pipeline;
mod templates;

pub use assembler::{AssembleError, AssembleResult, Assembler};
