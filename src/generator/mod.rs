pub mod assembler;
pub mod cleaner;
pub mod context;
pub mod dependencies;
pub mod prompts;
pub mod structure;

pub use assembler::{ProjectAssembler, ProjectSummary};
pub use context::GeneratorContext;
