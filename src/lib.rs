pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use generator::assembler::{ProjectAssembler, ProjectSummary};
pub use generator::context::GeneratorContext;
