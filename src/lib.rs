// Public API exports
pub mod batcher;
pub mod cleaner;
pub mod config;
pub mod export;
pub mod generator;
pub mod links;
pub mod prompt;
pub mod request;
pub mod session;

#[cfg(test)]
mod config_tests;

// Re-export main types for convenience
pub use batcher::{Batcher, SubRequest, DEFAULT_CEILING};
pub use cleaner::{CleaningPipeline, LineRule};
pub use config::{ConfigError, GeneratorConfig};
pub use export::{export_csv, write_csv, ExportError, SheetWebhook, DEFAULT_CSV_FILENAME};
pub use generator::{
    BatchExecutor, CompletionBackend, GenerateError, GeneratedItem, Generation, OpenAiClient,
};
pub use links::{extract_reference, segments, Reference, Segment};
pub use prompt::build_prompt;
pub use request::{GenerationRequest, PostType, ValidationError};
pub use session::{FormSession, ERROR_DISPLAY};
