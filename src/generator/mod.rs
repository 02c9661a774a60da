mod client;
mod error;
mod executor;
mod item;
mod types;


pub use client::{CompletionBackend, OpenAiClient};
pub use error::GenerateError;
pub use executor::BatchExecutor;
pub use item::{GeneratedItem, Generation};
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
