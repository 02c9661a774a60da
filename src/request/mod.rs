mod error;
mod post_type;


pub use error::ValidationError;
pub use post_type::PostType;

use serde::Serialize;

/// A validated request for `total_count` generated items about `topic`
///
/// Only constructible through [`GenerationRequest::new`], so every instance
/// that reaches the executor has a non-blank topic and a positive count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    post_type: PostType,
    topic: String,
    total_count: u32,
}

impl GenerationRequest {
    /// Validate and build a request. The topic is trimmed.
    pub fn new(
        post_type: PostType,
        topic: impl AsRef<str>,
        total_count: u32,
    ) -> Result<Self, ValidationError> {
        let topic = topic.as_ref().trim();
        if topic.is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        if total_count == 0 {
            return Err(ValidationError::ZeroCount);
        }

        Ok(Self {
            post_type,
            topic: topic.to_string(),
            total_count,
        })
    }

    pub fn post_type(&self) -> PostType {
        self.post_type
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }
}
