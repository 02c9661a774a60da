//! Form state for one generation front end.
//!
//! Holds the three request fields, the last successful item list, a loading
//! flag and a transient error. Each batch gets a [`BatchTicket`]; results that
//! arrive for a ticket other than the current one are dropped.


use std::time::{Duration, Instant};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::generator::{BatchExecutor, CompletionBackend, GenerateError, GeneratedItem, Generation};
use crate::request::{GenerationRequest, PostType, ValidationError};

/// How long an error stays visible after it is set
pub const ERROR_DISPLAY: Duration = Duration::from_secs(5);

/// Identifies the batch the session is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchTicket(Uuid);

#[derive(Debug, Clone)]
struct ShownError {
    message: String,
    set_at: Instant,
}

#[derive(Debug, Default)]
pub struct FormSession {
    post_type: Option<PostType>,
    topic: String,
    count: Option<u32>,
    items: Vec<GeneratedItem>,
    loading: bool,
    error: Option<ShownError>,
    current: Option<BatchTicket>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changing the type invalidates whatever is on screen
    pub fn set_post_type(&mut self, post_type: PostType) {
        self.post_type = Some(post_type);
        self.reset();
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Counts below one leave the field empty
    pub fn set_count(&mut self, count: u32) {
        self.count = (count >= 1).then_some(count);
    }

    pub fn post_type(&self) -> Option<PostType> {
        self.post_type
    }

    pub fn items(&self) -> &[GeneratedItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True only when every field is filled
    pub fn is_ready(&self) -> bool {
        self.request().is_ok()
    }

    /// Validated request built from the current fields
    pub fn request(&self) -> Result<GenerationRequest, ValidationError> {
        let post_type = self.post_type.ok_or(ValidationError::MissingPostType)?;
        let count = self.count.ok_or(ValidationError::ZeroCount)?;
        GenerationRequest::new(post_type, &self.topic, count)
    }

    /// "Your prompt will generate N posts for TYPE about TOPIC"
    pub fn summary(&self) -> Option<String> {
        let request = self.request().ok()?;
        Some(format!(
            "Your prompt will generate {} posts for {} about {}",
            request.total_count(),
            request.post_type(),
            request.topic()
        ))
    }

    /// The error message, while it is still within its display window
    pub fn visible_error(&self, now: Instant) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| now.saturating_duration_since(e.set_at) < ERROR_DISPLAY)
            .map(|e| e.message.as_str())
    }

    /// Clear results and error
    pub fn reset(&mut self) {
        self.items.clear();
        self.error = None;
    }

    /// Start a new batch, discarding the previous one
    pub fn begin(&mut self) -> BatchTicket {
        self.reset();
        let ticket = BatchTicket(Uuid::new_v4());
        self.current = Some(ticket);
        self.loading = true;
        ticket
    }

    /// Record the outcome of a batch. Returns false when the ticket is stale
    /// and the result was ignored.
    pub fn complete(
        &mut self,
        ticket: BatchTicket,
        result: Result<Generation, GenerateError>,
    ) -> bool {
        if self.current != Some(ticket) {
            debug!(?ticket, "Ignoring result from superseded batch");
            return false;
        }
        self.current = None;
        self.loading = false;

        match result {
            Ok(generation) => {
                self.items = generation.items;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                self.items.clear();
                self.error = Some(ShownError {
                    message: e.user_message(),
                    set_at: Instant::now(),
                });
            }
        }
        true
    }

    /// Validate, run the batch and record the result
    ///
    /// Upstream failures end up in [`FormSession::visible_error`]; only a
    /// validation failure is returned, and then nothing is sent.
    pub async fn generate<B: CompletionBackend>(
        &mut self,
        executor: &BatchExecutor<B>,
    ) -> Result<(), ValidationError> {
        let request = self.request()?;
        let ticket = self.begin();
        let result = executor.execute(&request).await;
        self.complete(ticket, result);
        Ok(())
    }
}
