use chrono::Utc;
use futures::future::try_join_all;
use tracing::{debug, info, instrument, warn};

use super::client::CompletionBackend;
use super::error::GenerateError;
use super::item::{GeneratedItem, Generation};
use crate::batcher::Batcher;
use crate::cleaner::CleaningPipeline;
use crate::prompt::build_prompt;
use crate::request::GenerationRequest;

/// Fans a request out into ceiling-sized upstream calls and merges the results
pub struct BatchExecutor<B> {
    backend: B,
    batcher: Batcher,
}

impl<B: CompletionBackend> BatchExecutor<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            batcher: Batcher::default(),
        }
    }

    pub fn with_batcher(mut self, batcher: Batcher) -> Self {
        self.batcher = batcher;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run every sub-request concurrently and merge the cleaned lines
    ///
    /// Fails fast: the first upstream error is returned and every other
    /// in-flight call is dropped along with any output already received.
    #[instrument(
        skip(self, request),
        fields(post_type = %request.post_type(), total = request.total_count())
    )]
    pub async fn execute(&self, request: &GenerationRequest) -> Result<Generation, GenerateError> {
        let plan = self.batcher.plan(request.total_count());
        info!(sub_requests = plan.len(), "Dispatching batch");

        let calls = plan.iter().enumerate().map(|(index, sub)| {
            let prompt = build_prompt(request.post_type(), request.topic(), sub.count);
            async move {
                let body = self.backend.complete(prompt).await?;
                debug!(index, requested = sub.count, "Sub-request finished");
                Ok::<_, GenerateError>(body)
            }
        });

        let bodies = try_join_all(calls).await.inspect_err(|e| {
            warn!(error = %e, "Batch aborted");
        })?;

        let pipeline = CleaningPipeline::for_post_type(request.post_type());
        let items: Vec<GeneratedItem> = bodies
            .iter()
            .flat_map(|body| pipeline.clean_response(body))
            .map(|text| GeneratedItem::new(text, request.post_type()))
            .collect();

        info!(items = items.len(), "Batch complete");
        Ok(Generation {
            post_type: request.post_type(),
            items,
            generated_at: Utc::now(),
        })
    }
}
