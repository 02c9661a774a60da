mod pipeline;
mod rules;

#[cfg(test)]
mod tests;

pub use pipeline::CleaningPipeline;
pub use rules::{CollapseWhitespace, StripHashtags, StripListMarker, StripQuotes, TrimWhitespace};

/// A total text transform over one line of model output
pub trait LineRule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Transform one line. Must never fail.
    fn apply(&self, line: &str) -> String;
}
