use super::rules::{CollapseWhitespace, StripHashtags, StripListMarker, StripQuotes, TrimWhitespace};
use super::LineRule;
use crate::request::PostType;

/// Ordered list of line rules for one post type
pub struct CleaningPipeline {
    rules: Vec<Box<dyn LineRule>>,
}

impl CleaningPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Standard rule order for a post type
    ///
    /// Quotes are only stripped from statistics; social posts keep them.
    pub fn for_post_type(post_type: PostType) -> Self {
        let mut pipeline = Self::new();
        pipeline.push(TrimWhitespace);
        pipeline.push(StripHashtags);
        if post_type == PostType::Statistic {
            pipeline.push(StripQuotes);
        }
        pipeline.push(StripListMarker);
        pipeline.push(CollapseWhitespace);
        pipeline
    }

    /// Append a rule to the end of the pipeline
    pub fn push(&mut self, rule: impl LineRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Clean a single line
    ///
    /// Rules only ever delete characters or normalize whitespace, so the
    /// pipeline is re-run until the line stops changing. The result is
    /// therefore stable under a second cleaning.
    pub fn clean(&self, line: &str) -> String {
        let mut current = line.to_string();
        loop {
            let next = self
                .rules
                .iter()
                .fold(current.clone(), |text, rule| rule.apply(&text));
            if next == current {
                return next;
            }
            current = next;
        }
    }

    /// Split a raw response body into cleaned, non-empty lines
    pub fn clean_response(&self, body: &str) -> Vec<String> {
        body.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.clean(line))
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::for_post_type(PostType::SocialMedia)
    }
}
