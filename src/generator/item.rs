use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::links::{extract_reference, Reference};
use crate::request::PostType;

/// One cleaned line of model output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub text: String,
    /// Cited source, only ever set for statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
}

impl GeneratedItem {
    pub fn new(text: String, post_type: PostType) -> Self {
        let reference = match post_type {
            PostType::Statistic => extract_reference(&text),
            PostType::SocialMedia => None,
        };
        Self { text, reference }
    }
}

/// The merged output of one batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub post_type: PostType,
    pub items: Vec<GeneratedItem>,
    pub generated_at: DateTime<Utc>,
}

impl Generation {
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
