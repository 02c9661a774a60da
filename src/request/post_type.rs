use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of text the model is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostType {
    /// Short social media posts
    #[serde(rename = "Social Media")]
    SocialMedia,
    /// Statistical insights, each followed by a reference link
    Statistic,
}

impl PostType {
    /// Human-readable label, also used as the spreadsheet sheet name
    pub fn label(&self) -> &'static str {
        match self {
            PostType::SocialMedia => "Social Media",
            PostType::Statistic => "Statistic",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PostType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "social media" | "social" => Ok(PostType::SocialMedia),
            "statistic" | "statistics" | "stat" => Ok(PostType::Statistic),
            "" => Err(ValidationError::MissingPostType),
            _ => Err(ValidationError::UnknownPostType(s.to_string())),
        }
    }
}
