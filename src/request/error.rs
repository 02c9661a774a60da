use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Topic must not be empty")]
    MissingTopic,

    #[error("Count must be at least 1")]
    ZeroCount,

    #[error("Post type must be chosen")]
    MissingPostType,

    #[error("Unknown post type: {0}")]
    UnknownPostType(String),
}
