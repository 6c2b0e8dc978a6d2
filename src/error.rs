use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShyPostsError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Content item not found: {0}")]
    ItemNotFound(ItemId),
}

pub type Result<T> = std::result::Result<T, ShyPostsError>;
