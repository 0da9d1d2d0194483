use thiserror::Error;
use wedplan_domain::{CategoryTag, ItemId};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Catalog entry not found: {category} #{id}")]
    CatalogEntryNotFound { category: CategoryTag, id: ItemId },
    #[error("Validation failed: {0}")]
    Validation(String),
}
