pub mod client;

use std::sync::Arc;

use thiserror::Error;

/// A single volume from the catalog, projected down to what the UI shows.
/// Built once per lookup and never mutated; each lookup replaces the whole
/// set.
#[derive(Debug, Clone, PartialEq)]
pub struct BookSummary {
    /// Provider volume id, unique within a result set.
    pub id: String,
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    /// Link to the provider's preview page, if the volume has one.
    pub preview_url: Option<String>,
    /// Cover image bytes, pre-fetched alongside the lookup (Arc to keep
    /// clones cheap). `None` when the volume has no thumbnail or the fetch
    /// failed.
    pub thumbnail: Option<Arc<Vec<u8>>>,
}

/// Why a catalog lookup failed. String payloads rather than source errors
/// so the variants stay cloneable inside UI messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}
