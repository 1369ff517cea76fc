use thiserror::Error;

/// Failures constructing or loading a catalog.
///
/// Cart operations never produce errors — unknown ids are ignored by design
/// (the catalog is closed and fully controlled) — so the error surface is
/// limited to catalog input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate catalog item id {id}")]
    DuplicateId { id: u32 },

    #[error("catalog item {id} has an empty title")]
    EmptyTitle { id: u32 },

    #[error("invalid price {value}: must be finite and non-negative")]
    InvalidPrice { value: f64 },
}
