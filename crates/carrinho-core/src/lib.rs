//! carrinho-core library.
//!
//! Domain model for a small storefront: an immutable [`Catalog`] of
//! purchasable courses, an in-memory [`Cart`] (ordered lines, one per
//! catalog id), exact centavo [`Price`] arithmetic, and [`Receipt`]
//! snapshots for printing.
//!
//! Cart operations are total functions: unknown ids are ignored, nothing
//! panics, nothing returns `Result`. The only fallible surface is catalog
//! construction and catalog-file loading in [`config`].

pub mod config;
pub mod error;
pub mod model;
pub mod receipt;

pub use error::CatalogError;
pub use model::cart::{Cart, CartLine};
pub use model::item::{Catalog, CatalogItem};
pub use model::price::Price;
pub use receipt::{Receipt, ReceiptLine};
