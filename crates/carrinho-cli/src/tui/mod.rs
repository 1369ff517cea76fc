//! Terminal user interface (TUI) for carrinho.
//!
//! ## Entry points
//!
//! - [`shop::ShopView`] — interactive catalog + cart view, driven by
//!   `carrinho shop`.

pub mod shop;
