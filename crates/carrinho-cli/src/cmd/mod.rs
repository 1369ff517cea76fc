//! Subcommand handlers for the `carrinho` binary.

pub mod catalog;
pub mod completions;
pub mod receipt;
pub mod shop;
