//! Domain model: prices, catalog items, and the cart.

pub mod cart;
pub mod item;
pub mod price;
