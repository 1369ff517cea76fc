//! `carrinho receipt` — replay add intents and print the nota fiscal.
//!
//! The scriptable twin of the shop view's print action: every `--item` is an
//! add (repeat an id to raise its quantity), `--drop` removes whole lines
//! afterwards, and the resulting receipt goes to stdout. Unknown ids are
//! ignored, exactly as in the interactive view.

use crate::output::{OutputMode, Renderable, render_item};
use anyhow::Result;
use carrinho_core::{Cart, Catalog, Receipt};
use clap::Args;
use std::io::{self, Write};
use tracing::warn;

#[derive(Args, Debug, Default)]
pub struct ReceiptArgs {
    /// Catalog item id to add; repeat an id to increase its quantity.
    #[arg(long = "item", value_name = "ID")]
    pub items: Vec<u32>,

    /// Remove this item's whole line after the adds are applied.
    #[arg(long = "drop", value_name = "ID")]
    pub drops: Vec<u32>,
}

impl Renderable for Receipt {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        write!(w, "{}", self.render_text())
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(w, self).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(
                w,
                "{}\t{}\t{}\t{}",
                line.id, line.title, line.quantity, line.subtotal
            )?;
        }
        writeln!(w, "total\t\t\t{}", self.total)
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "title", "quantity", "subtotal"]
    }
}

/// Run `carrinho receipt`: build a cart from the args and print its receipt.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_receipt(args: &ReceiptArgs, catalog: &Catalog, output: OutputMode) -> Result<()> {
    let cart = build_cart(args, catalog);
    let receipt = Receipt::from_cart(catalog.title(), &cart);
    render_item(&receipt, output)?;
    Ok(())
}

fn build_cart(args: &ReceiptArgs, catalog: &Catalog) -> Cart {
    let mut cart = Cart::default();
    let mut ignored = 0u32;
    for &id in &args.items {
        if !cart.add(catalog, id) {
            ignored += 1;
        }
    }
    for &id in &args.drops {
        cart.remove(id);
    }
    if ignored > 0 {
        warn!(ignored, "ignored ids not present in the catalog");
    }
    cart
}
