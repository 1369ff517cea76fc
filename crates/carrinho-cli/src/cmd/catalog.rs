//! `carrinho catalog` — list the items for sale.

use crate::output::{self, OutputMode, Renderable};
use anyhow::Result;
use carrinho_core::{Catalog, Price};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Only show items at or below this price, in reais.
    #[arg(long, value_name = "REAIS")]
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
struct CatalogRow {
    id: u32,
    title: String,
    price: Price,
}

impl Renderable for CatalogRow {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{:>3}  {:<32} {:>10}",
            self.id,
            self.title,
            self.price.to_string()
        )
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(w, self).map_err(io::Error::other)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}\t{}\t{}", self.id, self.title, self.price)
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "title", "price"]
    }
}

/// Run `carrinho catalog`: list items, optionally capped at `--max-price`.
///
/// # Errors
///
/// Returns an error if the price cap is not a valid price or if writing to
/// stdout fails.
pub fn run_catalog(
    args: &CatalogArgs,
    catalog: &Catalog,
    output: OutputMode,
    quiet: bool,
) -> Result<()> {
    let cap = args.max_price.map(Price::try_from).transpose()?;
    let rows: Vec<CatalogRow> = catalog
        .iter()
        .filter(|item| cap.is_none_or(|cap| item.price <= cap))
        .map(|item| CatalogRow {
            id: item.id,
            title: item.title.clone(),
            price: item.price,
        })
        .collect();

    if output.is_pretty() && !quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        output::pretty_section(&mut out, catalog.title())?;
    }
    output::render_list(&rows, output)?;
    Ok(())
}
