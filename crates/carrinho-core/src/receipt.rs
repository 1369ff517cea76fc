//! Nota fiscal snapshots.
//!
//! A [`Receipt`] freezes a cart at issue time: one row per line with unit
//! price, quantity, and subtotal, plus the grand total and a timestamp.
//! Building one never mutates the cart; where the rendered text goes
//! (terminal, pipe, printer spooler) is the caller's business.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::model::cart::Cart;
use crate::model::price::Price;

/// Column width of the rendered text receipt.
const RECEIPT_WIDTH: usize = 42;

/// One printed row: a cart line at issue time.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptLine {
    pub id: u32,
    pub title: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub subtotal: Price,
}

/// Immutable snapshot of a cart, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub store: String,
    pub lines: Vec<ReceiptLine>,
    pub total: Price,
    pub issued_at: DateTime<Local>,
}

impl Receipt {
    /// Snapshot `cart` right now.
    #[must_use]
    pub fn from_cart(store: &str, cart: &Cart) -> Self {
        Self::issued(store, cart, Local::now())
    }

    /// Snapshot `cart` with an explicit issue time.
    #[must_use]
    pub fn issued(store: &str, cart: &Cart, issued_at: DateTime<Local>) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| ReceiptLine {
                id: line.item.id,
                title: line.item.title.clone(),
                unit_price: line.item.price,
                quantity: line.quantity,
                subtotal: line.subtotal(),
            })
            .collect();
        Self {
            store: store.to_string(),
            lines,
            total: cart.total(),
            issued_at,
        }
    }

    /// Fixed-width text rendering.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:^RECEIPT_WIDTH$}\n", "NOTA FISCAL"));
        out.push_str(&format!("{:^RECEIPT_WIDTH$}\n", self.store));
        out.push_str(&format!(
            "{:^RECEIPT_WIDTH$}\n",
            self.issued_at.format("%d/%m/%Y %H:%M").to_string()
        ));
        out.push_str(&rule());
        if self.lines.is_empty() {
            out.push_str(&format!("{:^RECEIPT_WIDTH$}\n", "(carrinho vazio)"));
        }
        for line in &self.lines {
            out.push_str(&line.title);
            out.push('\n');
            out.push_str(&justified(
                &format!("  {} x {}", line.quantity, line.unit_price),
                &line.subtotal.to_string(),
            ));
        }
        out.push_str(&rule());
        out.push_str(&justified("TOTAL", &self.total.to_string()));
        out
    }
}

fn rule() -> String {
    format!("{:-<RECEIPT_WIDTH$}\n", "")
}

/// `left` flush to the margin, `right` aligned to the receipt edge.
fn justified(left: &str, right: &str) -> String {
    let pad = RECEIPT_WIDTH
        .saturating_sub(left.len())
        .max(right.len() + 1);
    format!("{left}{right:>pad$}\n")
}

#[cfg(test)]
mod tests {
    use super::Receipt;
    use crate::model::cart::Cart;
    use crate::model::item::Catalog;
    use chrono::{Local, TimeZone};

    fn scenario_cart() -> (Catalog, Cart) {
        let catalog = Catalog::builtin();
        let mut cart = Cart::default();
        cart.add(&catalog, 1);
        cart.add(&catalog, 1);
        cart.add(&catalog, 2);
        (catalog, cart)
    }

    #[test]
    fn snapshot_carries_lines_and_total() {
        let (catalog, cart) = scenario_cart();
        let issued_at = Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let receipt = Receipt::issued(catalog.title(), &cart, issued_at);

        assert_eq!(receipt.store, "Cursos de Maquiagem");
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].quantity, 2);
        assert_eq!(receipt.lines[0].subtotal.cents(), 40_000);
        assert_eq!(receipt.total.cents(), 65_000);

        // building the receipt does not touch the cart
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn text_rendering_is_aligned_and_complete() {
        let (catalog, cart) = scenario_cart();
        let issued_at = Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let text = Receipt::issued(catalog.title(), &cart, issued_at).render_text();

        assert!(text.contains("NOTA FISCAL"));
        assert!(text.contains("14/03/2025 09:30"));
        assert!(text.contains("Maquiagem - Basica"));
        assert!(text.contains("2 x R$ 200.00"));
        assert!(text.contains("R$ 400.00"));
        assert!(text.lines().last().is_some_and(|l| l.starts_with("TOTAL")));
        assert!(text.ends_with("R$ 650.00\n"));
    }

    #[test]
    fn empty_cart_prints_zero_total() {
        let text = Receipt::from_cart("Loja", &Cart::default()).render_text();
        assert!(text.contains("(carrinho vazio)"));
        assert!(text.ends_with("R$ 0.00\n"));
    }

    #[test]
    fn json_uses_fractional_reais() {
        let (catalog, cart) = scenario_cart();
        let receipt = Receipt::from_cart(catalog.title(), &cart);
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["total"], 650.0);
        assert_eq!(json["lines"][0]["unit_price"], 200.0);
        assert_eq!(json["lines"][1]["id"], 2);
    }
}
