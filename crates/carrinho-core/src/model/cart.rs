use serde::Serialize;
use tracing::{debug, warn};

use crate::model::item::{Catalog, CatalogItem};
use crate::model::price::Price;

/// One catalog item's presence in the cart plus its quantity.
///
/// Quantity is always at least 1; a line that would reach zero is removed
/// outright instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.item.price.times(self.quantity)
    }
}

/// In-memory shopping cart: ordered lines, at most one per catalog id.
///
/// Every operation is total. Unknown ids are ignored rather than signalled —
/// the catalog is closed and fully controlled, so there is nothing useful to
/// report. `add`/`remove` return whether the cart changed so a view layer can
/// give feedback without the core raising errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit of `id` to the cart.
    ///
    /// An existing line is bumped in place; a first add appends a new line
    /// with quantity 1 at the end. Relative order of existing lines never
    /// changes.
    pub fn add(&mut self, catalog: &Catalog, id: u32) -> bool {
        let Some(item) = catalog.get(id) else {
            warn!(id, "ignoring add for unknown catalog id");
            return false;
        };
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(id, quantity = line.quantity, "bumped cart line");
        } else {
            self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            });
            debug!(id, "appended cart line");
        }
        true
    }

    /// Remove the whole line for `id`, regardless of quantity.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.item.id != id);
        if self.lines.len() == before {
            warn!(id, "ignoring remove for id not in cart");
            false
        } else {
            debug!(id, "removed cart line");
            true
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Grand total over all lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity currently in the cart for `id`, if any.
    #[must_use]
    pub fn quantity_of(&self, id: u32) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item.id == id)
            .map(|line| line.quantity)
    }
}
