use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CatalogError;
use crate::model::price::Price;

/// Display title of the catalog every install ships with.
pub const BUILTIN_TITLE: &str = "Cursos de Maquiagem";

/// One purchasable course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub price: Price,
}

/// Fixed, ordered list of purchasable items with unique ids.
///
/// Immutable after construction; the cart holds copies of its items, so a
/// catalog outlives nothing and nothing mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    title: String,
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, validating id uniqueness and non-empty titles.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two items share an id, or
    /// [`CatalogError::EmptyTitle`] if an item title is blank.
    pub fn new(title: impl Into<String>, items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { id: item.id });
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId { id: item.id });
            }
        }
        Ok(Self {
            title: title.into(),
            items,
        })
    }

    /// The built-in course list used when no catalog file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        let items = vec![
            CatalogItem {
                id: 1,
                title: "Maquiagem - Basica".to_string(),
                price: Price::from_reais(200),
            },
            CatalogItem {
                id: 2,
                title: "Maquiagem Dia - Dia".to_string(),
                price: Price::from_reais(250),
            },
            CatalogItem {
                id: 3,
                title: "Maquiagem Profissional".to_string(),
                price: Price::from_reais(500),
            },
            CatalogItem {
                id: 4,
                title: "Maquiagem Casamento".to_string(),
                price: Price::from_reais(650),
            },
        ];
        Self {
            title: BUILTIN_TITLE.to_string(),
            items,
        }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
