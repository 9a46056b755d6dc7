//! Persisted cart record and its line items.
//!
//! DESIGN
//! ======
//! The serde shape is the storage contract shared with every page:
//! `{"items":[{"id","title","price","image","quantity"}],"totalCount":n}`.
//! `totalCount` is written for readers that only want the badge number but is
//! recomputed on every load and mutation, never trusted.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// CART LINE
// =============================================================================

/// One product entry in the cart, keyed by product id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub title: String,
    /// Decorated price text as shown on the product card, e.g. `"1 990 ₽"`.
    pub price: String,
    pub image: String,
    /// Always at least 1 while the line is present.
    pub quantity: u32,
}

/// Line descriptor read from a product card by the add-to-cart writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: String,
}

impl ProductCard {
    /// Build a fresh line with quantity 1.
    #[must_use]
    pub fn into_line(self) -> CartLine {
        CartLine {
            id: self.id,
            title: self.title.trim().to_owned(),
            price: self.price.trim().to_owned(),
            image: self.image,
            quantity: 1,
        }
    }
}

// =============================================================================
// CART
// =============================================================================

/// Which panel the basket page renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CartPhase {
    #[default]
    Empty,
    NonEmpty,
}

/// The persisted cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total_count: u32,
}

impl Cart {
    /// The value an absent or unreadable record stands for.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> CartPhase {
        if self.is_empty() { CartPhase::Empty } else { CartPhase::NonEmpty }
    }

    /// Find the line for `id`.
    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.items.iter().find(|line| line.id == id)
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|line| line.id == id)
    }

    /// Sum of line quantities.
    #[must_use]
    pub fn quantity_sum(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    /// Recompute `total_count` from the lines.
    pub fn recount(&mut self) {
        self.total_count = self.quantity_sum();
    }

    /// Repair a record written by someone else: drop zero-quantity lines,
    /// merge duplicate ids into the first occurrence, recount.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        let mut merged: Vec<CartLine> = Vec::with_capacity(self.items.len());
        for line in self.items.drain(..) {
            if line.quantity == 0 {
                continue;
            }
            match merged.iter_mut().find(|kept| kept.id == line.id) {
                Some(kept) => kept.quantity = kept.quantity.saturating_add(line.quantity),
                None => merged.push(line),
            }
        }
        self.items = merged;
        self.recount();
        self
    }

    /// Decode a stored value. Anything that is not a well-formed cart is the
    /// empty cart.
    #[must_use]
    pub fn from_json_or_empty(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(cart) => cart.normalize(),
            Err(e) => {
                log::warn!("discarding malformed cart record: {e}");
                Self::empty()
            }
        }
    }
}
