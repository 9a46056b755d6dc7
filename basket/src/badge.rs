//! Header cart-count badge.
//!
//! The badge has no state of its own: it is recomputed from the stored cart on
//! page load, after each local save, and whenever another tab changes the
//! cart key.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use crate::model::Cart;
use crate::store::CART_KEY;

/// Counts above this get the wide badge style.
const HIGH_COUNT_THRESHOLD: u32 = 9;

/// What the header counter shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Badge {
    pub count: u32,
    pub visible: bool,
    pub high_count: bool,
}

impl Badge {
    #[must_use]
    pub fn project(cart: &Cart) -> Self {
        let count = cart.quantity_sum();
        Self { count, visible: count > 0, high_count: count > HIGH_COUNT_THRESHOLD }
    }
}

/// Whether a storage-change notification concerns the cart.
///
/// `None` is what browsers report when another context cleared the whole
/// storage, which drops the cart too.
#[must_use]
pub fn is_cart_key_change(key: Option<&str>) -> bool {
    key.map_or(true, |key| key == CART_KEY)
}
