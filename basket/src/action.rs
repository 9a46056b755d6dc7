//! Cart transitions as a pure function.
//!
//! DESIGN
//! ======
//! Pages translate clicks into [`CartAction`] values and hand them to
//! [`apply`]; persistence and rendering happen afterwards, and only when the
//! transition actually changed something.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseActionError;
use crate::model::{Cart, ProductCard};

/// Per-line basket control, as carried in the `data-action` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAction {
    Increase,
    /// Removes the line instead of letting quantity reach 0.
    Decrease,
    Remove,
}

impl LineAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for LineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            "remove" => Ok(Self::Remove),
            other => Err(ParseActionError(other.to_owned())),
        }
    }
}

/// Anything that can happen to a cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartAction {
    /// Add-to-cart from a product card: merge by id or append.
    Add(ProductCard),
    /// Basket page control on an existing line.
    Line { id: String, action: LineAction },
    /// Reset to the empty cart (explicit clear or checkout).
    Clear,
}

/// Apply `action` to `cart`.
///
/// Returns `None` when the action is a no-op: an id that is not in the cart,
/// or clearing an already empty cart. Every returned cart has its
/// `total_count` recomputed.
#[must_use]
pub fn apply(cart: &Cart, action: &CartAction) -> Option<Cart> {
    let mut next = cart.clone();
    match action {
        CartAction::Add(card) => match next.position(&card.id) {
            Some(index) => {
                let line = &mut next.items[index];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => next.items.push(card.clone().into_line()),
        },
        CartAction::Line { id, action } => {
            let index = next.position(id)?;
            match action {
                LineAction::Increase => {
                    let line = &mut next.items[index];
                    line.quantity = line.quantity.saturating_add(1);
                }
                LineAction::Decrease if next.items[index].quantity > 1 => {
                    next.items[index].quantity -= 1;
                }
                LineAction::Decrease | LineAction::Remove => {
                    next.items.remove(index);
                }
            }
        }
        CartAction::Clear => {
            if cart.is_empty() {
                return None;
            }
            next = Cart::empty();
        }
    }
    next.recount();
    Some(next)
}
