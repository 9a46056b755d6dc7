//! Page-facing cart operations.
//!
//! ERROR HANDLING
//! ==============
//! Storage is the source of truth. A rejected write is logged and nothing
//! else changes: save hooks do not fire, so views bound to them keep showing
//! the stored cart. `add` and `mutate` return the cart they computed either
//! way. `checkout` and `clear` report a failed write as `NotSaved`.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use crate::action::{CartAction, LineAction, apply};
use crate::badge::Badge;
use crate::model::{Cart, ProductCard};
use crate::store::{CartStore, KeyValueStore};
use crate::totals::{DiscountRate, Totals};

/// Result of [`Basket::checkout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; the stored value was not touched.
    EmptyCart,
    /// Order accepted and the cart reset. Carries the charged totals.
    Placed { totals: Totals },
    /// The empty cart could not be written; the order was not placed.
    NotSaved,
}

/// Result of [`Basket::clear`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    AlreadyEmpty,
    Cleared,
    /// Storage rejected the write and still holds the old cart.
    NotSaved,
}

/// Cart writer and mutator bound to one store.
pub struct Basket<S> {
    store: CartStore<S>,
    rate: DiscountRate,
}

impl<S: KeyValueStore> Basket<S> {
    #[must_use]
    pub fn new(store: CartStore<S>) -> Self {
        Self { store, rate: DiscountRate::PROMO }
    }

    #[must_use]
    pub fn with_rate(mut self, rate: DiscountRate) -> Self {
        self.rate = rate;
        self
    }

    #[must_use]
    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CartStore<S> {
        &mut self.store
    }

    #[must_use]
    pub fn rate(&self) -> DiscountRate {
        self.rate
    }

    #[must_use]
    pub fn cart(&self) -> Cart {
        self.store.load()
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.cart(), self.rate)
    }

    #[must_use]
    pub fn badge(&self) -> Badge {
        Badge::project(&self.cart())
    }

    /// Add one unit of `card`, merging with an existing line of the same id.
    pub fn add(&self, card: ProductCard) -> Cart {
        self.dispatch(&CartAction::Add(card)).into_cart()
    }

    /// Apply a basket-page control. Unknown ids leave storage untouched.
    pub fn mutate(&self, id: &str, action: LineAction) -> Cart {
        self.dispatch(&CartAction::Line { id: id.to_owned(), action }).into_cart()
    }

    /// Place the order: report totals and reset the cart.
    pub fn checkout(&self) -> CheckoutOutcome {
        let cart = self.cart();
        if cart.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }
        let totals = Totals::compute(&cart, self.rate);
        if !self.persist(&Cart::empty()) {
            return CheckoutOutcome::NotSaved;
        }
        log::info!("order placed: {} items, {} total", cart.total_count, totals.final_total);
        CheckoutOutcome::Placed { totals }
    }

    /// Explicit clear. An empty cart is reported, not rewritten.
    pub fn clear(&self) -> ClearOutcome {
        match self.dispatch(&CartAction::Clear) {
            Dispatch::Saved(_) => ClearOutcome::Cleared,
            Dispatch::NotSaved(_) => ClearOutcome::NotSaved,
            Dispatch::Unchanged(_) => ClearOutcome::AlreadyEmpty,
        }
    }

    /// Load, apply, and save when the action changed something.
    fn dispatch(&self, action: &CartAction) -> Dispatch {
        let cart = self.cart();
        match apply(&cart, action) {
            Some(next) if self.persist(&next) => Dispatch::Saved(next),
            Some(next) => Dispatch::NotSaved(next),
            None => Dispatch::Unchanged(cart),
        }
    }

    /// Whether the write went through.
    fn persist(&self, cart: &Cart) -> bool {
        match self.store.save(cart) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("cart save failed: {e}");
                false
            }
        }
    }
}

enum Dispatch {
    Saved(Cart),
    NotSaved(Cart),
    Unchanged(Cart),
}

impl Dispatch {
    fn into_cart(self) -> Cart {
        match self {
            Self::Saved(cart) | Self::NotSaved(cart) | Self::Unchanged(cart) => cart,
        }
    }
}
