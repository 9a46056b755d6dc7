//! Reactive mirror of the persisted cart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage is the source of truth. `CartState` holds the last cart this
//! document loaded or saved; every cart save made through [`browser_basket`]
//! pushes the saved value back into the signal, and storage notifications
//! from other tabs trigger [`resync`]. The header badge and the basket page
//! are projections of this signal.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use basket::{
    Badge, Basket, Cart, CartPhase, CartStore, CheckoutOutcome, ClearOutcome, DiscountRate, Totals,
    format_amount,
};
use leptos::prelude::*;

use crate::state::notice::Notice;
use crate::util::storage::BrowserStorage;

#[derive(Clone, Debug, PartialEq)]
pub struct CartState {
    pub cart: Cart,
    pub rate: DiscountRate,
    /// Result of the last checkout or clear, shown on the basket page.
    pub notice: Option<Notice>,
}

impl Default for CartState {
    fn default() -> Self {
        Self { cart: Cart::empty(), rate: DiscountRate::PROMO, notice: None }
    }
}

impl CartState {
    pub fn badge(&self) -> Badge {
        Badge::project(&self.cart)
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(&self.cart, self.rate)
    }

    pub fn phase(&self) -> CartPhase {
        self.cart.phase()
    }

    /// Discount label for the totals panel, e.g. `Скидка 35%`.
    pub fn discount_label(&self) -> String {
        let bp = self.rate.basis_points();
        if bp % 100 == 0 {
            format!("Скидка {}%", bp / 100)
        } else {
            format!("Скидка {}.{:02}%", bp / 100, bp % 100)
        }
    }
}

pub fn checkout_notice(outcome: CheckoutOutcome) -> Notice {
    match outcome {
        CheckoutOutcome::EmptyCart => Notice::error("Корзина пуста!"),
        CheckoutOutcome::Placed { totals } => {
            Notice::success(format!("Заказ оформлен! Сумма: {}", format_amount(totals.final_total)))
        }
        CheckoutOutcome::NotSaved => Notice::error("Не удалось оформить заказ: корзина не сохранена"),
    }
}

pub fn clear_notice(outcome: ClearOutcome) -> Notice {
    match outcome {
        ClearOutcome::AlreadyEmpty => Notice::info("Корзина уже пуста"),
        ClearOutcome::Cleared => Notice::info("Корзина очищена"),
        ClearOutcome::NotSaved => Notice::error("Не удалось очистить корзину"),
    }
}

/// Cart service over `localStorage` whose saves refresh `state`.
pub fn browser_basket(state: RwSignal<CartState>) -> Basket<BrowserStorage> {
    let mut store = CartStore::new(BrowserStorage);
    store.on_save(move |saved| {
        let saved = saved.clone();
        state.update(|s| s.cart = saved);
    });
    let rate = state.with_untracked(|s| s.rate);
    Basket::new(store).with_rate(rate)
}

/// Re-read the stored cart into `state`.
pub fn resync(state: RwSignal<CartState>) {
    let loaded = CartStore::new(BrowserStorage).load();
    if state.with_untracked(|s| s.cart != loaded) {
        state.update(|s| s.cart = loaded);
    }
}
