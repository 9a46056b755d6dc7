//! Basket page: line list with quantity controls, totals, checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every control goes through `basket::Basket`, which loads the stored cart,
//! applies the action, and saves only when something changed. The view then
//! re-renders from the shared `CartState` signal.

use basket::{CartPhase, ClearOutcome, LineAction};
use leptos::prelude::*;

use crate::components::basket_line::BasketLine;
use crate::components::totals_panel::TotalsPanel;
use crate::state::cart::{CartState, browser_basket, checkout_notice, clear_notice, resync};

#[component]
pub fn BasketPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    // Another tab may have written since the header last synced.
    Effect::new(move || resync(cart));

    let on_action = Callback::new(move |(id, action): (String, LineAction)| {
        browser_basket(cart).mutate(&id, action);
        cart.update(|s| s.notice = None);
    });

    let on_checkout = Callback::new(move |()| {
        let outcome = browser_basket(cart).checkout();
        cart.update(|s| s.notice = Some(checkout_notice(outcome)));
    });

    let on_clear = Callback::new(move |()| {
        if cart.with_untracked(|s| s.cart.is_empty()) {
            cart.update(|s| s.notice = Some(clear_notice(ClearOutcome::AlreadyEmpty)));
            return;
        }
        if !confirm_clear() {
            return;
        }
        let outcome = browser_basket(cart).clear();
        cart.update(|s| s.notice = Some(clear_notice(outcome)));
    });

    let notice = move || cart.get().notice;

    view! {
        <div class="basket-page">
            <h1>"Корзина"</h1>

            {move || {
                notice().map(|n| {
                    let class = n.class();
                    view! { <p class=class>{n.text}</p> }
                })
            }}

            <Show
                when=move || cart.get().phase() == CartPhase::NonEmpty
                fallback=|| {
                    view! {
                        <div class="empty-basket" id="emptyBasket">
                            <p>"В корзине пока пусто"</p>
                            <a href="/" class="btn btn--primary">"Перейти в каталог"</a>
                        </div>
                    }
                }
            >
                <div class="basket-items" id="basketItems">
                    <For
                        each=move || cart.get().cart.items
                        key=|line| (line.id.clone(), line.quantity)
                        children=move |line| view! { <BasketLine line=line on_action=on_action/> }
                    />
                </div>
                <TotalsPanel on_checkout=on_checkout on_clear=on_clear/>
            </Show>
        </div>
    }
}

/// Ask before wiping a non-empty cart. Outside the browser there is nobody to
/// ask, so the answer is yes.
fn confirm_clear() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Очистить корзину?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}
