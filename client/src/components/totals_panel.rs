//! Basket summary: items total, promotional discount, amount due, and the
//! checkout / clear controls.

use basket::format_amount;
use leptos::prelude::*;

use crate::state::cart::CartState;

#[component]
pub fn TotalsPanel(on_checkout: Callback<()>, on_clear: Callback<()>) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let totals = move || cart.get().totals();

    view! {
        <div class="basket-summary" id="basketSummary">
            <div class="basket-summary__row">
                <span>{move || format!("Товары ({})", cart.get().badge().count)}</span>
                <span>{move || format_amount(totals().items_total)}</span>
            </div>
            <div class="basket-summary__row basket-summary__row--discount">
                <span>{move || cart.get().discount_label()}</span>
                <span>{move || format!("−{}", format_amount(totals().discount))}</span>
            </div>
            <div class="basket-summary__row basket-summary__row--total">
                <span>"Итого"</span>
                <span id="totalAmount">{move || format_amount(totals().final_total)}</span>
            </div>
            <button class="btn btn--primary" id="checkoutBtn" on:click=move |_| on_checkout.run(())>
                "Оформить заказ"
            </button>
            <button class="btn basket-summary__clear" on:click=move |_| on_clear.run(())>
                "Очистить корзину"
            </button>
        </div>
    }
}
