//! Catalog product card with its add-to-cart button.

use leptos::prelude::*;

use crate::catalog::Product;
use crate::state::cart::{CartState, browser_basket};
use crate::util::add_feedback::AddLatch;
use crate::util::clock::now_ms;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let latch = RwSignal::new(AddLatch::default());

    let on_add = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let mut acquired = false;
        latch.update(|l| acquired = l.try_acquire(now_ms()));
        if !acquired {
            return;
        }
        browser_basket(cart).add(product.card());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(
                crate::util::add_feedback::FEEDBACK_WINDOW_MS,
            ))
            .await;
            latch.update(AddLatch::release);
        });
    };

    view! {
        <div class="wb-product-card" data-product-id=product.id>
            <img class="wb-product-img" src=product.image alt=product.title/>
            <div class="wb-product-info">
                <div class="wb-price-current">{product.price}</div>
                <div class="wb-product-title">{product.title}</div>
            </div>
            <button
                class=move || if latch.get().is_held() { "wb-add-to-cart-btn added" } else { "wb-add-to-cart-btn" }
                data-product-id=product.id
                disabled=move || latch.get().is_held()
                on:click=on_add
            >
                {move || latch.get().label()}
            </button>
        </div>
    }
}
