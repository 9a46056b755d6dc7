//! Site header: logo, navigation, sign-in link, and the cart badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every page. The badge is a pure projection of the shared
//! `CartState` signal, which `App` keeps in sync with storage.

use leptos::prelude::*;

use crate::state::auth::{AuthState, sign_out};
use crate::state::cart::CartState;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let badge = move || cart.get().badge();
    let badge_class = move || {
        if badge().high_count { "cart-count high-count" } else { "cart-count" }
    };
    let badge_display = move || if badge().visible { "flex" } else { "none" };

    let signed_in = move || auth.get().is_authenticated();

    view! {
        <header class=move || ui.get().header_class()>
            <a href="/" class="site-logo">"WB Shop"</a>
            <nav class="site-nav">
                <a href="/" class="nav-link">"Каталог"</a>
                <a href="/basket" class="nav-link">"Корзина"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <a
                href="/login"
                class=move || if signed_in() { "wb-login-btn authenticated" } else { "wb-login-btn" }
            >
                <span class="wb-login-icon">"👤"</span>
                {move || if signed_in() { " Мой профиль" } else { " Войти" }}
            </a>
            <Show when=signed_in>
                <button type="button" class="wb-logout-btn" on:click=move |_| sign_out(auth)>
                    "Выйти"
                </button>
            </Show>
            <a href="/basket" class="cart-link" title="Корзина">
                "🛒"
                <span class=badge_class style:display=badge_display>
                    {move || badge().count}
                </span>
            </a>
        </header>
    }
}
