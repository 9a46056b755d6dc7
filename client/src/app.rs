//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{basket::BasketPage, catalog::CatalogPage, login::LoginPage};
use crate::state::{auth::AuthState, cart::CartState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared cart, auth, and UI contexts. In the browser it also
/// loads the stored cart and sign-in marker and listens for storage changes
/// from other tabs and for page scroll.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(CartState::default());
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(cart);
    provide_context(auth);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    install_browser_sync(cart, auth, ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="WB Shop"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Страница не найдена.".into_view()>
                    <Route path=StaticSegment("") view=CatalogPage/>
                    <Route path=StaticSegment("basket") view=BasketPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn install_browser_sync(cart: RwSignal<CartState>, auth: RwSignal<AuthState>, ui: RwSignal<UiState>) {
    use crate::state::cart::resync;
    use crate::util::session::load_session;
    use crate::util::storage::BrowserStorage;

    Effect::new(move || {
        resync(cart);
        if let Some(session) = load_session(&BrowserStorage, crate::util::clock::now_ms()) {
            auth.update(|a| a.session = Some(session));
        }
        if let Some(window) = web_sys::window() {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            ui.update(|u| u.on_scroll(scroll_y));
        }
    });

    // Writes from this tab never fire `storage` here; the save hook covers them.
    let storage_handle = window_event_listener(leptos::ev::storage, move |ev| {
        if basket::is_cart_key_change(ev.key().as_deref()) {
            resync(cart);
        }
    });
    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        ui.update(|u| u.on_scroll(scroll_y));
    });
    on_cleanup(move || {
        storage_handle.remove();
        scroll_handle.remove();
    });
}
