//! Catalog page: search box over the product grid.

use leptos::prelude::*;

use crate::catalog::{PRODUCTS, Product};
use crate::components::product_card::ProductCard;
use crate::util::search::{SearchInput, filter_by_title};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let search = RwSignal::new(SearchInput::default());

    let visible = move || -> Vec<Product> {
        let query = search.with(|s| s.applied.clone());
        filter_by_title(PRODUCTS, &query, |p| p.title).into_iter().copied().collect()
    };
    let summary = move || search.get().summary(visible().len()).message();

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let mut ticket = None;
        search.update(|s| ticket = s.on_input(&text));

        #[cfg(feature = "hydrate")]
        {
            if let Some(ticket) = ticket {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        crate::util::search::SEARCH_DEBOUNCE_MS,
                    ))
                    .await;
                    search.update(|s| {
                        s.settle(ticket);
                    });
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    view! {
        <div class="catalog-page">
            <div class="search-container">
                <input
                    id="searchInput"
                    class="search-input"
                    type="search"
                    placeholder="Поиск товаров"
                    prop:value=move || search.get().text
                    on:input=on_input
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            search.update(SearchInput::submit);
                        }
                    }
                />
            </div>

            {move || {
                summary()
                    .map(|(heading, detail)| {
                        view! {
                            <div class="search-message">
                                <h3>{heading}</h3>
                                <p>{detail}</p>
                            </div>
                        }
                    })
            }}

            <div class="wb-products-grid">
                <For
                    each=visible
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product/> }
                />
            </div>
        </div>
    }
}
