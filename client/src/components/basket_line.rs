//! One row of the basket: image, title, unit price, quantity controls.

use basket::{CartLine, LineAction, format_line_price};
use leptos::prelude::*;

/// A basket row. Buttons report `(product id, action)` to the page.
#[component]
pub fn BasketLine(line: CartLine, on_action: Callback<(String, LineAction)>) -> impl IntoView {
    let price = format_line_price(&line);
    let control = move |action: LineAction, id: String| {
        move |_: leptos::ev::MouseEvent| on_action.run((id.clone(), action))
    };

    view! {
        <div class="basket-item" data-product-id=line.id.clone()>
            <div class="basket-item-image">
                <img src=line.image.clone() alt=line.title.clone()/>
            </div>
            <div class="basket-item-info">
                <h3 class="basket-item-title">{line.title.clone()}</h3>
                <div class="basket-item-price">{price}</div>
            </div>
            <div class="basket-item-controls">
                <div class="quantity-controls">
                    <button
                        class="quantity-btn minus"
                        data-action=LineAction::Decrease.as_str()
                        on:click=control(LineAction::Decrease, line.id.clone())
                    >
                        "-"
                    </button>
                    <span class="quantity-display">{line.quantity}</span>
                    <button
                        class="quantity-btn plus"
                        data-action=LineAction::Increase.as_str()
                        on:click=control(LineAction::Increase, line.id.clone())
                    >
                        "+"
                    </button>
                </div>
                <button
                    class="remove-btn"
                    data-action=LineAction::Remove.as_str()
                    on:click=control(LineAction::Remove, line.id.clone())
                >
                    "Удалить"
                </button>
            </div>
        </div>
    }
}
