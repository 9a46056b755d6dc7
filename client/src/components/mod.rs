//! Reusable storefront UI components.

pub mod basket_line;
pub mod header;
pub mod product_card;
pub mod totals_panel;
