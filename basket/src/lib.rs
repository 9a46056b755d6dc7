//! Shopping cart core for the storefront.
//!
//! This crate owns the persisted cart record shared by every storefront page:
//! the JSON shape stored under [`store::CART_KEY`], the pure transition
//! function applied to it, the totals arithmetic, and the badge projection.
//! It has no browser dependencies; the `client` crate plugs
//! `window.localStorage` in through [`store::KeyValueStore`].
//!
//! CONCURRENCY
//! ===========
//! Every operation is a synchronous load, transform, save. Two tabs writing
//! the same key race and the last write wins; there is no version token and
//! browser storage offers no cross-tab lock to build one on.

pub mod action;
pub mod badge;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod totals;

pub use action::{CartAction, LineAction, apply};
pub use badge::{Badge, is_cart_key_change};
pub use error::{ParseActionError, StoreError};
pub use model::{Cart, CartLine, CartPhase, ProductCard};
pub use service::{Basket, CheckoutOutcome, ClearOutcome};
pub use store::{CART_KEY, CartStore, KeyValueStore, MemoryStore};
pub use totals::{DiscountRate, Totals, format_amount, format_line_price, parse_numeric};
