//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Cart mutations always go through `basket::Basket`.

pub mod basket;
pub mod catalog;
pub mod login;
