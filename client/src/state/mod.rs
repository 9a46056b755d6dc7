//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `auth`, `ui`) so individual components
//! can depend on small focused models provided as `RwSignal` contexts.

pub mod auth;
pub mod cart;
pub mod notice;
pub mod ui;
