//! Utility helpers shared across storefront pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! clock) and pure input rules from page and component logic so the rules can
//! be tested natively.

pub mod add_feedback;
pub mod clock;
pub mod phone;
pub mod search;
pub mod session;
pub mod sms;
pub mod storage;
