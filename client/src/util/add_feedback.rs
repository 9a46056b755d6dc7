//! Add-to-cart button latch.
//!
//! One click adds one unit. The button then shows its "added" label and
//! ignores further clicks until the feedback window closes, so a double click
//! cannot bump the quantity twice.

#[cfg(test)]
#[path = "add_feedback_test.rs"]
mod add_feedback_test;

/// How long the "added" label stays up and the button stays locked.
pub const FEEDBACK_WINDOW_MS: u64 = 2_000;

/// Lock state for one add-to-cart button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddLatch {
    held_until_ms: Option<u64>,
}

impl AddLatch {
    /// Take the latch at `now_ms`. Returns `false` while a previous click's
    /// window is still open.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        if self.held_until_ms.is_some_and(|until| now_ms < until) {
            return false;
        }
        self.held_until_ms = Some(now_ms.saturating_add(FEEDBACK_WINDOW_MS));
        true
    }

    /// Called when the feedback timer fires.
    pub fn release(&mut self) {
        self.held_until_ms = None;
    }

    pub fn is_held(&self) -> bool {
        self.held_until_ms.is_some()
    }

    pub fn label(&self) -> &'static str {
        if self.is_held() { "✓ Добавлено" } else { "В корзину" }
    }
}
