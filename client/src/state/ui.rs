//! Page chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiState {
    /// Header has the `scrolled` class.
    pub scrolled: bool,
}

impl UiState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > HEADER_SCROLL_THRESHOLD_PX;
    }

    pub fn header_class(self) -> &'static str {
        if self.scrolled { "site-header scrolled" } else { "site-header" }
    }
}
