//! Sign-in flow state: phone entry, code entry, signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the login page and the header's profile link. The resend countdown
//! is keyed by a sequence number so a countdown started by an earlier send
//! stops ticking as soon as a newer one starts or the user goes back.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::notice::Notice;
use crate::util::session::{AuthSession, forget_session};
use crate::util::storage::BrowserStorage;

/// Seconds before "send again" unlocks.
pub const RESEND_COOLDOWN_SECS: u32 = 59;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStep {
    #[default]
    Phone,
    Code,
    Done,
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub step: AuthStep,
    /// Phone as typed, echoed on the code form.
    pub phone: String,
    /// A simulated request is in flight.
    pub busy: bool,
    pub notice: Option<Notice>,
    /// Seconds left before resend is allowed.
    pub resend_in: u32,
    countdown_seq: u64,
    pub session: Option<AuthSession>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn begin_request(&mut self, message: &str) {
        self.busy = true;
        self.notice = Some(Notice::info(message));
    }

    pub fn fail(&mut self, message: &str) {
        self.busy = false;
        self.notice = Some(Notice::error(message));
    }

    /// The code went out; switch to the code form and start the countdown.
    pub fn code_sent(&mut self, phone: String) -> u64 {
        self.step = AuthStep::Code;
        self.phone = phone;
        self.busy = false;
        self.notice = None;
        self.start_countdown()
    }

    /// Restart the resend countdown. Returns the ticket the ticker must hold.
    pub fn start_countdown(&mut self) -> u64 {
        self.countdown_seq += 1;
        self.resend_in = RESEND_COOLDOWN_SECS;
        self.countdown_seq
    }

    /// One second elapsed for countdown `ticket`. Returns whether the ticker
    /// should keep running.
    pub fn tick(&mut self, ticket: u64) -> bool {
        if ticket != self.countdown_seq || self.resend_in == 0 {
            return false;
        }
        self.resend_in -= 1;
        self.resend_in > 0
    }

    pub fn can_resend(&self) -> bool {
        self.step == AuthStep::Code && self.resend_in == 0 && !self.busy
    }

    /// "Change number" / back button.
    pub fn back_to_phone(&mut self) {
        self.step = AuthStep::Phone;
        self.stop_countdown();
        self.busy = false;
        self.notice = None;
    }

    pub fn signed_in(&mut self, session: AuthSession) {
        self.step = AuthStep::Done;
        self.session = Some(session);
        self.stop_countdown();
        self.busy = false;
        self.notice = Some(Notice::success("Успешный вход!"));
    }

    /// Logout: back to a blank phone form.
    pub fn signed_out(&mut self) {
        self.session = None;
        self.step = AuthStep::Phone;
        self.phone.clear();
        self.stop_countdown();
        self.busy = false;
        self.notice = Some(Notice::success("Вы вышли из системы"));
    }

    pub fn rejected_code(&mut self) {
        self.fail("Неверный код. Используйте код 1234");
    }

    fn stop_countdown(&mut self) {
        self.countdown_seq += 1;
        self.resend_in = 0;
    }
}

/// Logout from the header or the login page.
pub fn sign_out(auth: RwSignal<AuthState>) {
    if let Err(e) = forget_session(&BrowserStorage) {
        log::warn!("sign-in marker not removed: {e}");
    }
    auth.update(AuthState::signed_out);
}
