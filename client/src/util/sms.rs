//! Simulated SMS delivery and code verification.
//!
//! There is no SMS gateway. Both calls wait a fixed delay to look like a
//! network round trip, sending always succeeds, and the only valid code is
//! [`DEMO_CODE`]. Overlapping calls are not cancelled; each resolves on its
//! own timer.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "sms_test.rs"]
mod sms_test;

/// The code every "SMS" carries.
pub const DEMO_CODE: &str = "1234";

/// Simulated round-trip latency.
pub const SIMULATED_LATENCY_MS: u64 = 1_000;

async fn latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(SIMULATED_LATENCY_MS)).await;
}

/// "Send" a code to `phone_digits`. Always succeeds.
pub async fn send_code(phone_digits: &str) -> bool {
    latency().await;
    log::info!("SMS sent to {phone_digits}, code {DEMO_CODE}");
    true
}

/// "Verify" a code entered by the user.
pub async fn verify_code(code: &str) -> bool {
    latency().await;
    code_matches(code)
}

pub fn code_matches(code: &str) -> bool {
    code == DEMO_CODE
}
