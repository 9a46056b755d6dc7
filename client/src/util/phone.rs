//! Phone number and SMS code checks for the sign-in form.
//!
//! Input masking is left to the browser; these helpers only look at digits.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Digits in an SMS confirmation code.
pub const CODE_LEN: usize = 4;

/// Keep ASCII digits only.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Russian mobile number: 11 digits starting with country code 7.
pub fn is_valid_phone(text: &str) -> bool {
    let digits = digits_only(text);
    digits.len() == 11 && digits.starts_with('7')
}

/// A full confirmation code has exactly [`CODE_LEN`] digits.
pub fn is_complete_code(text: &str) -> bool {
    text.len() == CODE_LEN && text.chars().all(|c| c.is_ascii_digit())
}
