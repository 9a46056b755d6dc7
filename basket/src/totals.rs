//! Price parsing, cart totals, and amount formatting.
//!
//! Every place that turns decorated price text into a number goes through
//! [`parse_numeric`]; the line formatter and the cart totals panel both read
//! from here so they can never disagree.

#[cfg(test)]
#[path = "totals_test.rs"]
mod totals_test;

use crate::model::{Cart, CartLine};

/// Non-breaking space used by ru-RU digit grouping.
const GROUP_SEPARATOR: char = '\u{a0}';
const CURRENCY_SUFFIX: &str = " руб";

/// Extract the integer value of decorated price text by dropping every
/// non-digit. Text without digits is 0; overflow saturates.
#[must_use]
pub fn parse_numeric(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Promotional discount rate expressed in basis points (1/100 of a percent).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscountRate {
    basis_points: u32,
}

impl DiscountRate {
    /// The storefront's standing 35% promotion.
    pub const PROMO: Self = Self { basis_points: 3_500 };
    pub const NONE: Self = Self { basis_points: 0 };

    /// Rates above 100% are clamped to 100%.
    #[must_use]
    pub const fn from_basis_points(basis_points: u32) -> Self {
        let basis_points = if basis_points > 10_000 { 10_000 } else { basis_points };
        Self { basis_points }
    }

    #[must_use]
    pub const fn basis_points(self) -> u32 {
        self.basis_points
    }

    /// Discount on `amount`, rounded half-up to a whole ruble.
    #[must_use]
    pub fn apply(self, amount: u64) -> u64 {
        let scaled = u128::from(amount) * u128::from(self.basis_points) + 5_000;
        u64::try_from(scaled / 10_000).unwrap_or(u64::MAX)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self::PROMO
    }
}

/// Derived totals for the basket summary panel. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub items_total: u64,
    pub discount: u64,
    pub final_total: u64,
}

impl Totals {
    #[must_use]
    pub fn compute(cart: &Cart, rate: DiscountRate) -> Self {
        let items_total = cart
            .items
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line_subtotal(line)));
        let discount = rate.apply(items_total);
        Self { items_total, discount, final_total: items_total.saturating_sub(discount) }
    }
}

/// Unit price times quantity for one line.
#[must_use]
pub fn line_subtotal(line: &CartLine) -> u64 {
    parse_numeric(&line.price).saturating_mul(u64::from(line.quantity))
}

/// Format a whole-ruble amount as `12 345 руб` with ru-RU grouping.
#[must_use]
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + CURRENCY_SUFFIX.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out.push_str(CURRENCY_SUFFIX);
    out
}

/// Unit price of a line, re-rendered through [`parse_numeric`].
#[must_use]
pub fn format_line_price(line: &CartLine) -> String {
    format_amount(parse_numeric(&line.price))
}
