use super::*;

fn priced(id: &str, price: &str, quantity: u32) -> CartLine {
    CartLine {
        id: id.to_owned(),
        title: id.to_owned(),
        price: price.to_owned(),
        image: String::new(),
        quantity,
    }
}

// =============================================================
// parse_numeric
// =============================================================

#[test]
fn parse_numeric_strips_decoration() {
    assert_eq!(parse_numeric("1 990 ₽"), 1990);
    assert_eq!(parse_numeric("2\u{a0}490 руб"), 2490);
    assert_eq!(parse_numeric("500"), 500);
}

#[test]
fn parse_numeric_without_digits_is_zero() {
    assert_eq!(parse_numeric(""), 0);
    assert_eq!(parse_numeric("бесплатно"), 0);
    assert_eq!(parse_numeric("₽"), 0);
}

#[test]
fn parse_numeric_ignores_non_ascii_digits() {
    // Arabic-indic digits are not price digits.
    assert_eq!(parse_numeric("١٢٣ 45"), 45);
}

#[test]
fn parse_numeric_saturates_instead_of_overflowing() {
    assert_eq!(parse_numeric("99999999999999999999999999"), u64::MAX);
}

// =============================================================
// DiscountRate
// =============================================================

#[test]
fn promo_rate_is_thirty_five_percent() {
    assert_eq!(DiscountRate::PROMO.basis_points(), 3_500);
    assert_eq!(DiscountRate::default(), DiscountRate::PROMO);
}

#[test]
fn discount_rounds_half_up() {
    // 10 * 0.35 = 3.5 -> 4
    assert_eq!(DiscountRate::PROMO.apply(10), 4);
    // 3 * 0.35 = 1.05 -> 1
    assert_eq!(DiscountRate::PROMO.apply(3), 1);
    assert_eq!(DiscountRate::PROMO.apply(0), 0);
}

#[test]
fn rate_is_clamped_to_whole_amount() {
    let rate = DiscountRate::from_basis_points(25_000);
    assert_eq!(rate.basis_points(), 10_000);
    assert_eq!(rate.apply(1234), 1234);
}

// =============================================================
// Totals
// =============================================================

#[test]
fn totals_for_reference_basket() {
    let cart = Cart { items: vec![priced("a", "1 990 ₽", 2), priced("b", "500 ₽", 1)], total_count: 3 };
    let totals = Totals::compute(&cart, DiscountRate::PROMO);
    assert_eq!(totals.items_total, 4480);
    assert_eq!(totals.discount, 1568);
    assert_eq!(totals.final_total, 2912);
}

#[test]
fn totals_of_empty_cart_are_zero() {
    assert_eq!(Totals::compute(&Cart::empty(), DiscountRate::PROMO), Totals::default());
}

#[test]
fn unparsable_price_counts_as_zero() {
    let cart = Cart { items: vec![priced("a", "по запросу", 3), priced("b", "100", 1)], total_count: 4 };
    let totals = Totals::compute(&cart, DiscountRate::NONE);
    assert_eq!(totals.items_total, 100);
    assert_eq!(totals.final_total, 100);
}

#[test]
fn line_subtotal_multiplies_quantity() {
    assert_eq!(line_subtotal(&priced("a", "1 990 ₽", 3)), 5970);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(0), "0 руб");
    assert_eq!(format_amount(500), "500 руб");
    assert_eq!(format_amount(4480), "4\u{a0}480 руб");
    assert_eq!(format_amount(1_234_567), "1\u{a0}234\u{a0}567 руб");
}

#[test]
fn format_line_price_reformats_decorated_text() {
    assert_eq!(format_line_price(&priced("a", "1 990 ₽", 1)), "1\u{a0}990 руб");
}
