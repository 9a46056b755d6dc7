use super::*;

fn card(id: &str) -> ProductCard {
    ProductCard {
        id: id.to_owned(),
        title: format!("Product {id}"),
        price: "1 000 ₽".to_owned(),
        image: format!("img/{id}.jpg"),
    }
}

fn add(cart: &Cart, id: &str) -> Cart {
    apply(cart, &CartAction::Add(card(id))).unwrap()
}

fn line_action(id: &str, action: LineAction) -> CartAction {
    CartAction::Line { id: id.to_owned(), action }
}

fn assert_count_invariant(cart: &Cart) {
    let sum: u32 = cart.items.iter().map(|l| l.quantity).sum();
    assert_eq!(cart.total_count, sum);
    assert!(cart.items.iter().all(|l| l.quantity >= 1));
}

// =============================================================
// LineAction tokens
// =============================================================

#[test]
fn line_action_parses_markup_tokens() {
    assert_eq!("increase".parse::<LineAction>(), Ok(LineAction::Increase));
    assert_eq!("decrease".parse::<LineAction>(), Ok(LineAction::Decrease));
    assert_eq!("remove".parse::<LineAction>(), Ok(LineAction::Remove));
}

#[test]
fn line_action_rejects_unknown_token() {
    assert_eq!("delete".parse::<LineAction>(), Err(ParseActionError("delete".to_owned())));
    assert!("Increase".parse::<LineAction>().is_err());
}

#[test]
fn line_action_display_matches_token() {
    for action in [LineAction::Increase, LineAction::Decrease, LineAction::Remove] {
        assert_eq!(action.to_string().parse::<LineAction>(), Ok(action));
    }
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_to_empty_appends_single_line() {
    let cart = add(&Cart::empty(), "1");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
    assert_eq!(cart.total_count, 1);
}

#[test]
fn add_existing_id_increments_without_duplicating() {
    let cart = add(&add(&Cart::empty(), "1"), "2");
    let again = add(&cart, "1");
    assert_eq!(again.items.len(), cart.items.len());
    assert_eq!(again.line("1").map(|l| l.quantity), Some(2));
    assert_eq!(again.line("2").map(|l| l.quantity), Some(1));
    assert_eq!(again.total_count, 3);
}

#[test]
fn add_preserves_insertion_order() {
    let cart = add(&add(&add(&Cart::empty(), "c"), "a"), "b");
    let ids: Vec<&str> = cart.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

// =============================================================
// Line actions
// =============================================================

#[test]
fn increase_bumps_quantity() {
    let cart = add(&Cart::empty(), "1");
    let next = apply(&cart, &line_action("1", LineAction::Increase)).unwrap();
    assert_eq!(next.line("1").map(|l| l.quantity), Some(2));
    assert_eq!(next.total_count, 2);
}

#[test]
fn decrease_above_one_decrements() {
    let cart = add(&add(&Cart::empty(), "1"), "1");
    let next = apply(&cart, &line_action("1", LineAction::Decrease)).unwrap();
    assert_eq!(next.line("1").map(|l| l.quantity), Some(1));
}

#[test]
fn decrease_at_one_removes_line() {
    let cart = add(&add(&Cart::empty(), "1"), "2");
    let next = apply(&cart, &line_action("1", LineAction::Decrease)).unwrap();
    assert!(next.line("1").is_none());
    assert_eq!(next.items.len(), 1);
    assert_eq!(next.total_count, 1);
}

#[test]
fn remove_deletes_regardless_of_quantity() {
    let cart = add(&add(&add(&Cart::empty(), "1"), "1"), "1");
    let next = apply(&cart, &line_action("1", LineAction::Remove)).unwrap();
    assert!(next.is_empty());
    assert_eq!(next.total_count, 0);
}

#[test]
fn unknown_id_is_a_noop() {
    let cart = add(&Cart::empty(), "1");
    for action in [LineAction::Increase, LineAction::Decrease, LineAction::Remove] {
        assert!(apply(&cart, &line_action("missing", action)).is_none());
    }
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_resets_non_empty_cart() {
    let cart = add(&add(&Cart::empty(), "1"), "2");
    assert_eq!(apply(&cart, &CartAction::Clear), Some(Cart::empty()));
}

#[test]
fn clear_on_empty_is_a_noop() {
    assert!(apply(&Cart::empty(), &CartAction::Clear).is_none());
}

// =============================================================
// Invariant across a sequence
// =============================================================

#[test]
fn total_count_matches_quantities_through_mixed_sequence() {
    let script = [
        CartAction::Add(card("a")),
        CartAction::Add(card("b")),
        CartAction::Add(card("a")),
        line_action("b", LineAction::Increase),
        line_action("a", LineAction::Decrease),
        line_action("zzz", LineAction::Remove),
        CartAction::Add(card("c")),
        line_action("b", LineAction::Remove),
        line_action("a", LineAction::Decrease),
        line_action("a", LineAction::Decrease),
        CartAction::Add(card("a")),
    ];
    let mut cart = Cart::empty();
    for action in &script {
        if let Some(next) = apply(&cart, action) {
            cart = next;
        }
        assert_count_invariant(&cart);
    }
    let ids: Vec<&str> = cart.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a"]);
    assert_eq!(cart.total_count, 2);
}
