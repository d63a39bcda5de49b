//! Integration tests for the rush order flow.
//!
//! These tests drive `RushOrderController` the way an order placement flow
//! does: cart first, then delivery date and address, then contact info and
//! the shipping fee.

#![allow(clippy::unwrap_used)]

use aims_core::{Cart, CartError, MediaId, Order};
use aims_integration_tests::{
    available_cart, cart_item, contact_info, today, tomorrow, yesterday,
};
use aims_rush_order::{
    FixedFraction, InvalidDeliveryInfo, RushOrderController, RushOrderError, SeededFraction,
};

// =============================================================================
// Placement
// =============================================================================

#[test]
fn test_place_rush_order_tomorrow_in_hanoi() {
    let controller = RushOrderController::default();
    let result =
        controller.place_rush_order(&available_cart(), tomorrow(), today(), "12 Trang Tien, Hanoi");
    assert!(result.is_ok());
}

#[test]
fn test_place_rush_order_yesterday_fails_before_address() {
    let controller = RushOrderController::default();
    // Address is also invalid; the date error must win.
    let err = controller
        .place_rush_order(&available_cart(), yesterday(), today(), "Da Nang")
        .unwrap_err();
    assert_eq!(
        err,
        RushOrderError::InvalidDeliveryInfo(InvalidDeliveryInfo::InvalidDate)
    );
}

#[test]
fn test_place_rush_order_short_stock_fails_first() {
    let controller = RushOrderController::default();
    let cart = Cart::new(vec![cart_item(1, 100, 1, 1), cart_item(7, 100, 4, 3)]);
    let err = controller
        .place_rush_order(&cart, yesterday(), today(), "")
        .unwrap_err();
    assert_eq!(
        err,
        RushOrderError::Availability(CartError::MediaNotAvailable {
            media_ids: vec![MediaId::new(7)],
        })
    );
}

#[test]
fn test_place_rush_order_unsupported_address() {
    let controller = RushOrderController::default();
    let err = controller
        .place_rush_order(&available_cart(), tomorrow(), today(), "Hai Chau, Da Nang")
        .unwrap_err();
    assert_eq!(err.to_string(), "Address does not support Rush Order");
}

#[test]
fn test_address_suffix_quirk_is_preserved() {
    let controller = RushOrderController::default();
    assert!(controller.validate_address("123 Le Loi, Hanoi"));
    assert!(controller.validate_address("xyzHN"));
    assert!(!controller.validate_address(""));
    assert!(!controller.validate_address("Da Nang"));
}

// =============================================================================
// Contact Info
// =============================================================================

#[test]
fn test_contact_info_examples() {
    let controller = RushOrderController::default();
    assert!(controller.validate_phone_number("0123456789"));
    assert!(!controller.validate_phone_number("123456789"));
    assert!(!controller.validate_phone_number("1123456789"));
    assert!(!controller.validate_phone_number("01234abcde"));

    assert!(controller.validate_name("Nguyen Van A"));
    assert!(!controller.validate_name(""));
    assert!(!controller.validate_name("   "));
    assert!(!controller.validate_name("John123"));
    assert!(!controller.validate_name("Nguyễn"));
}

#[test]
fn test_validate_rush_delivery_info() {
    let controller = RushOrderController::default();
    assert!(
        controller
            .validate_rush_delivery_info(&contact_info("0123456789", "A B"))
            .is_ok()
    );
    let err = controller
        .validate_rush_delivery_info(&contact_info("bad", "A"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Some info is invalid");
}

// =============================================================================
// Shipping Fee
// =============================================================================

#[test]
fn test_shipping_fee_stays_below_ten_percent() {
    let controller = RushOrderController::default();
    let order = Order::from_cart(&available_cart());
    assert_eq!(order.amount(), 1000);
    for _ in 0..500 {
        let fee = controller.calculate_shipping_fee(&order);
        assert!((0..100).contains(&fee), "fee {fee} out of range");
    }
}

#[test]
fn test_shipping_fee_seeded_is_reproducible() {
    let order = Order::from_cart(&available_cart());
    let a = RushOrderController::default().with_fee_source(SeededFraction::new(2024));
    let b = RushOrderController::default().with_fee_source(SeededFraction::new(2024));
    let fees_a: Vec<i64> = (0..10).map(|_| a.calculate_shipping_fee(&order)).collect();
    let fees_b: Vec<i64> = (0..10).map(|_| b.calculate_shipping_fee(&order)).collect();
    assert_eq!(fees_a, fees_b);
}

// =============================================================================
// Full Quote
// =============================================================================

#[test]
fn test_rush_order_quote_end_to_end() {
    let controller = RushOrderController::default().with_fee_source(FixedFraction::new(0.5));
    let quote = controller
        .rush_order_quote(
            &available_cart(),
            tomorrow(),
            today(),
            "Quận 1, Hồ Chí Minh",
            &contact_info("0912345678", "Tran Thi B"),
        )
        .unwrap();
    assert_eq!(quote.order.lines.len(), 2);
    assert_eq!(quote.order.amount(), 1000);
    assert_eq!(quote.shipping_fee, 50);
    assert_eq!(quote.total(), 1050);
}

#[test]
fn test_rush_order_quote_from_yaml_cart() {
    let yaml = r"
items:
  - media_id: 11
    title: Rumours
    quantity: 2
    unit_price: 150000
    available: 2
";
    let cart: Cart = serde_yaml::from_str(yaml).unwrap();
    let controller = RushOrderController::default().with_fee_source(FixedFraction::new(0.0));
    let quote = controller
        .rush_order_quote(
            &cart,
            tomorrow(),
            today(),
            "Ba Dinh, HN",
            &contact_info("0123456789", "Le Van C"),
        )
        .unwrap();
    assert_eq!(quote.order.amount(), 300_000);
    assert_eq!(quote.shipping_fee, 0);
}

#[test]
fn test_rush_order_quote_from_json_cart_out_of_stock() {
    let json = r#"{
        "id": 4,
        "items": [
            {"media_id": 3, "title": "Blue", "quantity": 5, "unit_price": 10, "available": 1}
        ]
    }"#;
    let cart: Cart = serde_json::from_str(json).unwrap();
    let controller = RushOrderController::default();
    let err = controller
        .rush_order_quote(
            &cart,
            tomorrow(),
            today(),
            "Hanoi",
            &contact_info("0123456789", "Le Van C"),
        )
        .unwrap_err();
    assert!(matches!(err, RushOrderError::Availability(_)));
    assert_eq!(err.to_string(), "one or more items insufficient stock: 3");
}
