//! End-to-end ordering flows through the session facade.
//!
//! Drives `OrderManager` and `Store` the way the ordering screens do: build
//! regional pizzas, watch cart totals, place orders, then work the store
//! ledger. Receipt strings are asserted exactly because the cart and store
//! screens render them verbatim.

use pretty_assertions::assert_eq;

use pronto_core::menu::{Crust, Region, Size, Topping};
use pronto_core::{Order, OrderManager, Pizza, SharedOrderManager, Store};

/// A small build-your-own with the given toppings, the cheapest real pizza.
fn small_byo(region: Region, toppings: &[Topping]) -> Pizza {
    let mut pizza = region.create_build_your_own();
    pizza.set_size(Size::Small);
    for &topping in toppings {
        pizza.add_topping(topping);
    }
    pizza
}

// =============================================================================
// Cart Totals
// =============================================================================

#[test]
fn test_cart_totals_for_two_custom_pizzas() {
    let mut manager = OrderManager::new();
    manager.add_pizza(small_byo(
        Region::NewYork,
        &[Topping::Sausage, Topping::Mushroom],
    ));
    manager.add_pizza(small_byo(
        Region::NewYork,
        &[Topping::Ham, Topping::Olives],
    ));

    // Each pizza: $8.99 base + 2 x $1.69 = $12.37
    assert_eq!(manager.subtotal().to_string(), "$24.74");
    assert_eq!(manager.tax().to_string(), "$1.64");
    assert_eq!(manager.total().to_string(), "$26.38");
}

// =============================================================================
// Placement and Numbering
// =============================================================================

#[test]
fn test_place_order_starts_a_fresh_order() {
    let mut manager = OrderManager::new();
    manager.add_pizza(small_byo(Region::Chicago, &[Topping::Pepperoni]));

    let placed = manager.place_order();

    assert_eq!(placed, 1);
    assert_eq!(manager.store().order_count(), 1);
    assert_eq!(manager.current_order_number(), 2);
    assert_eq!(manager.pizza_count(), 0);
    assert_eq!(manager.subtotal().cents(), 0);
}

#[test]
fn test_placing_empty_orders_still_advances_numbers() {
    let mut manager = OrderManager::new();

    let first = manager.place_order();
    let second = manager.place_order();

    assert_eq!((first, second), (1, 2));
    assert_eq!(manager.current_order_number(), 3);

    let numbers: Vec<u32> = manager.store().orders().iter().map(Order::number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn test_store_ignores_duplicate_placement() {
    let mut store = Store::new();
    let mut order = store.new_order();
    order.add_pizza(small_byo(Region::NewYork, &[]));

    assert!(store.place(&order));
    assert!(!store.place(&order));
    assert_eq!(store.order_count(), 1);
}

#[test]
fn test_cancel_removes_only_that_order() {
    let mut manager = OrderManager::new();
    manager.add_pizza(small_byo(Region::Chicago, &[]));
    let first = manager.place_order();
    manager.add_pizza(small_byo(Region::NewYork, &[]));
    let second = manager.place_order();

    assert!(manager.cancel_order(first));
    assert!(!manager.cancel_order(first));

    let numbers: Vec<u32> = manager.store().orders().iter().map(Order::number).collect();
    assert_eq!(numbers, vec![second]);

    // Numbering never rewinds after a cancel
    assert_eq!(manager.place_order(), 3);
}

// =============================================================================
// Regional Menu
// =============================================================================

#[test]
fn test_regional_deluxe_round_trip() {
    let chicago = Region::Chicago.create_deluxe();
    assert_eq!(chicago.crust(), Some(Crust::ChicagoDeluxe));
    assert_eq!(
        chicago.toppings(),
        &[
            Topping::Sausage,
            Topping::Pepperoni,
            Topping::GreenPepper,
            Topping::Onion,
            Topping::Mushroom,
        ]
    );

    let new_york = Region::NewYork.create_deluxe();
    assert_eq!(new_york.crust(), Some(Crust::NyDeluxe));
    assert_eq!(new_york.toppings(), chicago.toppings());
}

// =============================================================================
// Receipt Rendering
// =============================================================================

#[test]
fn test_placed_order_prints_as_receipt() {
    let mut manager = OrderManager::new();
    let mut pizza = Region::Chicago.create_deluxe();
    pizza.set_size(Size::Small);
    manager.add_pizza(pizza);
    let number = manager.place_order();

    let receipt = manager.store().order(number).map(Order::to_string);
    assert_eq!(
        receipt.as_deref(),
        Some(
            "Order #1\n\
             Deluxe (small) [Deep Dish] Toppings: sausage, pepperoni, green pepper, onion, mushroom $16.99\n\
             Subtotal: $16.99\n\
             Tax: $1.13\n\
             Total: $18.12"
        )
    );
}

// =============================================================================
// Shared Session
// =============================================================================

#[test]
fn test_shared_session_serves_multiple_screens() {
    let session = SharedOrderManager::new();

    // A second screen adds pizzas from its own thread
    let build_screen = session.clone();
    let worker = std::thread::spawn(move || {
        for _ in 0..3 {
            build_screen.with_mut(|m| {
                m.add_pizza(small_byo(Region::Chicago, &[Topping::Beef]));
            });
        }
    });
    session.with_mut(|m| {
        m.add_pizza(small_byo(Region::NewYork, &[]));
    });
    worker.join().unwrap();

    assert_eq!(session.with(|m| m.pizza_count()), 4);

    let placed = session.with_mut(|m| m.place_order());
    assert_eq!(placed, 1);
    assert_eq!(session.with(|m| m.store().order_count()), 1);
    assert_eq!(session.with(|m| m.current_order_number()), 2);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_placed_order_survives_json_round_trip() {
    let mut manager = OrderManager::new();
    manager.add_pizza(small_byo(Region::NewYork, &[Topping::Jalapenos]));
    let number = manager.place_order();

    let placed = manager.store().order(number).unwrap();
    let json = serde_json::to_string(placed).unwrap();
    let back: Order = serde_json::from_str(&json).unwrap();

    assert_eq!(back.number(), number);
    assert_eq!(back.pizza_count(), 1);
    assert_eq!(back.subtotal(), placed.subtotal());
    assert!(back.placed_at().is_some());
}
