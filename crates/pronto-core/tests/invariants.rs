//! Property-based invariant tests for the ordering domain.
//!
//! Uses proptest to generate topping streams, cart contents, and session
//! command streams, then asserts the structural rules the screens rely on:
//! the topping cap, base-plus-per-topping pricing, additive totals, and
//! strictly increasing order numbers.

use proptest::prelude::*;

use pronto_core::menu::{PizzaStyle, Region, Size, Topping};
use pronto_core::{Order, OrderManager, Store, SALES_TAX, TOPPING_PRICE};

const STYLES: [PizzaStyle; 4] = [
    PizzaStyle::BuildYourOwn,
    PizzaStyle::Deluxe,
    PizzaStyle::Meatzza,
    PizzaStyle::BbqChicken,
];

fn topping_from_index(index: usize) -> Topping {
    Topping::ALL[index % Topping::ALL.len()]
}

fn size_from_index(index: usize) -> Size {
    match index % 3 {
        0 => Size::Small,
        1 => Size::Medium,
        _ => Size::Large,
    }
}

fn byo_base_cents(size: Size) -> i64 {
    match size {
        Size::Small => 899,
        Size::Medium => 1099,
        Size::Large => 1299,
    }
}

/// Replays a command stream against a fresh session; returns the session and
/// the numbers handed out by place_order, in replay order.
fn replay_session(ops: &[u8]) -> (OrderManager, Vec<u32>) {
    let mut manager = OrderManager::new();
    let mut placed = Vec::new();
    for (step, &op) in ops.iter().enumerate() {
        match op % 3 {
            0 => {
                let mut pizza = Region::Chicago.create_build_your_own();
                pizza.set_size(Size::Medium);
                pizza.add_topping(topping_from_index(step));
                manager.add_pizza(pizza);
            }
            1 => placed.push(manager.place_order()),
            _ => {
                let ledger: Vec<u32> =
                    manager.store().orders().iter().map(Order::number).collect();
                if !ledger.is_empty() {
                    manager.cancel_order(ledger[step % ledger.len()]);
                }
            }
        }
    }
    (manager, placed)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// For any add sequence: the pizza never exceeds the cap, and what it
    /// keeps is exactly the first seven requests in arrival order.
    #[test]
    fn prop_topping_cap_keeps_first_seven(indices in proptest::collection::vec(0usize..14, 0..30)) {
        let mut pizza = Region::NewYork.create_build_your_own();
        for &index in &indices {
            pizza.add_topping(topping_from_index(index));
        }

        let expected: Vec<Topping> = indices
            .iter()
            .take(7)
            .map(|&index| topping_from_index(index))
            .collect();
        assert!(pizza.topping_count() <= 7, "cap exceeded: {}", pizza.topping_count());
        assert_eq!(pizza.toppings(), expected.as_slice());
    }

    /// Build-your-own pricing is exactly size base plus $1.69 per topping.
    #[test]
    fn prop_byo_price_is_base_plus_per_topping(
        size_index in 0usize..3,
        indices in proptest::collection::vec(0usize..14, 0..=7),
    ) {
        let size = size_from_index(size_index);
        let mut pizza = Region::Chicago.create_build_your_own();
        pizza.set_size(size);
        for &index in &indices {
            pizza.add_topping(topping_from_index(index));
        }

        let expected = byo_base_cents(size) + TOPPING_PRICE.cents() * indices.len() as i64;
        assert_eq!(pizza.price().cents(), expected);
    }

    /// Order totals are additive: subtotal is the sum of pizza prices and
    /// total is subtotal plus tax at the store rate.
    #[test]
    fn prop_order_totals_are_additive(
        specs in proptest::collection::vec(
            (0usize..4, 0usize..3, proptest::collection::vec(0usize..14, 0..7)),
            0..6,
        ),
    ) {
        let mut store = Store::new();
        let mut order = store.new_order();
        for (spec_index, (style_index, size_index, indices)) in specs.iter().enumerate() {
            let region = if spec_index % 2 == 0 { Region::Chicago } else { Region::NewYork };
            let mut pizza = region.create(STYLES[*style_index]);
            pizza.set_size(size_from_index(*size_index));
            for &index in indices {
                pizza.add_topping(topping_from_index(index));
            }
            order.add_pizza(pizza);
        }

        let summed: i64 = order.pizzas().iter().map(|p| p.price().cents()).sum();
        assert_eq!(order.subtotal().cents(), summed);
        assert_eq!(order.tax(), order.subtotal().calculate_tax(SALES_TAX));
        assert_eq!(order.total(), order.subtotal() + order.tax());
        assert!(order.total().cents() >= order.subtotal().cents());
    }

    /// Out-of-bounds removal reports failure and leaves the cart untouched.
    #[test]
    fn prop_remove_out_of_bounds_is_harmless(pizza_count in 0usize..5, excess in 0usize..10) {
        let mut store = Store::new();
        let mut order = store.new_order();
        for index in 0..pizza_count {
            let mut pizza = Region::NewYork.create_build_your_own();
            pizza.set_size(Size::Small);
            pizza.add_topping(topping_from_index(index));
            order.add_pizza(pizza);
        }
        let before = order.pizzas().to_vec();

        assert!(!order.remove_pizza(pizza_count + excess));
        assert_eq!(order.pizzas(), before.as_slice());
    }

    /// For any command stream: order numbers hand out in strictly increasing
    /// order, the current order always carries a higher number than every
    /// placed one, and the ledger only ever holds numbers that were placed.
    #[test]
    fn prop_order_numbers_strictly_increase(ops in proptest::collection::vec(0u8..3, 1..40)) {
        let (manager, placed) = replay_session(&ops);

        for pair in placed.windows(2) {
            assert!(pair[0] < pair[1], "numbers not increasing: {:?}", pair);
        }
        if let Some(&last) = placed.last() {
            assert!(manager.current_order_number() > last);
        }
        for order in manager.store().orders() {
            assert!(placed.contains(&order.number()), "ledger holds unplaced number");
        }
    }
}

/// Deterministic replay: the same command stream hands out the same numbers.
#[test]
fn deterministic_replay_same_ops_same_numbers() {
    let ops: Vec<u8> = (0..30).map(|step| (step % 5) as u8).collect();

    let (first_session, first_placed) = replay_session(&ops);
    let (second_session, second_placed) = replay_session(&ops);

    assert_eq!(first_placed, second_placed);
    assert_eq!(
        first_session.store().order_count(),
        second_session.store().order_count()
    );
    assert_eq!(
        first_session.current_order_number(),
        second_session.current_order_number()
    );
}
