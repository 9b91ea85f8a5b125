//! # Order Manager
//!
//! The ordering session: one store plus exactly one current order, with the
//! cart operations the ordering screens call. Explicitly constructed and
//! caller-owned; shells that need one shared session across screens wrap it
//! in [`SharedOrderManager`].
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Manager Operations                             │
//! │                                                                         │
//! │  Screen Action            Manager Call            State Change          │
//! │  ─────────────            ────────────            ────────────          │
//! │                                                                         │
//! │  Add to Order ──────────► add_pizza() ──────────► current.push(pizza)  │
//! │                                                                         │
//! │  Remove Selected ───────► remove_pizza(i) ──────► current.remove(i)    │
//! │                                                                         │
//! │  Clear Order ───────────► clear_current() ──────► current.clear()      │
//! │                                                                         │
//! │  Place Order ───────────► place_order() ────────► ledger += snapshot,  │
//! │                                                    fresh current order  │
//! │                                                                         │
//! │  Cancel (store screen) ─► cancel_order(n) ──────► ledger -= order #n   │
//! │                                                                         │
//! │  There is always exactly one current order: it is created in new()     │
//! │  and replaced atomically inside place_order().                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::order::Order;
use crate::pizza::Pizza;
use crate::store::Store;
use crate::Money;

// =============================================================================
// Order Manager
// =============================================================================

/// One customer's ordering session against one store.
///
/// Owns the [`Store`] and the current [`Order`] and delegates every cart
/// operation to the current order. No global state: a fresh manager per
/// test, or one shared instance per running app via [`SharedOrderManager`].
#[derive(Debug)]
pub struct OrderManager {
    store: Store,
    current: Order,
}

impl OrderManager {
    /// Creates a session with a fresh store; the current order is #1.
    pub fn new() -> Self {
        let mut store = Store::new();
        let current = store.new_order();
        OrderManager { store, current }
    }

    /// Adds a pizza to the current order.
    pub fn add_pizza(&mut self, pizza: Pizza) -> bool {
        debug!(
            order_number = self.current.number(),
            style = %pizza.style(),
            "adding pizza to current order"
        );
        self.current.add_pizza(pizza)
    }

    /// Removes the pizza at `index` from the current order.
    ///
    /// ## Returns
    /// `false` for an out-of-bounds index, with the order untouched.
    pub fn remove_pizza(&mut self, index: usize) -> bool {
        debug!(
            order_number = self.current.number(),
            index, "removing pizza from current order"
        );
        self.current.remove_pizza(index)
    }

    /// The pizzas in the current order.
    pub fn pizzas(&self) -> &[Pizza] {
        self.current.pizzas()
    }

    /// Number of pizzas in the current order.
    pub fn pizza_count(&self) -> usize {
        self.current.pizza_count()
    }

    /// Subtotal of the current order.
    pub fn subtotal(&self) -> Money {
        self.current.subtotal()
    }

    /// Sales tax of the current order.
    pub fn tax(&self) -> Money {
        self.current.tax()
    }

    /// Total (subtotal plus tax) of the current order.
    pub fn total(&self) -> Money {
        self.current.total()
    }

    /// Empties the current order without placing it.
    pub fn clear_current(&mut self) {
        debug!(
            order_number = self.current.number(),
            "clearing current order"
        );
        self.current.clear();
    }

    /// The current order.
    pub fn current(&self) -> &Order {
        &self.current
    }

    /// The current order's number (shown on the cart screen).
    pub fn current_order_number(&self) -> u32 {
        self.current.number()
    }

    /// Places the current order and starts the next one.
    ///
    /// ## Behavior
    /// The current order goes into the store ledger (the screens gate empty
    /// orders with `validate_order_not_empty`; the core does not), and the
    /// session rolls over to a fresh order carrying the next number. Two
    /// back-to-back calls place two distinct orders, and numbers strictly
    /// increase across every roll-over.
    ///
    /// ## Returns
    /// The placed order's number.
    pub fn place_order(&mut self) -> u32 {
        let number = self.current.number();
        let total = self.current.total();
        self.store.place(&self.current);
        self.current = self.store.new_order();
        info!(
            order_number = number,
            total = %total,
            next_order = self.current.number(),
            "order placed"
        );
        number
    }

    /// Cancels a placed order by number.
    ///
    /// ## Returns
    /// `false` when the ledger holds no such order.
    pub fn cancel_order(&mut self, number: u32) -> bool {
        let cancelled = self.store.cancel(number);
        if cancelled {
            info!(order_number = number, "order cancelled");
        } else {
            debug!(order_number = number, "cancel requested for unknown order");
        }
        cancelled
    }

    /// The store behind this session (ledger reads).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable store access for the store orders screen.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Shared Session Handle
// =============================================================================

/// A cloneable handle to one shared [`OrderManager`].
///
/// ## Thread Safety
/// Uses `Arc<Mutex<OrderManager>>` because:
/// - `Arc`: every screen holds a clone of the same session
/// - `Mutex`: one mutation at a time; reads take the lock briefly too
///
/// The app constructs this once at startup and hands clones to its screens,
/// so exactly one session ever exists and no first-use race is possible.
///
/// ## Usage
/// ```rust
/// use pronto_core::manager::SharedOrderManager;
/// use pronto_core::menu::{Region, Size};
///
/// let session = SharedOrderManager::new();
/// let handle = session.clone();
///
/// handle.with_mut(|m| {
///     let mut pizza = Region::NewYork.create_deluxe();
///     pizza.set_size(Size::Medium);
///     m.add_pizza(pizza)
/// });
/// assert_eq!(session.with(|m| m.pizza_count()), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SharedOrderManager {
    manager: Arc<Mutex<OrderManager>>,
}

impl SharedOrderManager {
    /// Creates a fresh shared session.
    pub fn new() -> Self {
        SharedOrderManager {
            manager: Arc::new(Mutex::new(OrderManager::new())),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderManager) -> R,
    {
        let manager = self.manager.lock().expect("order manager mutex poisoned");
        f(&manager)
    }

    /// Executes a function with write access to the session.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderManager) -> R,
    {
        let mut manager = self.manager.lock().expect("order manager mutex poisoned");
        f(&mut manager)
    }
}

impl Default for SharedOrderManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Region, Size, Topping};

    fn sized_byo(region: Region, toppings: &[Topping]) -> Pizza {
        let mut pizza = region.create_build_your_own();
        pizza.set_size(Size::Small);
        for &topping in toppings {
            pizza.add_topping(topping);
        }
        pizza
    }

    #[test]
    fn test_session_starts_at_order_one() {
        let manager = OrderManager::new();
        assert_eq!(manager.current_order_number(), 1);
        assert_eq!(manager.pizza_count(), 0);
        assert!(manager.store().is_empty());
    }

    #[test]
    fn test_cart_delegation() {
        let mut manager = OrderManager::new();
        assert!(manager.add_pizza(sized_byo(
            Region::Chicago,
            &[Topping::Sausage, Topping::Mushroom]
        )));
        assert!(manager.add_pizza(sized_byo(
            Region::Chicago,
            &[Topping::Ham, Topping::Onion]
        )));

        assert_eq!(manager.pizza_count(), 2);
        assert_eq!(manager.subtotal().cents(), 2474);
        assert_eq!(manager.tax().cents(), 164);
        assert_eq!(manager.total().cents(), 2638);

        assert!(manager.remove_pizza(0));
        assert!(!manager.remove_pizza(5));
        assert_eq!(manager.pizza_count(), 1);
    }

    #[test]
    fn test_place_order_rolls_to_fresh_order() {
        let mut manager = OrderManager::new();
        manager.add_pizza(sized_byo(Region::NewYork, &[]));

        let placed = manager.place_order();
        assert_eq!(placed, 1);
        assert_eq!(manager.store().order_count(), 1);
        assert_eq!(manager.current_order_number(), 2);
        assert_eq!(manager.pizza_count(), 0);
    }

    #[test]
    fn test_back_to_back_placements_keep_numbers_increasing() {
        let mut manager = OrderManager::new();

        let first = manager.place_order();
        let second = manager.place_order();

        assert_eq!((first, second), (1, 2));
        assert_eq!(manager.store().order_count(), 2);
        assert_eq!(manager.current_order_number(), 3);
    }

    #[test]
    fn test_clear_current_keeps_the_same_order() {
        let mut manager = OrderManager::new();
        manager.add_pizza(sized_byo(Region::Chicago, &[]));
        manager.clear_current();
        assert_eq!(manager.pizza_count(), 0);
        assert_eq!(manager.current_order_number(), 1);
        assert!(manager.store().is_empty());
    }

    #[test]
    fn test_cancel_order_through_session() {
        let mut manager = OrderManager::new();
        manager.add_pizza(sized_byo(Region::Chicago, &[]));
        let number = manager.place_order();

        assert!(manager.cancel_order(number));
        assert!(!manager.cancel_order(number));
        assert!(manager.store().is_empty());
        assert_eq!(manager.current_order_number(), 2);
    }

    #[test]
    fn test_shared_handles_observe_one_session() {
        let session = SharedOrderManager::new();
        let handle = session.clone();

        handle.with_mut(|m| m.add_pizza(sized_byo(Region::NewYork, &[Topping::Olives])));

        assert_eq!(session.with(|m| m.pizza_count()), 1);
        assert_eq!(session.with(|m| m.current_order_number()), 1);
    }

    #[test]
    fn test_shared_session_across_threads() {
        let session = SharedOrderManager::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let session = session.clone();
                std::thread::spawn(move || {
                    session.with_mut(|m| {
                        m.add_pizza(sized_byo(Region::Chicago, &[]));
                    });
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(session.with(|m| m.pizza_count()), 4);
    }
}
