//! # Store Module
//!
//! The store aggregate: the order-number fountain and the ledger of placed
//! orders, owned together so tests and shells get a fresh store per use.
//!
//! ## Store State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Store                                       │
//! │                                                                         │
//! │  next_order_number: 5        orders (placed ledger)                     │
//! │  ──────────────────          ──────────────────────                     │
//! │  issued to every             ┌───────────┬───────────┬───────────┐      │
//! │  new_order() call,           │ Order #1  │ Order #2  │ Order #4  │      │
//! │  then incremented.           └───────────┴───────────┴───────────┘      │
//! │  Never reused, never              ▲                        ▲            │
//! │  decremented - not even      place() appends a        cancel(3) removed │
//! │  after cancellation.         snapshot once per        #3; its number    │
//! │                              order number             stays burned      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::order::Order;

// =============================================================================
// Store
// =============================================================================

/// Order numbering and the placed-order ledger for one store.
///
/// An order an instant before placement is never visible here; `place`
/// appends an owned snapshot, so later edits to the customer's current
/// order leave the ledger untouched.
#[derive(Debug)]
pub struct Store {
    next_order_number: u32,
    orders: Vec<Order>,
}

impl Store {
    /// Creates a store with an empty ledger; numbering starts at 1.
    pub fn new() -> Self {
        Store {
            next_order_number: 1,
            orders: Vec::new(),
        }
    }

    /// Starts a new empty order carrying the next sequence number.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::store::Store;
    ///
    /// let mut store = Store::new();
    /// assert_eq!(store.new_order().number(), 1);
    /// assert_eq!(store.new_order().number(), 2);
    /// ```
    pub fn new_order(&mut self) -> Order {
        let number = self.next_order_number;
        self.next_order_number += 1;
        Order::new(number)
    }

    /// Places an order into the ledger, once.
    ///
    /// ## Behavior
    /// Identity is the order number. If the ledger already holds that
    /// number this is a no-op returning `false`; otherwise an owned,
    /// placement-stamped snapshot is appended and the call returns `true`.
    /// Placing the same order twice therefore yields exactly one entry.
    pub fn place(&mut self, order: &Order) -> bool {
        if self.orders.iter().any(|o| o.number() == order.number()) {
            return false;
        }
        let mut snapshot = order.clone();
        snapshot.mark_placed();
        self.orders.push(snapshot);
        true
    }

    /// Cancels a placed order, removing it from the ledger by number.
    ///
    /// ## Returns
    /// `false` when no ledger entry carries that number. The sequence
    /// counter is unaffected either way; cancelled numbers are not reused.
    pub fn cancel(&mut self, number: u32) -> bool {
        match self.orders.iter().position(|o| o.number() == number) {
            Some(index) => {
                self.orders.remove(index);
                true
            }
            None => false,
        }
    }

    /// Looks up a placed order by number.
    pub fn order(&self, number: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.number() == number)
    }

    /// The placed orders, oldest first.
    #[inline]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Mutable access to the ledger for the store orders screen.
    ///
    /// The screen may drop entries directly; [`cancel`](Store::cancel) is
    /// the front door for removal by number.
    #[inline]
    pub fn orders_mut(&mut self) -> &mut Vec<Order> {
        &mut self.orders
    }

    /// Number of placed orders in the ledger.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Checks if no orders have been placed (or all were cancelled).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// The number the next new order will carry (for display).
    #[inline]
    pub const fn next_order_number(&self) -> u32 {
        self.next_order_number
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
