//! # Order Module
//!
//! An order: a store-issued sequence number plus the pizzas the customer has
//! accumulated, with subtotal/tax/total derived on demand.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Lifecycle                                  │
//! │                                                                         │
//! │  Store::new_order()          current order           Store ledger       │
//! │  ────────────────            ─────────────           ────────────       │
//! │                                                                         │
//! │  number issued ────────────► add_pizza()                                │
//! │  (monotonic, never          remove_pizza(i)                             │
//! │   reused)                   clear()                                     │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                             Store::place() ────────► snapshot appended  │
//! │                                                      once, by number    │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                                     Store::cancel()     │
//! │                                                                         │
//! │  Totals are never cached: subtotal/tax/total recompute on every call.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::pizza::Pizza;
use crate::SALES_TAX;

// =============================================================================
// Order
// =============================================================================

/// A customer order, current or placed.
///
/// ## Design Notes
/// - Construction goes through `Store::new_order` so sequence numbers cannot
///   be forged or reused
/// - The order exclusively owns its pizzas; the ledger stores an owned
///   snapshot at placement
/// - `created_at`/`placed_at` are bookkeeping for receipts and the store
///   orders screen, not inputs to any computation
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    number: u32,
    pizzas: Vec<Pizza>,
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    placed_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Creates an empty order carrying a store-issued number.
    pub(crate) fn new(number: u32) -> Self {
        Order {
            number,
            pizzas: Vec::new(),
            created_at: Utc::now(),
            placed_at: None,
        }
    }

    /// The store-issued sequence number identifying this order.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The pizzas in the order, in the sequence they were added.
    #[inline]
    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    /// Number of pizzas currently in the order.
    #[inline]
    pub fn pizza_count(&self) -> usize {
        self.pizzas.len()
    }

    /// Checks if the order holds no pizzas.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    /// When the order was started.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the order entered the store ledger, if it has.
    #[inline]
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.placed_at
    }

    /// Adds a pizza to the order.
    ///
    /// ## Returns
    /// `true` once the pizza is in the order; adding cannot fail. The boolean
    /// reply is the reported-success contract the cart screen checks.
    pub fn add_pizza(&mut self, pizza: Pizza) -> bool {
        self.pizzas.push(pizza);
        true
    }

    /// Removes the pizza at `index`.
    ///
    /// ## Returns
    /// `false` if `index` is out of bounds, with the list untouched; `true`
    /// after removing. A bad index is a reported condition, never a panic:
    /// the cart screen surfaces its own message.
    pub fn remove_pizza(&mut self, index: usize) -> bool {
        if index < self.pizzas.len() {
            self.pizzas.remove(index);
            true
        } else {
            false
        }
    }

    /// Empties the pizza list in place.
    ///
    /// The sequence number and timestamps are untouched; the order stays
    /// current.
    pub fn clear(&mut self) {
        self.pizzas.clear();
    }

    /// Sum of the current pizzas' prices.
    ///
    /// Recomputed from the pizza list on every call, never cached; callers
    /// re-read after each mutation.
    pub fn subtotal(&self) -> Money {
        self.pizzas.iter().map(Pizza::price).sum()
    }

    /// Sales tax on the current subtotal at the store rate.
    pub fn tax(&self) -> Money {
        self.subtotal().calculate_tax(SALES_TAX)
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    /// Stamps the ledger snapshot at placement time.
    pub(crate) fn mark_placed(&mut self) {
        self.placed_at = Some(Utc::now());
    }
}

// =============================================================================
// Display
// =============================================================================

/// Receipt-style summary the store orders screen shows verbatim.
///
/// ## Format
/// ```text
/// Order #4
/// Deluxe (small) [Deep Dish] Toppings: sausage, pepperoni, green pepper, onion, mushroom $16.99
/// Subtotal: $16.99
/// Tax: $1.13
/// Total: $18.12
/// ```
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order #{}", self.number)?;
        for pizza in &self.pizzas {
            writeln!(f, "{}", pizza)?;
        }
        writeln!(f, "Subtotal: {}", self.subtotal())?;
        writeln!(f, "Tax: {}", self.tax())?;
        write!(f, "Total: {}", self.total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
