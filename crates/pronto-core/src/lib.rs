//! # pronto-core: Pure Ordering Domain for Pronto Pizzeria
//!
//! This crate is the **heart** of the Pronto Pizzeria ordering app. It holds
//! the whole menu-to-ledger domain as pure in-memory logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pronto Pizzeria Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Ordering Screens                           │   │
//! │  │   Region UI ──► Build UI ──► Cart UI ──► Store Orders UI       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ SharedOrderManager handle              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pronto-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   money   │  │   pizza   │  │  factory  │  │   │
//! │  │   │  Topping  │  │   Money   │  │   Pizza   │  │  Region   │  │   │
//! │  │   │   Crust   │  │  TaxRate  │  │  pricing  │  │  create   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   order   │  │   store   │  │  manager  │  │ validation│  │   │
//! │  │   │   Order   │  │  ledger   │  │  session  │  │   rules   │  │   │
//! │  │   │  totals   │  │  numbers  │  │  handles  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Menu vocabulary (sizes, regions, styles, toppings, crusts)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pizza`] - Pizza configuration and pricing
//! - [`factory`] - Regional pizza construction
//! - [`order`] - A numbered cart of pizzas with totals
//! - [`store`] - Order numbering and the placed-order ledger
//! - [`manager`] - The ordering session and its shared handle
//! - [`error`] - Domain error types
//! - [`validation`] - Screen pre-checks
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Boolean Contracts**: Cart and store mutations report success, never panic
//! 4. **Explicit Validation**: Screen-facing checks return typed errors, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use pronto_core::menu::{Region, Size};
//! use pronto_core::OrderManager;
//!
//! let mut manager = OrderManager::new();
//!
//! // Build a Chicago deluxe (deep dish crust, five default toppings)
//! let mut pizza = Region::Chicago.create_deluxe();
//! pizza.set_size(Size::Small);
//! manager.add_pizza(pizza);
//!
//! // $16.99 + 6.625% NJ sales tax
//! assert_eq!(manager.subtotal().cents(), 1699);
//! assert_eq!(manager.total().to_string(), "$18.12");
//!
//! // Placing hands back the order number and starts the next order
//! let number = manager.place_order();
//! assert_eq!(number, 1);
//! assert_eq!(manager.current_order_number(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod factory;
pub mod manager;
pub mod menu;
pub mod money;
pub mod order;
pub mod pizza;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pronto_core::Pizza` instead of
// `use pronto_core::pizza::Pizza`

pub use error::ValidationError;
pub use manager::{OrderManager, SharedOrderManager};
pub use menu::{Crust, PizzaStyle, Region, Size, Topping};
pub use money::{Money, TaxRate};
pub use order::Order;
pub use pizza::Pizza;
pub use store::Store;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum toppings on a single pizza
///
/// ## Business Reason
/// Seven is the most the oven crew will load on one pie. The toppings screen
/// stops offering checkboxes at the cap, and `Pizza::add_topping` refuses
/// past it even if a screen forgets to check.
pub const MAX_TOPPINGS: usize = 7;

/// Price of each topping on a build-your-own pizza
///
/// ## Business Reason
/// Build-your-own pizzas price as size base plus $1.69 per topping.
/// Specialty pizzas price by size alone, so this never applies to them.
pub const TOPPING_PRICE: Money = Money::from_major_minor(1, 69);

/// New Jersey sales tax rate (6.625%)
///
/// ## Why parts per million?
/// 6.625% is not a whole number of basis points, so the rate carries six
/// decimal digits: 66,250 ppm. Tax math stays in integers all the way down.
pub const SALES_TAX: TaxRate = TaxRate::from_ppm(66_250);
