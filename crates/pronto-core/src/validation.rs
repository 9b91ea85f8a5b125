//! # Validation Module
//!
//! Screen-input validation utilities for Pronto Pizzeria.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Ordering screens                                             │
//! │  ├── Widget state (disable buttons, require selection)                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - Pre-checks with user-facing messages           │
//! │  ├── Size chosen? Style known? Cart position real?                     │
//! │  └── Errors carry the toast/dialog text                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core types (Pizza, Order, Store)                             │
//! │  ├── Boolean contracts enforce the same rules silently                 │
//! │  └── Safe even when a screen skips layer 2                             │
//! │                                                                         │
//! │  Defense in depth: the core never corrupts, the screens never guess    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pronto_core::validation::{validate_style, validate_topping_capacity};
//!
//! // Resolve a style name before building the pizza
//! let style = validate_style("Deluxe").unwrap();
//!
//! // Gate the toppings list before offering another checkbox
//! validate_topping_capacity(3).unwrap();
//! ```

use crate::error::ValidationError;
use crate::menu::{PizzaStyle, Region, Size};
use crate::MAX_TOPPINGS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Selection Validators
// =============================================================================

/// Validates a pizza style name from a picker or menu item.
///
/// ## Rules
/// - Must match a menu style (case-insensitive, surrounding whitespace ignored)
///
/// ## Example
/// ```rust
/// use pronto_core::menu::PizzaStyle;
/// use pronto_core::validation::validate_style;
///
/// assert_eq!(validate_style("bbq chicken").unwrap(), PizzaStyle::BbqChicken);
/// assert!(validate_style("Hawaiian").is_err());
/// ```
pub fn validate_style(name: &str) -> ValidationResult<PizzaStyle> {
    PizzaStyle::parse(name).ok_or_else(|| ValidationError::UnknownStyle(name.trim().to_string()))
}

/// Validates a regional style name.
///
/// ## Rules
/// - Must match a region (case-insensitive, surrounding whitespace ignored)
pub fn validate_region(name: &str) -> ValidationResult<Region> {
    Region::parse(name).ok_or_else(|| ValidationError::UnknownRegion(name.trim().to_string()))
}

/// Validates that a size has been selected.
///
/// ## Rules
/// - A pizza without a size prices at zero, so screens require one before
///   "Add to Order"
///
/// ## Returns
/// The selected size.
pub fn validate_size_selected(size: Option<Size>) -> ValidationResult<Size> {
    size.ok_or(ValidationError::SizeRequired)
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates that a pizza can take one more topping.
///
/// ## Rules
/// - Must hold fewer than MAX_TOPPINGS (7) toppings
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Build Your Own: Select Topping                                         │
/// │                                                                         │
/// │  User taps a topping checkbox                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_topping_capacity(current) ← THIS FUNCTION                    │
/// │       │                                                                 │
/// │       ├── current >= 7? → Error: "maximum of 7 toppings"               │
/// │       │                                                                 │
/// │       └── OK → Proceed with add_topping                                │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_topping_capacity(current: usize) -> ValidationResult<()> {
    if current >= MAX_TOPPINGS {
        return Err(ValidationError::ToppingsFull { max: MAX_TOPPINGS });
    }

    Ok(())
}

/// Validates a cart removal index against the current pizza list.
///
/// ## Rules
/// - `index` must point at an existing pizza (`index < len`)
///
/// ## Example
/// ```rust
/// use pronto_core::validation::validate_remove_index;
///
/// assert!(validate_remove_index(0, 2).is_ok());
/// assert!(validate_remove_index(2, 2).is_err());
/// assert!(validate_remove_index(0, 0).is_err());
/// ```
pub fn validate_remove_index(index: usize, len: usize) -> ValidationResult<()> {
    if index >= len {
        return Err(ValidationError::NoSuchPizza { index, len });
    }

    Ok(())
}

/// Validates that an order has something in it before placement.
///
/// ## Rules
/// - At least one pizza; the store itself accepts empty orders, so this
///   gate is what keeps "Place Order" honest on the cart screen
pub fn validate_order_not_empty(pizza_count: usize) -> ValidationResult<()> {
    if pizza_count == 0 {
        return Err(ValidationError::EmptyOrder);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
