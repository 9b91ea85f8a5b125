//! # Error Types
//!
//! Domain-specific error types for pronto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pronto-core errors (this file)                                        │
//! │  └── ValidationError  - Pre-checks the ordering screens run            │
//! │                                                                         │
//! │  Core type operations stay boolean (add_topping, place, cancel):       │
//! │  they report success or refuse silently, and never construct errors.   │
//! │                                                                         │
//! │  Flow: screen input → ValidationError → screen shows the message       │
//! │        screen input → core operation  → bool                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (requested index, list length)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a screen action doesn't meet requirements.
/// Used for early validation before the core operation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Pizza has reached the topping cap.
    ///
    /// ## When This Occurs
    /// - A build-your-own pizza already carries the maximum toppings
    /// - The toppings screen should disable further selection
    ///
    /// ## User Workflow
    /// ```text
    /// Tap topping #8
    ///      │
    ///      ▼
    /// Check capacity: pizza holds 7
    ///      │
    ///      ▼
    /// ToppingsFull { max: 7 }
    ///      │
    ///      ▼
    /// UI shows: "Pizza already has the maximum of 7 toppings"
    /// ```
    #[error("Pizza already has the maximum of {max} toppings")]
    ToppingsFull { max: usize },

    /// No size selected for a pizza about to be priced or ordered.
    ///
    /// ## When This Occurs
    /// - "Add to Order" pressed before a size radio button is chosen
    /// - An unsized pizza prices at zero, so screens gate on this first
    #[error("Size is required")]
    SizeRequired,

    /// Style name does not match any menu entry.
    #[error("Unknown pizza style: {0}")]
    UnknownStyle(String),

    /// Regional style name does not match any region.
    #[error("Unknown regional style: {0}")]
    UnknownRegion(String),

    /// Removal requested for a cart position that doesn't exist.
    ///
    /// ## When This Occurs
    /// - "Remove Pizza" pressed with nothing selected in the cart list
    /// - The selection outlived a previous removal
    #[error("No pizza at position {index}: order has {len} pizzas")]
    NoSuchPizza { index: usize, len: usize },

    /// Placement requested for an order with no pizzas.
    #[error("Order has no pizzas to place")]
    EmptyOrder,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::ToppingsFull { max: 7 };
        assert_eq!(
            err.to_string(),
            "Pizza already has the maximum of 7 toppings"
        );

        let err = ValidationError::NoSuchPizza { index: 3, len: 2 };
        assert_eq!(err.to_string(), "No pizza at position 3: order has 2 pizzas");
    }

    #[test]
    fn test_unknown_name_messages_echo_the_input() {
        let err = ValidationError::UnknownStyle("Hawaiian".to_string());
        assert_eq!(err.to_string(), "Unknown pizza style: Hawaiian");

        let err = ValidationError::UnknownRegion("Detroit".to_string());
        assert_eq!(err.to_string(), "Unknown regional style: Detroit");
    }

    #[test]
    fn test_gate_messages() {
        assert_eq!(ValidationError::SizeRequired.to_string(), "Size is required");
        assert_eq!(
            ValidationError::EmptyOrder.to_string(),
            "Order has no pizzas to place"
        );
    }
}
