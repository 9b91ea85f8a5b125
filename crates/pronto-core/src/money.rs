//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and order totals safely,
//! plus the `TaxRate` type for the store's sales tax.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Pizza prices look innocent in floating point:                          │
//! │    8.99 + 3 × 1.69 = 14.059999999999999  ❌ WRONG!                      │
//! │                                                                         │
//! │  Summed over a cart and multiplied by a tax rate, the drift shows up   │
//! │  as off-by-a-cent totals on the receipt.                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    899 + 3 × 169 = 1406 cents, exactly $14.06, every time              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pronto_core::money::Money;
//!
//! // Create from cents (preferred)
//! let base = Money::from_cents(899); // $8.99 small build-your-own
//!
//! // Arithmetic operations
//! let surcharge = Money::from_cents(169) * 3; // three toppings
//! let price = base + surcharge;
//! assert_eq!(price.cents(), 1406); // $14.06
//!
//! // NEVER do this:
//! // let bad = Money::from_float(8.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Headroom for arbitrary arithmetic; menu math never
///   overflows it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Pizza.price() ──► Order.subtotal() ──► calculate_tax ──► Order.total()│
/// │        │                                                                │
/// │        └──► Displayed as "$14.06" in pizza and order summaries          │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::money::Money;
    ///
    /// let price = Money::from_cents(1699); // Represents $16.99
    /// assert_eq!(price.cents(), 1699);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The menu tables, totals, and serialized payloads all use cents.
    /// Only the UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// Menu prices read naturally this way: the $16.99 small deluxe is
    /// `Money::from_major_minor(16, 99)`.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::money::Money;
    ///
    /// let price = Money::from_major_minor(16, 99); // $16.99
    /// assert_eq!(price.cents(), 1699);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::money::Money;
    ///
    /// let price = Money::from_cents(1699);
    /// assert_eq!(price.dollars(), 16);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::money::Money;
    ///
    /// let price = Money::from_cents(1699);
    /// assert_eq!(price.cents_part(), 99);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// A pizza with no size selected prices at zero; so does an empty order.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates sales tax at the given rate, rounding half up to the cent.
    ///
    /// ## Implementation
    /// Integer math throughout: `(cents × ppm + 500_000) / 1_000_000`.
    /// The +500_000 provides rounding (500_000 / 1_000_000 = 0.5).
    /// i128 intermediates rule out overflow.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(2474); // two $12.37 pizzas
    /// let rate = TaxRate::from_ppm(66_250);   // 6.625%
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// // $24.74 × 6.625% = $1.639025 → rounds to $1.64
    /// assert_eq!(tax.cents(), 164);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Order Subtotal: $24.74
    ///      │
    ///      ▼
    /// calculate_tax(6.625%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: $1.64
    ///      │
    ///      ▼
    /// Order Total: $26.38
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.ppm() as i128 + 500_000) / 1_000_000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in parts per million (ppm).
///
/// ## Why Parts Per Million?
/// The store's sales tax is 6.625%, which is not a whole number of basis
/// points (662.5 bps). In ppm it is exactly 66,250, so the rate stays in
/// integer arithmetic end to end: 1 ppm = 0.0001%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from parts per million.
    #[inline]
    pub const fn from_ppm(ppm: u32) -> Self {
        TaxRate(ppm)
    }

    /// Creates a tax rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::money::TaxRate;
    ///
    /// let rate = TaxRate::from_percentage(6.625);
    /// assert_eq!(rate.ppm(), 66_250);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 10_000.0).round() as u32)
    }

    /// Returns the rate in parts per million.
    #[inline]
    pub const fn ppm(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This rendering is part of the contract: pizza and order summaries embed
/// it verbatim in their own Display output.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// In-place addition (running subtotals).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values (price differences).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (for the per-topping surcharge).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

/// Summation over an iterator (order subtotals fold a pizza list).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
