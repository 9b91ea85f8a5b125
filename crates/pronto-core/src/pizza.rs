//! # Pizza Module
//!
//! The pizza value: a menu style plus the customer's size, crust, and
//! topping choices, with pricing dispatched over the style tag.
//!
//! ## Price Table
//! ```text
//! ┌──────────────┬────────┬────────┬────────┬─────────────────────┐
//! │    Style     │ Small  │ Medium │ Large  │  Topping surcharge  │
//! ├──────────────┼────────┼────────┼────────┼─────────────────────┤
//! │ BuildYourOwn │  8.99  │ 10.99  │ 12.99  │  +1.69 × count      │
//! │ Deluxe       │ 16.99  │ 18.99  │ 20.99  │  none               │
//! │ Meatzza      │ 17.99  │ 19.99  │ 21.99  │  none               │
//! │ BBQ Chicken  │ 14.99  │ 16.99  │ 19.99  │  none               │
//! └──────────────┴────────┴────────┴────────┴─────────────────────┘
//! ```
//!
//! A pizza with no size selected prices at $0.00 for every style; the
//! ordering screens require a size before the pizza reaches an order.
//!
//! ## Topping Cap
//! A pizza never holds more than [`MAX_TOPPINGS`] toppings. `add_topping`
//! past the cap is a silent no-op; screens pre-check with
//! [`Pizza::can_add_topping`] and disable the picker instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::menu::{Crust, PizzaStyle, Size, Topping};
use crate::money::Money;
use crate::{MAX_TOPPINGS, TOPPING_PRICE};

// =============================================================================
// Pizza
// =============================================================================

/// A pizza being composed or already sitting in an order.
///
/// ## Design Notes
/// - `style` is fixed at construction; size and crust start unset and are
///   chosen on the ordering screen
/// - `toppings` preserves insertion order and permits duplicates (extra
///   pepperoni is two `Pepperoni` entries)
/// - Specialty styles ([`Deluxe`](PizzaStyle::Deluxe),
///   [`Meatzza`](PizzaStyle::Meatzza), [`BbqChicken`](PizzaStyle::BbqChicken))
///   are seeded with their default toppings exactly once, here at
///   construction; the regional factories only set the crust
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pizza {
    style: PizzaStyle,
    size: Option<Size>,
    crust: Option<Crust>,
    toppings: Vec<Topping>,
}

impl Pizza {
    /// Creates a pizza of the given style with its default toppings seeded.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::{PizzaStyle, Topping};
    /// use pronto_core::pizza::Pizza;
    ///
    /// let deluxe = Pizza::new(PizzaStyle::Deluxe);
    /// assert_eq!(deluxe.topping_count(), 5);
    ///
    /// let byo = Pizza::new(PizzaStyle::BuildYourOwn);
    /// assert_eq!(byo.topping_count(), 0);
    /// ```
    pub fn new(style: PizzaStyle) -> Self {
        Pizza {
            style,
            size: None,
            crust: None,
            toppings: style.default_toppings().to_vec(),
        }
    }

    /// The menu style this pizza was created as.
    #[inline]
    pub const fn style(&self) -> PizzaStyle {
        self.style
    }

    /// The chosen size, if one has been selected yet.
    #[inline]
    pub const fn size(&self) -> Option<Size> {
        self.size
    }

    /// The crust, once a regional factory (or the screen) has set one.
    #[inline]
    pub const fn crust(&self) -> Option<Crust> {
        self.crust
    }

    /// The toppings in insertion order.
    #[inline]
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Number of toppings currently on the pizza.
    #[inline]
    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// Whether another topping would fit under the cap.
    ///
    /// Topping-picker screens call this to grey out choices before ever
    /// reaching the silent cap in [`add_topping`](Pizza::add_topping).
    #[inline]
    pub fn can_add_topping(&self) -> bool {
        self.toppings.len() < MAX_TOPPINGS
    }

    /// Sets the pizza size.
    pub fn set_size(&mut self, size: Size) {
        self.size = Some(size);
    }

    /// Sets the crust.
    pub fn set_crust(&mut self, crust: Crust) {
        self.crust = Some(crust);
    }

    /// Replaces the topping list wholesale.
    ///
    /// ## Behavior
    /// No cap check; the cap guards incremental
    /// [`add_topping`](Pizza::add_topping) calls only.
    /// Screens that assemble a full selection enforce their own limit before
    /// handing it over.
    pub fn set_toppings(&mut self, toppings: Vec<Topping>) {
        self.toppings = toppings;
    }

    /// Adds a topping if the cap allows it; otherwise does nothing.
    ///
    /// ## Behavior
    /// Appends iff the pizza currently holds fewer than [`MAX_TOPPINGS`]
    /// toppings. At the cap this is a silent no-op: no error, no signal, and
    /// the existing toppings keep their order. Duplicates under the cap are
    /// fine.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::{PizzaStyle, Topping};
    /// use pronto_core::pizza::Pizza;
    ///
    /// let mut pizza = Pizza::new(PizzaStyle::BuildYourOwn);
    /// for _ in 0..10 {
    ///     pizza.add_topping(Topping::Olives);
    /// }
    /// assert_eq!(pizza.topping_count(), 7);
    /// ```
    pub fn add_topping(&mut self, topping: Topping) {
        if self.toppings.len() < MAX_TOPPINGS {
            self.toppings.push(topping);
        }
    }

    /// Prices the pizza from the menu table.
    ///
    /// ## Behavior
    /// Keyed on the chosen size; a pizza with no size yet prices at
    /// [`Money::zero`] for every style. Build-your-own adds the
    /// [`TOPPING_PRICE`] surcharge per topping; specialty styles are flat.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::{PizzaStyle, Size, Topping};
    /// use pronto_core::money::Money;
    /// use pronto_core::pizza::Pizza;
    ///
    /// let mut pizza = Pizza::new(PizzaStyle::BuildYourOwn);
    /// assert!(pizza.price().is_zero()); // no size chosen yet
    ///
    /// pizza.set_size(Size::Small);
    /// pizza.add_topping(Topping::Sausage);
    /// pizza.add_topping(Topping::Mushroom);
    /// assert_eq!(pizza.price(), Money::from_cents(1237)); // 8.99 + 2 × 1.69
    /// ```
    pub fn price(&self) -> Money {
        let size = match self.size {
            Some(size) => size,
            None => return Money::zero(),
        };

        match self.style {
            PizzaStyle::BuildYourOwn => {
                let base = match size {
                    Size::Small => Money::from_major_minor(8, 99),
                    Size::Medium => Money::from_major_minor(10, 99),
                    Size::Large => Money::from_major_minor(12, 99),
                };
                base + TOPPING_PRICE * self.toppings.len() as i64
            }
            PizzaStyle::Deluxe => match size {
                Size::Small => Money::from_major_minor(16, 99),
                Size::Medium => Money::from_major_minor(18, 99),
                Size::Large => Money::from_major_minor(20, 99),
            },
            PizzaStyle::Meatzza => match size {
                Size::Small => Money::from_major_minor(17, 99),
                Size::Medium => Money::from_major_minor(19, 99),
                Size::Large => Money::from_major_minor(21, 99),
            },
            PizzaStyle::BbqChicken => match size {
                Size::Small => Money::from_major_minor(14, 99),
                Size::Medium => Money::from_major_minor(16, 99),
                Size::Large => Money::from_major_minor(19, 99),
            },
        }
    }
}

// =============================================================================
// Display
// =============================================================================

/// One-line pizza summary as the ordering and store-order screens show it.
///
/// ## Format
/// `{style} ({size}) [{crust}] Toppings: {names, comma-joined} {price}`
///
/// Unset size/crust segments and an empty topping list are omitted cleanly,
/// with no dangling separators:
///
/// ```rust
/// use pronto_core::menu::{Region, Size};
///
/// let mut pizza = Region::Chicago.create_deluxe();
/// pizza.set_size(Size::Small);
/// assert_eq!(
///     pizza.to_string(),
///     "Deluxe (small) [Deep Dish] Toppings: sausage, pepperoni, green pepper, onion, mushroom $16.99",
/// );
/// ```
impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style.name())?;
        if let Some(size) = self.size {
            write!(f, " ({})", size)?;
        }
        if let Some(crust) = self.crust {
            write!(f, " [{}]", crust)?;
        }
        if !self.toppings.is_empty() {
            let names: Vec<&str> = self.toppings.iter().map(Topping::name).collect();
            write!(f, " Toppings: {}", names.join(", "))?;
        }
        write!(f, " {}", self.price())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
