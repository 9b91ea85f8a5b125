//! # Factory Module
//!
//! Regional pizza creation: a [`Region`] turns a menu style into a
//! ready-to-customize [`Pizza`] with the region-correct crust.
//!
//! ## Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Regional Pizza Creation                              │
//! │                                                                         │
//! │  Region picker        Style picker          Result                      │
//! │  ─────────────        ────────────          ──────                      │
//! │                                                                         │
//! │  Chicago ──────┬────► create_deluxe() ────► Deluxe, Deep Dish crust,    │
//! │                │                            5 default toppings          │
//! │                │                                                        │
//! │  New York ─────┴────► create_build_your_own()                           │
//! │                              │                                          │
//! │                              └────────────► BYO, Hand Tossed crust,     │
//! │                                             no toppings yet             │
//! │                                                                         │
//! │  Creation never fails: every region × style pair has a crust.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Default toppings are seeded by [`Pizza::new`]; the factory's only job is
//! the crust. Size stays unset until the customer picks one.

use crate::menu::{Crust, PizzaStyle, Region};
use crate::pizza::Pizza;

// =============================================================================
// Regional Creation
// =============================================================================

impl Region {
    /// Creates a pizza of the given style on this region's crust.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::{Crust, PizzaStyle, Region, Topping};
    ///
    /// let pizza = Region::Chicago.create(PizzaStyle::Deluxe);
    /// assert_eq!(pizza.crust(), Some(Crust::ChicagoDeluxe));
    /// assert_eq!(pizza.toppings().first(), Some(&Topping::Sausage));
    /// assert_eq!(pizza.size(), None);
    /// ```
    pub fn create(self, style: PizzaStyle) -> Pizza {
        let mut pizza = Pizza::new(style);
        pizza.set_crust(Crust::of(self, style));
        pizza
    }

    /// Creates this region's deluxe pizza.
    pub fn create_deluxe(self) -> Pizza {
        self.create(PizzaStyle::Deluxe)
    }

    /// Creates this region's meatzza pizza.
    pub fn create_meatzza(self) -> Pizza {
        self.create(PizzaStyle::Meatzza)
    }

    /// Creates this region's BBQ chicken pizza.
    pub fn create_bbq_chicken(self) -> Pizza {
        self.create(PizzaStyle::BbqChicken)
    }

    /// Creates this region's build-your-own pizza (no toppings yet).
    pub fn create_build_your_own(self) -> Pizza {
        self.create(PizzaStyle::BuildYourOwn)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
