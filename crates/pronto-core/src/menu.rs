//! # Menu Module
//!
//! The closed menu vocabulary: sizes, regions, pizza styles, toppings, and
//! crusts, plus the lookup tables that tie them together.
//!
//! ## Menu Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Menu Vocabulary                                │
//! │                                                                         │
//! │  ┌─────────────┐   ┌──────────────┐   ┌────────────────────────────┐   │
//! │  │    Size     │   │  PizzaStyle  │   │          Topping           │   │
//! │  │  ─────────  │   │  ──────────  │   │  ────────────────────────  │   │
//! │  │  Small      │   │  BuildYourOwn│   │  14 values (13 edible +    │   │
//! │  │  Medium     │   │  Deluxe      │   │  Plain); specialty styles  │   │
//! │  │  Large      │   │  Meatzza     │   │  carry fixed default sets  │   │
//! │  └─────────────┘   │  BbqChicken  │   └────────────────────────────┘   │
//! │                    └──────┬───────┘                                    │
//! │  ┌─────────────┐          │            ┌────────────────────────────┐  │
//! │  │   Region    │          └───────────►│           Crust            │  │
//! │  │  ─────────  │                       │  ────────────────────────  │  │
//! │  │  NewYork    │──────────────────────►│  Region × Style = 8 values │  │
//! │  │  Chicago    │       Crust::of       │  each with a menu label    │  │
//! │  └─────────────┘                       │  ("Deep Dish", "Thin", …)  │  │
//! │                                        └────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The string lookups (`PizzaStyle::parse`, `Region::parse`, `Crust::resolve`,
//! `Topping::defaults_for`) exist for the presentation boundary, where style
//! and region arrive as picker text. Unrecognized input yields `None` or an
//! empty set, never an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Size
// =============================================================================

/// The available pizza sizes.
///
/// Identity only; pricing keyed on size lives in `Pizza::price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Lowercase name used in pizza summaries.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Region
// =============================================================================

/// The two regional menus the chain offers.
///
/// A region turns a [`PizzaStyle`] into a concrete crust; see
/// [`Crust::of`] and the creation methods in the factory module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NewYork,
    Chicago,
}

impl Region {
    /// Menu name as shown on the region picker.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Region::NewYork => "New York",
            Region::Chicago => "Chicago",
        }
    }

    /// Case-insensitive lookup from the region picker text.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::Region;
    ///
    /// assert_eq!(Region::parse("new york"), Some(Region::NewYork));
    /// assert_eq!(Region::parse("Chicago"), Some(Region::Chicago));
    /// assert_eq!(Region::parse("Mars"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Region> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("New York") {
            Some(Region::NewYork)
        } else if name.eq_ignore_ascii_case("Chicago") {
            Some(Region::Chicago)
        } else {
            None
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Pizza Style
// =============================================================================

/// The four pizza styles on the menu.
///
/// This is the closed variant tag every [`Pizza`](crate::pizza::Pizza)
/// carries: one customizable style and three specialty styles with fixed
/// default toppings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PizzaStyle {
    BuildYourOwn,
    Deluxe,
    Meatzza,
    BbqChicken,
}

impl PizzaStyle {
    /// Menu name as shown on the style picker and in pizza summaries.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            PizzaStyle::BuildYourOwn => "Build Your Own",
            PizzaStyle::Deluxe => "Deluxe",
            PizzaStyle::Meatzza => "Meatzza",
            PizzaStyle::BbqChicken => "BBQ Chicken",
        }
    }

    /// Case-insensitive lookup from the style picker text.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::PizzaStyle;
    ///
    /// assert_eq!(PizzaStyle::parse("bbq chicken"), Some(PizzaStyle::BbqChicken));
    /// assert_eq!(PizzaStyle::parse("Deluxe"), Some(PizzaStyle::Deluxe));
    /// assert_eq!(PizzaStyle::parse("Hawaiian"), None);
    /// ```
    pub fn parse(name: &str) -> Option<PizzaStyle> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("Build Your Own") {
            Some(PizzaStyle::BuildYourOwn)
        } else if name.eq_ignore_ascii_case("Deluxe") {
            Some(PizzaStyle::Deluxe)
        } else if name.eq_ignore_ascii_case("Meatzza") {
            Some(PizzaStyle::Meatzza)
        } else if name.eq_ignore_ascii_case("BBQ Chicken") {
            Some(PizzaStyle::BbqChicken)
        } else {
            None
        }
    }

    /// The fixed topping set a specialty pizza starts with, in menu order.
    ///
    /// Build-your-own starts empty; the customer picks every topping.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::{PizzaStyle, Topping};
    ///
    /// assert_eq!(
    ///     PizzaStyle::Meatzza.default_toppings(),
    ///     &[Topping::Sausage, Topping::Pepperoni, Topping::Beef, Topping::Ham],
    /// );
    /// assert!(PizzaStyle::BuildYourOwn.default_toppings().is_empty());
    /// ```
    pub const fn default_toppings(&self) -> &'static [Topping] {
        match self {
            PizzaStyle::BuildYourOwn => &[],
            PizzaStyle::Deluxe => &[
                Topping::Sausage,
                Topping::Pepperoni,
                Topping::GreenPepper,
                Topping::Onion,
                Topping::Mushroom,
            ],
            PizzaStyle::Meatzza => &[
                Topping::Sausage,
                Topping::Pepperoni,
                Topping::Beef,
                Topping::Ham,
            ],
            PizzaStyle::BbqChicken => &[
                Topping::BbqChicken,
                Topping::GreenPepper,
                Topping::Provolone,
                Topping::Cheddar,
            ],
        }
    }
}

impl fmt::Display for PizzaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Topping
// =============================================================================

/// Every topping the chain stocks.
///
/// Thirteen edible toppings plus `Plain` (explicitly no topping). Topping
/// pickers list [`Topping::ALL`]; specialty defaults come from
/// [`PizzaStyle::default_toppings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Sausage,
    Pepperoni,
    GreenPepper,
    Onion,
    Mushroom,
    BbqChicken,
    Cheddar,
    Provolone,
    Beef,
    Ham,
    Olives,
    Pineapples,
    Jalapenos,
    Plain,
}

impl Topping {
    /// Every topping, in menu order, for topping-picker screens.
    pub const ALL: [Topping; 14] = [
        Topping::Sausage,
        Topping::Pepperoni,
        Topping::GreenPepper,
        Topping::Onion,
        Topping::Mushroom,
        Topping::BbqChicken,
        Topping::Cheddar,
        Topping::Provolone,
        Topping::Beef,
        Topping::Ham,
        Topping::Olives,
        Topping::Pineapples,
        Topping::Jalapenos,
        Topping::Plain,
    ];

    /// Lowercase name used in pizza summaries ("green pepper", "bbq chicken").
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Topping::Sausage => "sausage",
            Topping::Pepperoni => "pepperoni",
            Topping::GreenPepper => "green pepper",
            Topping::Onion => "onion",
            Topping::Mushroom => "mushroom",
            Topping::BbqChicken => "bbq chicken",
            Topping::Cheddar => "cheddar",
            Topping::Provolone => "provolone",
            Topping::Beef => "beef",
            Topping::Ham => "ham",
            Topping::Olives => "olives",
            Topping::Pineapples => "pineapples",
            Topping::Jalapenos => "jalapenos",
            Topping::Plain => "plain",
        }
    }

    /// Default topping set for a style name from the picker, in menu order.
    ///
    /// Case-insensitive; anything unrecognized (including "Build Your Own")
    /// yields an empty set, never an error.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::Topping;
    ///
    /// let defaults = Topping::defaults_for("meatzza");
    /// assert_eq!(
    ///     defaults,
    ///     vec![Topping::Sausage, Topping::Pepperoni, Topping::Beef, Topping::Ham],
    /// );
    /// assert!(Topping::defaults_for("Build Your Own").is_empty());
    /// assert!(Topping::defaults_for("Hawaiian").is_empty());
    /// ```
    pub fn defaults_for(style_name: &str) -> Vec<Topping> {
        match PizzaStyle::parse(style_name) {
            Some(style) => style.default_toppings().to_vec(),
            None => Vec::new(),
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Crust
// =============================================================================

/// The eight region × style crusts, each with its menu label.
///
/// ## Crust Table
/// ```text
/// ┌──────────────┬───────────────┬───────────────┐
/// │    Style     │    Chicago    │   New York    │
/// ├──────────────┼───────────────┼───────────────┤
/// │ Deluxe       │ Deep Dish     │ Brooklyn      │
/// │ BBQ Chicken  │ Pan           │ Thin          │
/// │ Meatzza      │ Stuffed       │ Hand Tossed   │
/// │ BuildYourOwn │ Pan           │ Hand Tossed   │
/// └──────────────┴───────────────┴───────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Crust {
    ChicagoDeluxe,
    NyDeluxe,
    ChicagoBbqChicken,
    NyBbqChicken,
    ChicagoMeatzza,
    NyMeatzza,
    ChicagoBuildYourOwn,
    NyBuildYourOwn,
}

impl Crust {
    /// The menu label printed in pizza summaries.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Crust::ChicagoDeluxe => "Deep Dish",
            Crust::NyDeluxe => "Brooklyn",
            Crust::ChicagoBbqChicken => "Pan",
            Crust::NyBbqChicken => "Thin",
            Crust::ChicagoMeatzza => "Stuffed",
            Crust::NyMeatzza => "Hand Tossed",
            Crust::ChicagoBuildYourOwn => "Pan",
            Crust::NyBuildYourOwn => "Hand Tossed",
        }
    }

    /// The crust a region bakes a style on. Total: every combination maps.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::{Crust, PizzaStyle, Region};
    ///
    /// let crust = Crust::of(Region::Chicago, PizzaStyle::Deluxe);
    /// assert_eq!(crust, Crust::ChicagoDeluxe);
    /// assert_eq!(crust.label(), "Deep Dish");
    /// ```
    pub const fn of(region: Region, style: PizzaStyle) -> Crust {
        match (region, style) {
            (Region::Chicago, PizzaStyle::Deluxe) => Crust::ChicagoDeluxe,
            (Region::NewYork, PizzaStyle::Deluxe) => Crust::NyDeluxe,
            (Region::Chicago, PizzaStyle::BbqChicken) => Crust::ChicagoBbqChicken,
            (Region::NewYork, PizzaStyle::BbqChicken) => Crust::NyBbqChicken,
            (Region::Chicago, PizzaStyle::Meatzza) => Crust::ChicagoMeatzza,
            (Region::NewYork, PizzaStyle::Meatzza) => Crust::NyMeatzza,
            (Region::Chicago, PizzaStyle::BuildYourOwn) => Crust::ChicagoBuildYourOwn,
            (Region::NewYork, PizzaStyle::BuildYourOwn) => Crust::NyBuildYourOwn,
        }
    }

    /// String-based crust lookup for the presentation boundary.
    ///
    /// Case-insensitive on both names; any unrecognized style or region
    /// yields `None`, never an error.
    ///
    /// ## Example
    /// ```rust
    /// use pronto_core::menu::Crust;
    ///
    /// assert_eq!(Crust::resolve("Deluxe", "New York"), Some(Crust::NyDeluxe));
    /// assert_eq!(
    ///     Crust::resolve("BBQ Chicken", "Chicago"),
    ///     Some(Crust::ChicagoBbqChicken),
    /// );
    /// assert_eq!(Crust::resolve("Anything", "Mars"), None);
    /// ```
    pub fn resolve(style_name: &str, region_name: &str) -> Option<Crust> {
        let style = PizzaStyle::parse(style_name)?;
        let region = Region::parse(region_name)?;
        Some(Crust::of(region, style))
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
