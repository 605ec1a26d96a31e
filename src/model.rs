//! Core domain types for the vending machine.

use std::fmt;

use crate::Amount;

/// Anything the coin slot can measure.
///
/// The machine never looks at a concrete coin type, only at these two readings.
pub trait Measure {
    /// Radius in millimeters.
    fn radius_mm(&self) -> f64;
    /// Mass in grams.
    fn mass_g(&self) -> f64;

    /// A readable coin has a finite, positive radius and mass.
    fn is_readable(&self) -> bool {
        let (radius, mass) = (self.radius_mm(), self.mass_g());
        radius.is_finite() && radius > 0.0 && mass.is_finite() && mass > 0.0
    }
}

/// A physical coin presented to the slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub radius: f64,
    pub mass: f64,
}

impl Coin {
    pub fn new(radius: f64, mass: f64) -> Self {
        Self { radius, mass }
    }

    /// A coin with the exact reference measurements of `denomination`.
    pub fn of(denomination: Denomination) -> Self {
        let reference = denomination.reference();
        Self::new(reference.radius, reference.mass)
    }
}

impl Measure for Coin {
    fn radius_mm(&self) -> f64 {
        self.radius
    }

    fn mass_g(&self) -> f64 {
        self.mass
    }
}

/// Reference measurements and value of a recognized coin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    pub radius: f64,
    pub mass: f64,
    pub value: Amount,
}

/// The coins the machine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Nickel,
    Dime,
    Quarter,
}

impl Denomination {
    pub const ALL: [Denomination; 3] = [Self::Nickel, Self::Dime, Self::Quarter];

    pub const fn reference(self) -> Reference {
        match self {
            Self::Nickel => Reference {
                radius: 10.0,
                mass: 5.0,
                value: Amount::from_scaled(5),
            },
            Self::Dime => Reference {
                radius: 9.0,
                mass: 2.27,
                value: Amount::from_scaled(10),
            },
            Self::Quarter => Reference {
                radius: 12.0,
                mass: 5.67,
                value: Amount::from_scaled(25),
            },
        }
    }

    pub fn value(self) -> Amount {
        self.reference().value
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nickel => "nickel",
            Self::Dime => "dime",
            Self::Quarter => "quarter",
        };
        f.write_str(name)
    }
}

/// An item for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: Amount,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Amount) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// One input from the person standing at the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Drop a coin into the slot.
    Coin(Coin),
    /// Press a key on the selection pad.
    Button(char),
}
