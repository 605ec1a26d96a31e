//! Coin classification by radius and mass.
//!
//! Each measurement is looked up on its own against the reference table. A coin
//! is only worth something when both readings point at the same denomination;
//! a radius that says "quarter" with a mass that says "nickel" is rejected.

use crate::Amount;
use crate::model::{Denomination, Measure};

/// Result of classifying one coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub denomination: Option<Denomination>,
    pub amount: Amount,
}

impl Classification {
    const REJECTED: Classification = Classification {
        denomination: None,
        amount: Amount::ZERO,
    };

    pub fn is_accepted(&self) -> bool {
        !self.amount.is_zero()
    }
}

/// Classify a coin against the denomination table.
///
/// Comparisons use exact equality on the raw readings, no tolerance.
pub fn classify<C: Measure + ?Sized>(coin: &C) -> Classification {
    let by_radius = match_denomination(|d| d.reference().radius == coin.radius_mm());
    let by_mass = match_denomination(|d| d.reference().mass == coin.mass_g());

    match (by_radius, by_mass) {
        (Some(r), Some(m)) if r == m => Classification {
            denomination: Some(r),
            amount: r.value(),
        },
        _ => Classification::REJECTED,
    }
}

fn match_denomination(pred: impl Fn(Denomination) -> bool) -> Option<Denomination> {
    Denomination::ALL.into_iter().find(|d| pred(*d))
}
