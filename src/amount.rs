use std::fmt;

/// Fixed-point money with 2 decimal places, stored as a number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 100;

    pub const ZERO: Amount = Amount(0);

    /// Round a decimal to the nearest cent, or `None` if it is not finite or
    /// does not fit.
    pub fn checked_from_float(value: f64) -> Option<Self> {
        let cents = (value * Self::SCALE as f64).round();
        (cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64)
            .then_some(Amount(cents as i64))
    }

    pub const fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract `rhs`, or `None` if the result would drop below zero.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let diff = self.0.checked_sub(rhs.0)?;
        (diff >= 0).then_some(Amount(diff))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let cents = self.0.unsigned_abs();
        let scale = Self::SCALE.unsigned_abs();
        write!(f, "{}.{:02}", cents / scale, cents % scale)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_from_float_converts_to_cents() {
        assert_eq!(Amount::checked_from_float(1.0), Some(Amount::from_scaled(100)));
        assert_eq!(Amount::checked_from_float(0.65), Some(Amount::from_scaled(65)));
        assert_eq!(Amount::checked_from_float(-0.05), Some(Amount::from_scaled(-5)));
    }

    #[test]
    fn checked_from_float_rounds_to_nearest_cent() {
        assert_eq!(Amount::checked_from_float(0.104), Some(Amount::from_scaled(10)));
        assert_eq!(Amount::checked_from_float(0.106), Some(Amount::from_scaled(11)));
    }

    #[test]
    fn checked_from_float_refuses_non_finite_and_huge_values() {
        assert_eq!(Amount::checked_from_float(f64::NAN), None);
        assert_eq!(Amount::checked_from_float(f64::INFINITY), None);
        assert_eq!(Amount::checked_from_float(f64::NEG_INFINITY), None);
        assert_eq!(Amount::checked_from_float(1e300), None);
    }

    #[test]
    fn display_always_has_two_fraction_digits() {
        assert_eq!(Amount::ZERO.to_string(), "0.00");
        assert_eq!(Amount::from_scaled(5).to_string(), "0.05");
        assert_eq!(Amount::from_scaled(15).to_string(), "0.15");
        assert_eq!(Amount::from_scaled(100).to_string(), "1.00");
        assert_eq!(Amount::from_scaled(1234).to_string(), "12.34");
    }

    #[test]
    fn display_formats_negative() {
        assert_eq!(Amount::from_scaled(-25).to_string(), "-0.25");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::default().is_zero());
    }

    #[test]
    fn add_assign() {
        let mut a = Amount::from_scaled(25);
        a += Amount::from_scaled(10);
        assert_eq!(a, Amount::from_scaled(35));
    }

    #[test]
    fn checked_sub_refuses_to_go_negative() {
        let a = Amount::from_scaled(50);
        assert_eq!(a.checked_sub(Amount::from_scaled(50)), Some(Amount::ZERO));
        assert_eq!(a.checked_sub(Amount::from_scaled(51)), None);
    }

    #[test]
    fn ordering() {
        assert!(Amount::from_scaled(50) < Amount::from_scaled(100));
        assert!(Amount::from_scaled(65) >= Amount::from_scaled(65));
    }
}
