//! [`Money`]-related definitions.

use std::{fmt, fmt::Write as _, iter, ops, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::Percent;

/// Symbol of the single currency every [`Money`] amount is displayed in.
pub const CURRENCY_SYMBOL: &str = "$";

/// Non-negative amount of money.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] by checking the provided amount is not
    /// negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount >= Decimal::ZERO).then_some(Self(amount))
    }

    /// Creates a new [`Money`] of the provided whole currency units.
    #[must_use]
    pub fn whole(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the decimal amount of this [`Money`].
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] has no fractional part.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        self.0.is_integer()
    }

    /// Rounds this [`Money`] to the nearest whole currency unit, with
    /// midpoints rounded up.
    #[must_use]
    pub fn round(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies this [`Money`] by the provided `factor`, saturating at the
    /// maximum representable amount.
    #[must_use]
    pub fn times(self, factor: u32) -> Self {
        Self(
            self.0
                .checked_mul(Decimal::from(factor))
                .unwrap_or(Decimal::MAX),
        )
    }

    /// Returns the provided [`Percent`] of this [`Money`], without rounding.
    #[must_use]
    pub fn percent(self, percent: Percent) -> Self {
        Self(
            (self.0 / Decimal::ONE_HUNDRED)
                .checked_mul(percent.value())
                .unwrap_or(Decimal::MAX),
        )
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let amount = if rounded.is_integer() {
            rounded.trunc().to_string()
        } else {
            format!("{rounded:.2}")
        };
        let (units, cents) = amount
            .split_once('.')
            .map_or((amount.as_str(), None), |(u, c)| (u, Some(c)));

        f.write_str(CURRENCY_SYMBOL)?;
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                f.write_char(',')?;
            }
            f.write_char(digit)?;
        }
        if let Some(cents) = cents {
            write!(f, ".{cents}")?;
        }
        Ok(())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(CURRENCY_SYMBOL).unwrap_or(s);
        if s.is_empty() {
            return Err("empty amount");
        }

        let amount = Decimal::from_str(&s.replace(',', ""))
            .map_err(|_| "invalid amount")?;
        Self::new(amount).ok_or("negative amount")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::str::FromStr as _;

    use serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Money;

    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(&self.0)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(d)?;
            Self::from_str(&raw).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal_macros::dec;

    use crate::Percent;

    use super::Money;

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("200").unwrap(), Money::whole(200));
        assert_eq!(Money::from_str("$200").unwrap(), Money::whole(200));
        assert_eq!(Money::from_str("$1,250").unwrap(), Money::whole(1250));
        assert_eq!(
            Money::from_str("123.45").unwrap(),
            Money::new(dec!(123.45)).unwrap(),
        );

        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("$").is_err());
        assert!(Money::from_str("-5").is_err());
        assert!(Money::from_str("12 dollars").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::ZERO.to_string(), "$0");
        assert_eq!(Money::whole(50).to_string(), "$50");
        assert_eq!(Money::whole(670).to_string(), "$670");
        assert_eq!(Money::whole(1250).to_string(), "$1,250");
        assert_eq!(Money::whole(1_234_567).to_string(), "$1,234,567");
        assert_eq!(Money::new(dec!(123.00)).unwrap().to_string(), "$123");
        assert_eq!(Money::new(dec!(1234.5)).unwrap().to_string(), "$1,234.50");
    }

    #[test]
    fn rounds_cents_half_up_on_display() {
        let display = |d| Money::new(d).unwrap().to_string();

        assert_eq!(display(dec!(0.999)), "$1");
        assert_eq!(display(dec!(2.345)), "$2.35");
        assert_eq!(display(dec!(2.344)), "$2.34");
        assert_eq!(display(dec!(1234.567)), "$1,234.57");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(Money::new(dec!(14.5)).unwrap().round(), Money::whole(15));
        assert_eq!(Money::new(dec!(14.49)).unwrap().round(), Money::whole(14));
        assert_eq!(Money::whole(20).round(), Money::whole(20));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Money::whole(200).times(3), Money::whole(600));
        assert_eq!(Money::whole(200).times(0), Money::ZERO);
        assert_eq!(
            Money::whole(600) + Money::whole(20) + Money::whole(50),
            Money::whole(670),
        );
        assert_eq!(
            [Money::whole(1), Money::whole(2)].into_iter().sum::<Money>(),
            Money::whole(3),
        );
        assert_eq!(Money::whole(200).percent(Percent::TEN), Money::whole(20));
        assert_eq!(
            Money::whole(149).percent(Percent::TEN),
            Money::new(dec!(14.9)).unwrap(),
        );
    }
}
