//! [`PriceQuote`] definitions.

use common::{Money, Percent};
#[cfg(feature = "serde")]
use serde::Serialize;
use smart_default::SmartDefault;

use super::Nights;

/// Fees charged on top of the nightly rate of a stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
pub struct FeeSchedule {
    /// Rate of the service fee, taken once per stay from the nightly rate.
    #[default(Percent::TEN)]
    pub service_fee_rate: Percent,

    /// Cleaning fee, charged once per stay.
    #[default(Money::whole(50))]
    pub cleaning_fee: Money,
}

impl FeeSchedule {
    /// Calculates the service fee for a stay at the provided `nightly_rate`,
    /// rounded to a whole currency unit.
    ///
    /// The fee doesn't depend on the number of nights.
    #[must_use]
    pub fn service_fee(&self, nightly_rate: Money) -> Money {
        nightly_rate.percent(self.service_fee_rate).round()
    }
}

/// Price breakdown of a stay, shown before any commitment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
pub struct PriceQuote {
    /// [`Nights`] of the stay.
    pub nights: Nights,

    /// Price of a single night.
    pub nightly_rate: Money,

    /// Price of all the [`Nights`], without fees.
    pub subtotal: Money,

    /// Rate the `service_fee` is taken at.
    pub service_fee_rate: Percent,

    /// Service fee of the stay.
    pub service_fee: Money,

    /// Cleaning fee of the stay.
    pub cleaning_fee: Money,

    /// Grand total of the stay.
    pub total: Money,
}

impl PriceQuote {
    /// Quotes a stay of the provided [`Nights`] at the provided
    /// `nightly_rate`, charging the provided [`FeeSchedule`].
    #[must_use]
    pub fn new(nightly_rate: Money, nights: Nights, fees: &FeeSchedule) -> Self {
        Self::from_parts(
            nightly_rate,
            nights,
            fees.service_fee_rate,
            fees.service_fee(nightly_rate),
            fees.cleaning_fee,
        )
    }

    /// Assembles a [`PriceQuote`] out of already calculated fees.
    ///
    /// Only the subtotal and the total are derived here, and neither of them
    /// is rounded.
    #[must_use]
    pub fn from_parts(
        nightly_rate: Money,
        nights: Nights,
        service_fee_rate: Percent,
        service_fee: Money,
        cleaning_fee: Money,
    ) -> Self {
        let subtotal = nightly_rate.times(nights.get());
        Self {
            nights,
            nightly_rate,
            subtotal,
            service_fee_rate,
            service_fee,
            cleaning_fee,
            total: subtotal + service_fee + cleaning_fee,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{Money, Percent};
    use rust_decimal_macros::dec;

    use super::{FeeSchedule, Nights, PriceQuote};

    fn money(units: u64) -> Money {
        Money::whole(units)
    }

    #[test]
    fn default_fees() {
        let fees = FeeSchedule::default();

        assert_eq!(fees.service_fee_rate, Percent::TEN);
        assert_eq!(fees.cleaning_fee, money(50));
    }

    #[test]
    fn service_fee_is_flat_per_stay() {
        let fees = FeeSchedule::default();

        assert_eq!(fees.service_fee(money(200)), money(20));
        for nights in [1, 3, 7, 30] {
            let quote = PriceQuote::new(money(200), Nights::new(nights), &fees);
            assert_eq!(quote.service_fee, money(20), "{nights} nights");
        }
    }

    #[test]
    fn service_fee_is_rounded_half_up() {
        let fees = FeeSchedule::default();

        assert_eq!(fees.service_fee(money(145)), money(15));
        assert_eq!(fees.service_fee(money(144)), money(14));
        assert_eq!(
            fees.service_fee(Money::new(dec!(99.99)).unwrap()),
            money(10),
        );
        assert_eq!(fees.service_fee(Money::ZERO), Money::ZERO);
    }

    #[test]
    fn total_sums_subtotal_and_fees() {
        let fees = FeeSchedule::default();

        for rate in [0, 1, 85, 200, 1250] {
            for nights in [1, 2, 14] {
                let quote =
                    PriceQuote::new(money(rate), Nights::new(nights), &fees);
                assert_eq!(quote.subtotal, money(rate * u64::from(nights)));
                assert_eq!(
                    quote.total,
                    quote.subtotal + quote.service_fee + fees.cleaning_fee,
                );
            }
        }
    }

    #[test]
    fn quotes_three_nights_at_200() {
        let quote =
            PriceQuote::new(money(200), Nights::new(3), &FeeSchedule::default());

        assert_eq!(quote.nights.get(), 3);
        assert_eq!(quote.nightly_rate, money(200));
        assert_eq!(quote.subtotal, money(600));
        assert_eq!(quote.service_fee, money(20));
        assert_eq!(quote.cleaning_fee, money(50));
        assert_eq!(quote.total, money(670));
    }

    #[test]
    fn leaves_fractional_subtotal_unrounded() {
        let fees = FeeSchedule {
            service_fee_rate: Percent::TEN,
            cleaning_fee: Money::ZERO,
        };
        let quote =
            PriceQuote::new(Money::new(dec!(99.5)).unwrap(), Nights::new(2), &fees);

        assert_eq!(quote.subtotal, Money::new(dec!(199)).unwrap());
        assert_eq!(quote.service_fee, money(10));
        assert_eq!(quote.total, Money::new(dec!(209)).unwrap());
    }
}
