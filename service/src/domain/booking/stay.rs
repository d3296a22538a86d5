//! [`DateRange`] and [`Nights`] definitions.

use std::fmt;

use common::Date;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing as log;

/// Check-in and check-out [`Date`]s of a stay.
///
/// A [`DateRange`] is only [valid] once both dates are selected and the
/// check-out comes strictly after the check-in. Incomplete or inverted ranges
/// are still representable, because they are what a half-filled form yields.
///
/// [valid]: DateRange::is_valid
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(rename_all = "camelCase")
)]
pub struct DateRange {
    /// [`Date`] of the check-in, if selected.
    pub check_in: Option<Date>,

    /// [`Date`] of the check-out, if selected.
    pub check_out: Option<Date>,
}

impl DateRange {
    /// Creates a new [`DateRange`] out of the provided dates.
    #[must_use]
    pub const fn new(check_in: Option<Date>, check_out: Option<Date>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Creates a new [`DateRange`] out of raw form input values.
    ///
    /// Empty or malformed values are treated as not selected.
    #[must_use]
    pub fn from_input(check_in: &str, check_out: &str) -> Self {
        Self {
            check_in: parse_input("check_in", check_in),
            check_out: parse_input("check_out", check_out),
        }
    }

    /// Indicates whether both dates of this [`DateRange`] are selected.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Indicates whether this [`DateRange`] is complete and its check-out
    /// comes strictly after its check-in.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(
            (self.check_in, self.check_out),
            (Some(check_in), Some(check_out)) if check_out > check_in,
        )
    }

    /// Returns the number of [`Nights`] this [`DateRange`] spans.
    ///
    /// A single night is assumed while any of the dates is missing. The
    /// dates order is not checked: an inverted range counts the same nights
    /// as the straight one.
    #[must_use]
    pub fn nights(&self) -> Nights {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                Nights::new(check_in.days_between(&check_out))
            }
            (None, _) | (_, None) => Nights::ONE,
        }
    }
}

/// Parses a single date out of a raw form input value.
fn parse_input(field: &str, input: &str) -> Option<Date> {
    let date = Date::from_input(input);
    if date.is_none() && !input.trim().is_empty() {
        log::debug!("ignoring malformed `{field}` date input: `{input}`");
    }
    date
}

/// Number of nights of a stay.
///
/// Never less than one.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Nights(u32);

impl Nights {
    /// A single night.
    pub const ONE: Self = Self(1);

    /// Creates new [`Nights`] out of the provided count, flooring it at one.
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    /// Returns the count of these [`Nights`].
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Nights {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Nights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.0 == 1 { "night" } else { "nights" };
        write!(f, "{} {unit}", self.0)
    }
}
