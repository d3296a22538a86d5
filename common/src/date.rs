//! Calendar date utilities.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use time::macros::format_description;

/// Calendar date without a time component.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date {
    /// Inner representation of the date.
    inner: time::Date,
}

impl Date {
    /// Returns the current [`Date`] in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
        }
    }

    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(|inner| Self { inner })
    }

    /// Parses a [`Date`] from the provided [ISO 8601] `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [ISO 8601] calendar date.
    ///
    /// [ISO 8601]: https://en.wikipedia.org/wiki/ISO_8601
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(
            input.trim(),
            format_description!("[year]-[month]-[day]"),
        )
        .map(|inner| Self { inner })
        .map_err(ParseError)
    }

    /// Parses a [`Date`] out of a raw form input value.
    ///
    /// Empty and malformed inputs are treated as an absent date.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        Self::from_iso8601(input).ok()
    }

    /// Returns this [`Date`] as an [ISO 8601] `YYYY-MM-DD` string.
    ///
    /// [ISO 8601]: https://en.wikipedia.org/wiki/ISO_8601
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.inner.year(),
            u8::from(self.inner.month()),
            self.inner.day(),
        )
    }

    /// Returns a short `Jun 1` label of this [`Date`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_short_label(&self) -> String {
        self.inner
            .format(format_description!(
                "[month repr:short] [day padding:none]"
            ))
            .unwrap_or_else(|e| panic!("cannot format `Date` label: {e}"))
    }

    /// Returns the number of whole days between this [`Date`] and the `other`
    /// one, regardless of their order.
    #[must_use]
    pub fn days_between(&self, other: &Self) -> u32 {
        let days = (other.inner - self.inner).whole_days().unsigned_abs();
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

impl From<time::Date> for Date {
    fn from(inner: time::Date) -> Self {
        Self { inner }
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.inner
    }
}

/// Error of parsing [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid calendar date: {_0}")]
pub struct ParseError(time::error::Parse);

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Date;

    impl Serialize for Date {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_iso8601())
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(d)?;
            Self::from_iso8601(&raw).map_err(D::Error::custom)
        }
    }
}
