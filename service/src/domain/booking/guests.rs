//! [`GuestCount`] definitions.

use std::{fmt, str::FromStr};

use common::define_kind;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of guests of a stay, always within `1..=16`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct GuestCount(u8);

impl GuestCount {
    /// Minimum [`GuestCount`] of a stay.
    pub const MIN: Self = Self(1);

    /// Maximum [`GuestCount`] of a stay.
    pub const MAX: Self = Self(16);

    /// Creates a new [`GuestCount`] if the provided `count` is within bounds.
    #[must_use]
    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&count)
            .then_some(Self(count))
    }

    /// Creates a new [`GuestCount`] clamping the provided `count` into
    /// bounds.
    #[must_use]
    pub fn clamped(count: u32) -> Self {
        let count = count.clamp(u32::from(Self::MIN.0), u32::from(Self::MAX.0));
        Self(u8::try_from(count).unwrap_or(Self::MAX.0))
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Adjusts this [`GuestCount`] in the provided [`Direction`], saturating
    /// at the bounds.
    #[must_use]
    pub fn adjust(self, direction: Direction) -> Self {
        match direction {
            Direction::Increment => {
                Self(self.0.saturating_add(1).min(Self::MAX.0))
            }
            Direction::Decrement => {
                Self(self.0.saturating_sub(1).max(Self::MIN.0))
            }
        }
    }

    /// Indicates whether adjusting this [`GuestCount`] in the provided
    /// [`Direction`] changes it.
    #[must_use]
    pub fn can_adjust(self, direction: Direction) -> bool {
        self.adjust(direction) != self
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.0 == 1 { "guest" } else { "guests" };
        write!(f, "{} {unit}", self.0)
    }
}

impl FromStr for GuestCount {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self::clamped)
            .map_err(|_| "invalid `GuestCount`")
    }
}

define_kind! {
    #[doc = "Direction of a [`GuestCount`] adjustment."]
    enum Direction {
        #[doc = "One more guest."]
        Increment = 1,

        #[doc = "One guest less."]
        Decrement = 2,
    }
}

#[cfg(test)]
mod spec {
    use super::{Direction, GuestCount};

    fn guests(n: u8) -> GuestCount {
        GuestCount::new(n).unwrap()
    }

    #[test]
    fn checks_bounds() {
        assert!(GuestCount::new(0).is_none());
        assert!(GuestCount::new(17).is_none());
        assert_eq!(GuestCount::new(1), Some(GuestCount::MIN));
        assert_eq!(GuestCount::new(16), Some(GuestCount::MAX));

        assert_eq!(GuestCount::clamped(0), GuestCount::MIN);
        assert_eq!(GuestCount::clamped(400), GuestCount::MAX);
        assert_eq!(GuestCount::clamped(5).get(), 5);
    }

    #[test]
    fn adjusts_by_one() {
        assert_eq!(guests(3).adjust(Direction::Increment), guests(4));
        assert_eq!(guests(3).adjust(Direction::Decrement), guests(2));
    }

    #[test]
    fn saturates_at_max() {
        let mut count = GuestCount::MAX;
        for _ in 0..5 {
            count = count.adjust(Direction::Increment);
            assert_eq!(count, GuestCount::MAX);
        }
        assert!(!count.can_adjust(Direction::Increment));
        assert!(count.can_adjust(Direction::Decrement));
    }

    #[test]
    fn saturates_at_min() {
        let mut count = GuestCount::MIN;
        for _ in 0..5 {
            count = count.adjust(Direction::Decrement);
            assert_eq!(count, GuestCount::MIN);
        }
        assert!(!count.can_adjust(Direction::Decrement));
        assert!(count.can_adjust(Direction::Increment));
    }

    #[test]
    fn parses_and_clamps() {
        assert_eq!("4".parse::<GuestCount>().unwrap(), guests(4));
        assert_eq!("40".parse::<GuestCount>().unwrap(), GuestCount::MAX);
        assert!("four".parse::<GuestCount>().is_err());
        assert_eq!(
            "increment".parse::<Direction>().unwrap(),
            Direction::Increment,
        );
    }

    #[test]
    fn label() {
        assert_eq!(GuestCount::MIN.to_string(), "1 guest");
        assert_eq!(guests(3).to_string(), "3 guests");
    }
}
