//! [`Review`] definitions.

use std::{fmt, str::FromStr};

use common::Percent;
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

/// Guest review of a [`Property`].
///
/// [`Property`]: super::Property
#[derive(Clone, Debug)]
pub struct Review {
    /// Name of the reviewer.
    pub author: super::Name,

    /// Avatar of the reviewer.
    pub avatar: super::ImageUrl,

    /// [`Rating`] given by the reviewer.
    pub rating: Rating,

    /// Text of this [`Review`].
    pub comment: String,

    /// Human-readable date label of this [`Review`], like `March 2024`.
    pub date: Option<String>,
}

/// Rating in the `0..=5` range.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rating(Decimal);

impl Rating {
    /// Highest possible [`Rating`].
    pub const MAX: Self = Self(Decimal::from_parts(5, 0, 0, false, 0));

    /// Creates a new [`Rating`] if the provided value is in the `0..=5`
    /// range.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO && val <= Self::MAX.0).then_some(Self(val))
    }

    /// Returns the decimal value of this [`Rating`].
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the number of whole stars of this [`Rating`].
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.0.floor().to_u8().unwrap_or_default()
    }

    /// Computes the average of the provided [`Rating`]s.
    ///
    /// [`None`] is returned if there are no [`Rating`]s.
    pub fn average(ratings: impl IntoIterator<Item = Self>) -> Option<Self> {
        let (sum, count) = ratings
            .into_iter()
            .fold((Decimal::ZERO, 0_u32), |(sum, n), r| (sum + r.0, n + 1));
        (count > 0).then(|| Self(sum / Decimal::from(count)))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = self
            .0
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{tenths:.1}")
    }
}

impl FromStr for Rating {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Rating`")
    }
}

/// Aggregated view over a list of [`Review`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    /// Average [`Rating`] of the [`Review`]s, if there are any.
    pub average: Option<Rating>,

    /// Total number of [`Review`]s.
    pub count: usize,

    /// Share of [`Review`]s per whole star, from `5` down to `1`.
    pub breakdown: [StarShare; 5],
}

impl Summary {
    /// Summarizes the provided [`Review`]s.
    #[must_use]
    pub fn of(reviews: &[Review]) -> Self {
        let count = reviews.len();
        let breakdown = [5, 4, 3, 2, 1].map(|stars| {
            let matching = reviews
                .iter()
                .filter(|r| r.rating.stars().max(1) == stars)
                .count();
            StarShare {
                stars,
                share: share_of(matching, count),
            }
        });
        Self {
            average: Rating::average(reviews.iter().map(|r| r.rating)),
            count,
            breakdown,
        }
    }

    /// Returns a `4.5 · 2 reviews` header label of this [`Summary`].
    #[must_use]
    pub fn label(&self) -> String {
        match self.average {
            Some(avg) => format!("{avg} · {}", self.count_label()),
            None => self.count_label(),
        }
    }

    /// Returns a `1 review` or `2 reviews` label of this [`Summary`].
    #[must_use]
    pub fn count_label(&self) -> String {
        let noun = if self.count == 1 { "review" } else { "reviews" };
        format!("{} {noun}", self.count)
    }
}

/// Share of [`Review`]s having the same number of whole stars.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StarShare {
    /// Number of whole stars.
    pub stars: u8,

    /// [`Percent`] of [`Review`]s with these stars, rounded to whole
    /// percents.
    pub share: Percent,
}

/// Computes `part` of `total` as whole [`Percent`]s, rounding half up.
fn share_of(part: usize, total: usize) -> Percent {
    if total == 0 {
        return Percent::default();
    }
    let ratio =
        Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total);
    Percent::new(
        ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
    )
    .unwrap_or_default()
}

#[cfg(test)]
mod spec {
    use common::Percent;
    use rust_decimal_macros::dec;

    use crate::domain::property::{ImageUrl, Name};

    use super::{Rating, Review, Summary};

    fn review(rating: &str) -> Review {
        Review {
            author: Name::new("Alice Johnson").unwrap(),
            avatar: ImageUrl::new("/avatars/alice.jpg"),
            rating: rating.parse().unwrap(),
            comment: "Amazing stay!".into(),
            date: None,
        }
    }

    #[test]
    fn checks_bounds() {
        assert!(Rating::new(dec!(0)).is_some());
        assert!(Rating::new(dec!(5)).is_some());
        assert!(Rating::new(dec!(5.1)).is_none());
        assert!(Rating::new(dec!(-1)).is_none());
        assert_eq!(Rating::MAX, Rating::new(dec!(5)).unwrap());
    }

    #[test]
    fn counts_whole_stars() {
        assert_eq!("4.9".parse::<Rating>().unwrap().stars(), 4);
        assert_eq!("5".parse::<Rating>().unwrap().stars(), 5);
        assert_eq!("0.5".parse::<Rating>().unwrap().stars(), 0);
    }

    #[test]
    fn displays_single_decimal() {
        assert_eq!("4".parse::<Rating>().unwrap().to_string(), "4.0");
        assert_eq!("4.5".parse::<Rating>().unwrap().to_string(), "4.5");
    }

    #[test]
    fn summarizes_reviews() {
        let summary = Summary::of(&[review("5"), review("4")]);

        assert_eq!(summary.average, Some(Rating::new(dec!(4.5)).unwrap()));
        assert_eq!(summary.count, 2);
        assert_eq!(summary.label(), "4.5 · 2 reviews");

        let shares = summary.breakdown.map(|s| (s.stars, s.share));
        let half = Percent::new(dec!(50)).unwrap();
        let none = Percent::default();
        assert_eq!(
            shares,
            [(5, half), (4, half), (3, none), (2, none), (1, none)],
        );
    }

    #[test]
    fn rounds_breakdown_to_whole_percents() {
        let summary = Summary::of(&[review("5"), review("5"), review("3")]);

        assert_eq!(summary.breakdown[0].share.to_string(), "67%");
        assert_eq!(summary.breakdown[2].share.to_string(), "33%");
    }

    #[test]
    fn rounds_displayed_rating_half_up() {
        assert_eq!(Rating::new(dec!(4.75)).unwrap().to_string(), "4.8");
        assert_eq!(Rating::new(dec!(4.74)).unwrap().to_string(), "4.7");
        assert_eq!(
            Summary::of(&[review("5"), review("4.5")]).label(),
            "4.8 · 2 reviews",
        );
    }

    #[test]
    fn summarizes_nothing() {
        let summary = Summary::of(&[]);

        assert_eq!(summary.average, None);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.label(), "0 reviews");
        assert!(summary
            .breakdown
            .iter()
            .all(|s| s.share == Percent::default()));
    }

    #[test]
    fn labels_single_review() {
        let summary = Summary::of(&[review("4")]);

        assert_eq!(summary.label(), "4.0 · 1 review");
        assert_eq!(summary.count_label(), "1 review");
        assert_eq!(Summary::of(&[]).count_label(), "0 reviews");
    }
}
