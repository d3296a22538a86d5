//! [`ReviewSection`] definition.

use std::fmt;

use service::domain::property::{review::Summary, Rating, Review};

/// Glyph of a single whole star.
const STAR: char = '★';

/// Section listing the [`Review`]s of a [`Property`].
///
/// [`Property`]: service::domain::Property
#[derive(Clone, Copy, Debug)]
pub struct ReviewSection<'r> {
    /// [`Review`]s to list.
    reviews: &'r [Review],
}

impl<'r> ReviewSection<'r> {
    /// Text shown when there are no [`Review`]s to list.
    pub const EMPTY: &'static str = "No reviews available yet.";

    /// Creates a new [`ReviewSection`] listing the provided [`Review`]s.
    #[must_use]
    pub const fn new(reviews: &'r [Review]) -> Self {
        Self { reviews }
    }

    /// Returns the [`Summary`] of the listed [`Review`]s.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(self.reviews)
    }
}

impl fmt::Display for ReviewSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reviews.is_empty() {
            return f.write_str(Self::EMPTY);
        }

        let summary = self.summary();
        writeln!(f, "{STAR} {}", summary.label())?;
        for share in &summary.breakdown {
            writeln!(f, "  {} {STAR}  {}", share.stars, share.share)?;
        }
        for review in self.reviews {
            writeln!(f)?;
            write!(f, "{}", review.author)?;
            if let Some(date) = &review.date {
                write!(f, " · {date}")?;
            }
            writeln!(f)?;
            writeln!(f, "{}", Stars(review.rating))?;
            writeln!(f, "{}", review.comment)?;
        }
        Ok(())
    }
}

/// [`Rating`] rendered as whole star glyphs followed by its value, like
/// `★★★★ (4.0)`.
#[derive(Clone, Copy, Debug)]
pub struct Stars(pub Rating);

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0.stars() {
            write!(f, "{STAR}")?;
        }
        write!(f, " ({})", self.0)
    }
}
