//! [`Property`]-related read definitions.

#[cfg(doc)]
use crate::domain::Property;

pub mod list {
    //! [`Property`] list definitions.

    use std::{fmt, str::FromStr};

    use crate::domain::{property::Amenity, Property};

    /// Labels of the [`Filter`]s offered for narrowing a [`Property`] list,
    /// besides [`Filter::All`].
    pub const PRESETS: &[&str] = &[
        "Top Villa",
        "Self Checkin",
        "Beachfront",
        "Mountain View",
        "Free Parking",
        "Pet Friendly",
        "City Center",
        "Private Pool",
        "Fireplace",
        "Free WiFi",
        "Historical",
        "Safari",
        "Riverfront",
        "Countryside",
    ];

    /// Filter of a [`Property`] list.
    #[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
    pub enum Filter {
        /// Every [`Property`] passes.
        #[default]
        All,

        /// Only a [`Property`] having the [`Amenity`] passes.
        Amenity(Amenity),
    }

    impl Filter {
        /// Label of the [`Filter::All`].
        pub const ALL: &'static str = "All";

        /// Returns all the preset [`Filter`]s, starting with the
        /// [`Filter::All`].
        pub fn presets() -> impl Iterator<Item = Self> {
            let presets = PRESETS
                .iter()
                .filter_map(|&l| Amenity::new(l).map(Self::Amenity));
            std::iter::once(Self::All).chain(presets)
        }

        /// Indicates whether the provided [`Property`] passes this
        /// [`Filter`].
        #[must_use]
        pub fn matches(&self, property: &Property) -> bool {
            match self {
                Self::All => true,
                Self::Amenity(amenity) => property.has_amenity(amenity),
            }
        }

        /// Returns the label of this [`Filter`].
        #[must_use]
        pub fn label(&self) -> &str {
            match self {
                Self::All => Self::ALL,
                Self::Amenity(a) => a.as_ref(),
            }
        }
    }

    impl fmt::Display for Filter {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }

    impl FromStr for Filter {
        type Err = &'static str;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let s = s.trim();
            if s.eq_ignore_ascii_case(Self::ALL) {
                return Ok(Self::All);
            }
            Amenity::new(s).map(Self::Amenity).ok_or("invalid `Filter`")
        }
    }
}
