//! [`Property`] definitions.

pub mod review;

use std::{fmt, str::FromStr};

use common::{Money, Percent};
use derive_more::{AsRef, Display, Into};

pub use self::review::{Rating, Review};

/// Vacation rental listed for booking.
#[derive(Clone, Debug)]
pub struct Property {
    /// [`Slug`] identifying this [`Property`].
    pub slug: Slug,

    /// [`Name`] of this [`Property`].
    pub name: Name,

    /// Average [`Rating`] of this [`Property`].
    pub rating: Rating,

    /// [`Address`] of this [`Property`].
    pub address: Address,

    /// Description of this [`Property`].
    pub description: String,

    /// Main image of this [`Property`].
    pub image: ImageUrl,

    /// Additional gallery images of this [`Property`].
    pub images: Vec<ImageUrl>,

    /// [`Amenity`] list of this [`Property`].
    pub amenities: Vec<Amenity>,

    /// Price of a single night in this [`Property`].
    pub price: Money,

    /// [`Review`]s left for this [`Property`].
    pub reviews: Vec<Review>,

    /// Few words about the host of this [`Property`].
    pub host_bio: String,

    /// What this [`Property`] [`Offers`].
    pub offers: Offers,

    /// Advertised discount, if any.
    pub discount: Option<Percent>,
}

impl Property {
    /// Returns all the images of this [`Property`], starting with the main
    /// one.
    pub fn gallery(&self) -> impl Iterator<Item = &ImageUrl> {
        std::iter::once(&self.image).chain(&self.images)
    }

    /// Indicates whether this [`Property`] provides the given [`Amenity`].
    #[must_use]
    pub fn has_amenity(&self, amenity: &Amenity) -> bool {
        self.amenities.contains(amenity)
    }
}

/// URL-friendly identifier of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Into, PartialEq)]
#[as_ref(str)]
pub struct Slug(String);

impl Slug {
    /// Creates a new [`Slug`] if the given `slug` is valid.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        Self::check(&slug).then_some(Self(slug))
    }

    /// Derives a [`Slug`] from the provided [`Name`] by lowercasing it and
    /// joining its words with `-`.
    #[must_use]
    pub fn from_name(name: &Name) -> Self {
        Self(
            name.as_ref()
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-"),
        )
    }

    /// Checks whether the given `slug` is a valid [`Slug`].
    fn check(slug: impl AsRef<str>) -> bool {
        let slug = slug.as_ref();
        !slug.is_empty()
            && slug.len() <= 512
            && !slug.chars().any(char::is_whitespace)
            && slug.to_lowercase() == slug
    }
}

impl FromStr for Slug {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Slug`")
    }
}

/// Name of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Location of a [`Property`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Address {
    /// City the [`Property`] is located in.
    pub city: String,

    /// Country the [`Property`] is located in.
    pub country: String,
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// Amenity or category of a [`Property`], like `Free WiFi`.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Amenity(String);

impl Amenity {
    /// Creates a new [`Amenity`] if the given `label` is valid.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        Self::check(&label).then_some(Self(label))
    }

    /// Checks whether the given `label` is a valid [`Amenity`].
    fn check(label: impl AsRef<str>) -> bool {
        let label = label.as_ref();
        label.trim() == label && !label.is_empty() && label.len() <= 64
    }
}

impl FromStr for Amenity {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Amenity`")
    }
}

/// URL of an image.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// [`ImageUrl`] shown when a [`Property`] has no main image.
    pub const PLACEHOLDER: &'static str = "/placeholder-property.jpg";

    /// Creates a new [`ImageUrl`], falling back to the [placeholder] when
    /// the given `url` is blank.
    ///
    /// [placeholder]: ImageUrl::PLACEHOLDER
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        if url.trim().is_empty() {
            Self(Self::PLACEHOLDER.to_owned())
        } else {
            Self(url)
        }
    }
}

/// Capacity a [`Property`] offers.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Offers {
    /// Number of beds.
    pub bed: u8,

    /// Number of showers.
    pub shower: u8,

    /// Number of guests the [`Property`] accommodates.
    pub occupants: u8,
}
