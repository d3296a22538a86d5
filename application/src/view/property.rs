//! [`PropertyDetailView`] definition.

use std::fmt;

use common::{define_kind, Date, Handler as _};
use derive_more::{Display, Error};
use service::{
    domain::{
        property::{self, review::Summary},
        Property,
    },
    query,
};
use tracerr::Traced;

use crate::{
    view::{booking::BookingWidget, review::ReviewSection},
    Service,
};

define_kind! {
    #[doc = "Tab of a [`PropertyDetailView`]."]
    enum Tab {
        #[doc = "Description of the [`Property`]."]
        Description = 1,

        #[doc = "Amenities of the [`Property`]."]
        Amenities = 2,

        #[doc = "Reviews of the [`Property`]."]
        Reviews = 3,

        #[doc = "Information about the host of the [`Property`]."]
        Host = 4,
    }
}

impl Tab {
    /// Returns the capitalized label of this [`Tab`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amenities => "Amenities",
            Self::Reviews => "Reviews",
            Self::Host => "Host",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::Description
    }
}

/// Detail page of a single [`Property`].
#[derive(Clone, Debug)]
pub struct PropertyDetailView {
    /// Displayed [`Property`].
    property: Property,

    /// Active [`Tab`].
    tab: Tab,

    /// [`BookingWidget`] of the displayed [`Property`].
    booking: BookingWidget,
}

impl PropertyDetailView {
    /// Opens a [`PropertyDetailView`] of the [`Property`] with the provided
    /// [`property::Slug`].
    ///
    /// # Errors
    ///
    /// Errors if there is no [`Property`] with the provided
    /// [`property::Slug`].
    pub fn open(
        service: &Service,
        slug: property::Slug,
        today: Date,
    ) -> Result<Self, Traced<OpenError>> {
        let property = service
            .execute(query::property::BySlug::by(slug.clone()))
            .unwrap_or_else(|never| match never {})
            .ok_or(OpenError::PropertyNotExists(slug))
            .map_err(tracerr::wrap!())?;

        let booking = BookingWidget::new(service.clone(), property.price, today);
        Ok(Self {
            property,
            tab: Tab::default(),
            booking,
        })
    }

    /// Returns the displayed [`Property`].
    #[must_use]
    pub const fn property(&self) -> &Property {
        &self.property
    }

    /// Returns the active [`Tab`].
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// Switches to the provided [`Tab`].
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Returns the [`BookingWidget`] of this [`PropertyDetailView`].
    #[must_use]
    pub const fn booking(&self) -> &BookingWidget {
        &self.booking
    }

    /// Returns the mutable [`BookingWidget`] of this [`PropertyDetailView`].
    pub fn booking_mut(&mut self) -> &mut BookingWidget {
        &mut self.booking
    }
}

impl Display for PropertyDetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.property;

        writeln!(f, "{}", p.name)?;
        writeln!(
            f,
            "★ {} · {} · {}",
            p.rating,
            Summary::of(&p.reviews).count_label(),
            p.address,
        )?;
        for (i, image) in p.gallery().enumerate() {
            writeln!(f, "  [{}] {image}", i + 1)?;
        }
        writeln!(f)?;

        for (i, tab) in Tab::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            if *tab == self.tab {
                write!(f, "[{}]", tab.label())?;
            } else {
                f.write_str(tab.label())?;
            }
        }
        writeln!(f)?;
        writeln!(f)?;

        match self.tab {
            Tab::Description => writeln!(f, "{}", p.description)?,
            Tab::Amenities => {
                for amenity in &p.amenities {
                    writeln!(f, "  • {amenity}")?;
                }
            }
            Tab::Reviews => writeln!(f, "{}", ReviewSection::new(&p.reviews))?,
            Tab::Host => {
                writeln!(f, "About the host")?;
                writeln!(f, "{}", p.host_bio)?;
            }
        }
        writeln!(f)?;

        write!(f, "{}", self.booking)
    }
}

/// Error of opening a [`PropertyDetailView`].
#[derive(Debug, Display, Error)]
pub enum OpenError {
    /// [`Property`] doesn't exist.
    #[display("`Property(slug: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Slug),
}

#[cfg(test)]
mod spec {
    use common::{Date, Money};
    use service::{domain::property::Slug, infra::Static, Config};

    use crate::{AsError as _, Service};

    use super::{PropertyDetailView, Tab};

    fn open(slug: &str) -> PropertyDetailView {
        PropertyDetailView::open(
            &Service::new(Config::default(), Static::sample()),
            Slug::new(slug).unwrap(),
            "2024-05-01".parse::<Date>().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn opens_on_description_tab() {
        let view = open("modern-villa-with-pool");

        assert_eq!(view.tab(), Tab::Description);
        assert_eq!(view.property().price, Money::whole(200));
        assert!(view.to_string().contains("[Description] | Amenities"));
    }

    #[test]
    fn fails_on_unknown_slug() {
        let err = PropertyDetailView::open(
            &Service::new(Config::default(), Static::sample()),
            Slug::new("castle-in-the-sky").unwrap(),
            "2024-05-01".parse::<Date>().unwrap(),
        )
        .unwrap_err();

        assert_eq!(err.into_error().code, "PROPERTY_NOT_FOUND");
    }

    #[test]
    fn parses_and_labels_tabs() {
        assert_eq!("reviews".parse::<Tab>().unwrap(), Tab::Reviews);
        assert_eq!(Tab::Host.to_string(), "host");
        assert_eq!(Tab::Amenities.label(), "Amenities");
        assert_eq!(
            Tab::ALL,
            &[Tab::Description, Tab::Amenities, Tab::Reviews, Tab::Host],
        );
    }

    #[test]
    fn switches_tabs() {
        let mut view = open("modern-villa-with-pool");

        view.select_tab(Tab::Amenities);
        let out = view.to_string();
        assert!(out.contains("Description | [Amenities]"));
        assert!(out.contains("  • Private Pool\n"));

        view.select_tab(Tab::Reviews);
        assert!(view.to_string().contains("★ 4.5 · 2 reviews"));

        view.select_tab(Tab::Host);
        assert!(view.to_string().contains("About the host\nSuperhost"));
    }

    #[test]
    fn renders_review_count_in_header() {
        let single = open("beachfront-bungalow").to_string();
        assert!(single.contains("\n★ 4.7 · 1 review · Mombasa, Kenya\n"));

        let many = open("modern-villa-with-pool").to_string();
        assert!(
            many.contains("\n★ 4.9 · 2 reviews · Cape Town, South Africa\n")
        );
    }

    #[test]
    fn renders_empty_reviews() {
        let mut view = open("city-center-loft");
        view.select_tab(Tab::Reviews);

        assert!(view.to_string().contains("No reviews available yet."));
    }

    #[test]
    fn lists_gallery_starting_with_main_image() {
        let out = open("modern-villa-with-pool").to_string();

        assert!(out.contains(
            "  [1] /images/villa1.jpg\n  [2] /images/villa2.jpg\n  \
             [3] /images/villa3.jpg\n",
        ));
    }

    #[test]
    fn quotes_booking_of_property() {
        let mut view = open("modern-villa-with-pool");
        view.booking_mut().set_check_in("2024-06-01");
        view.booking_mut().set_check_out("2024-06-04");

        assert_eq!(view.booking().quote().total, Money::whole(670));
        assert!(view.to_string().ends_with("Total  $670\n"));
    }
}
