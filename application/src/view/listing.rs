//! [`HomeView`] definition.

use std::fmt;

use common::Handler as _;
use itertools::Itertools as _;
use service::{
    domain::{property::Offers, Property},
    query,
    read::property::list::Filter,
};

use crate::Service;

/// Home page listing [`Property`] cards under a filter bar.
#[derive(Clone, Debug)]
pub struct HomeView {
    /// [`Service`] to query [`Property`]s from.
    service: Service,

    /// Selected [`Filter`].
    filter: Filter,

    /// [`Property`]s passing the selected [`Filter`].
    properties: Vec<Property>,
}

impl HomeView {
    /// Text shown when no [`Property`] passes the selected [`Filter`].
    pub const EMPTY: &'static str = "No properties found for this filter.";

    /// Opens a [`HomeView`] listing every [`Property`].
    #[must_use]
    pub fn open(service: Service) -> Self {
        let mut this = Self {
            service,
            filter: Filter::All,
            properties: vec![],
        };
        this.select_filter(Filter::All);
        this
    }

    /// Returns the selected [`Filter`].
    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns the listed [`Property`]s.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Selects the provided [`Filter`] and refreshes the listed
    /// [`Property`]s.
    pub fn select_filter(&mut self, filter: Filter) {
        self.properties = self
            .service
            .execute(query::properties::List::by(filter.clone()))
            .unwrap_or_else(|never| match never {});
        self.filter = filter;
    }
}

impl fmt::Display for HomeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            Filter::presets().format_with(" · ", |filter, f| {
                if filter == self.filter {
                    f(&format_args!("[{filter}]"))
                } else {
                    f(&filter)
                }
            }),
        )?;
        writeln!(f)?;

        if self.properties.is_empty() {
            return writeln!(f, "{}", Self::EMPTY);
        }
        for property in &self.properties {
            writeln!(f, "{}", Card(property))?;
        }
        Ok(())
    }
}

/// Listing card of a single [`Property`].
#[derive(Clone, Copy, Debug)]
pub struct Card<'p>(pub &'p Property);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Property {
            name,
            rating,
            address,
            amenities,
            price,
            offers:
                Offers {
                    bed,
                    shower,
                    occupants,
                },
            discount,
            ..
        } = self.0;

        write!(f, "{name}")?;
        if let Some(discount) = discount {
            write!(f, "  {discount} OFF")?;
        }
        writeln!(f)?;
        writeln!(f, "  {address}")?;
        writeln!(f, "  {}", amenities.iter().join(" · "))?;
        writeln!(f, "  {price}/n  ★ {rating}")?;
        writeln!(
            f,
            "  {} · {} · {}",
            count(*bed, "bed"),
            count(*shower, "shower"),
            count(*occupants, "guest"),
        )
    }
}

/// Formats `n` of a `noun`, pluralizing it with `s` when needed.
fn count(n: u8, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
mod spec {
    use service::{
        domain::property::Amenity, infra::Static, read::property::list::Filter,
        Config,
    };

    use crate::Service;

    use super::HomeView;

    fn open() -> HomeView {
        HomeView::open(Service::new(Config::default(), Static::sample()))
    }

    #[test]
    fn lists_everything_initially() {
        let view = open();

        assert_eq!(view.filter(), &Filter::All);
        assert_eq!(view.properties().len(), Static::sample().len());
        assert!(view.to_string().starts_with("[All] · Top Villa · "));
    }

    #[test]
    fn narrows_by_filter() {
        let mut view = open();
        view.select_filter("Pet Friendly".parse().unwrap());

        assert!(!view.properties().is_empty());
        assert!(view.properties().iter().all(|p| p
            .amenities
            .contains(&Amenity::new("Pet Friendly").unwrap())));
        assert!(view.to_string().contains("· [Pet Friendly] ·"));
    }

    #[test]
    fn renders_empty_state() {
        let mut view = open();
        view.select_filter(Filter::Amenity(Amenity::new("Ski-in").unwrap()));

        assert!(view.properties().is_empty());
        assert!(view
            .to_string()
            .ends_with("\n\nNo properties found for this filter.\n"));
    }

    #[test]
    fn renders_cards() {
        let out = open().to_string();

        assert!(out.contains(
            "Modern Villa with Pool\n  Cape Town, South Africa\n  Top Villa · \
             Private Pool · Free Parking · Free WiFi · Self Checkin\n  \
             $200/n  ★ 4.9\n  4 beds · 3 showers · 8 guests\n",
        ));
        assert!(out.contains("Mountain Chalet\n"));
        assert!(out.contains("  $1,250/n  ★ 4.8\n"));
        assert!(out.contains("Beachfront Bungalow  15% OFF\n"));
        assert!(out.contains("  1 bed · 1 shower · 2 guests\n"));
    }
}
