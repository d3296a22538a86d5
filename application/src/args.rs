//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::{Date, Money};
use service::{
    domain::{booking::GuestCount, property},
    read::property::list::Filter,
};

use crate::view::property::Tab;

/// Vacation rental listing.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Page to render.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Page to render.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Renders the home page with the property cards.
    List {
        /// Label of the filter to narrow the properties by.
        #[arg(short, long, default_value = Filter::ALL)]
        filter: Filter,
    },

    /// Renders the detail page of a property.
    Show {
        /// Slug of the property, like `modern-villa-with-pool`.
        slug: property::Slug,

        /// Tab to open.
        #[arg(short, long, default_value = "description")]
        tab: Tab,

        /// Check-in date in `YYYY-MM-DD` format.
        #[arg(long, default_value = "")]
        check_in: String,

        /// Check-out date in `YYYY-MM-DD` format.
        #[arg(long, default_value = "")]
        check_out: String,

        /// Number of guests.
        #[arg(short, long, default_value = "1")]
        guests: GuestCount,

        /// Renders the guest selector opened.
        #[arg(long)]
        select_guests: bool,

        /// Date to consider as today, instead of the current one.
        #[arg(long)]
        today: Option<Date>,
    },

    /// Renders the price breakdown of a stay.
    Quote {
        /// Nightly rate to quote.
        #[arg(short, long, required_unless_present = "slug")]
        rate: Option<Money>,

        /// Slug of the property to quote at its nightly price.
        #[arg(short, long, conflicts_with = "rate")]
        slug: Option<property::Slug>,

        /// Check-in date in `YYYY-MM-DD` format.
        #[arg(long, default_value = "")]
        check_in: String,

        /// Check-out date in `YYYY-MM-DD` format.
        #[arg(long, default_value = "")]
        check_out: String,
    },
}
