//! [`Config`]-related definitions.

use common::{Money, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::domain::booking::FeeSchedule;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Booking configuration.
    pub booking: Booking,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Booking configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Booking {
    /// Cleaning fee charged once per stay, in whole currency units.
    #[default(50)]
    pub cleaning_fee: u32,

    /// Service fee charged once per stay, in percents of the nightly rate.
    #[default(10)]
    pub service_fee_percent: u8,
}

impl TryFrom<Booking> for service::Config {
    type Error = InvalidBooking;

    fn try_from(value: Booking) -> Result<Self, Self::Error> {
        let Booking {
            cleaning_fee,
            service_fee_percent,
        } = value;

        let service_fee_rate = Percent::new(Decimal::from(service_fee_percent))
            .ok_or(InvalidBooking::ServiceFeePercent(service_fee_percent))?;

        Ok(Self {
            fees: FeeSchedule {
                service_fee_rate,
                cleaning_fee: Money::whole(cleaning_fee.into()),
            },
        })
    }
}

/// Error of converting [`Booking`] configuration into a [`service::Config`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum InvalidBooking {
    /// Service fee percent is greater than `100`.
    #[display("`booking.service_fee_percent` is out of range: {_0}")]
    ServiceFeePercent(#[error(not(source))] u8),
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
