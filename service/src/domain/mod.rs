//! Domain definitions.

pub mod booking;
pub mod property;

pub use self::property::Property;
