//! Booking definitions.
//!
//! Every value here is recomputed from the current inputs of a booking form:
//! nothing has an identity or a lifecycle of its own.

pub mod guests;
pub mod quote;
pub mod stay;

pub use self::{
    guests::{Direction, GuestCount},
    quote::{FeeSchedule, PriceQuote},
    stay::{DateRange, Nights},
};
