//! [`EstimateBooking`] definition.

use std::convert::Infallible;

use common::Money;
use tracing as log;

use crate::{
    domain::booking::{DateRange, PriceQuote},
    Query, Service,
};

/// [`Query`] estimating the [`PriceQuote`] of a stay for the provided
/// nightly rate.
///
/// An incomplete [`DateRange`] is estimated as a single night.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EstimateBooking {
    /// Price of a single night.
    pub nightly_rate: Money,

    /// Selected [`DateRange`] of the stay.
    pub dates: DateRange,
}

impl<C> Query<EstimateBooking> for Service<C> {
    type Ok = PriceQuote;
    type Err = Infallible;

    fn execute(
        &self,
        EstimateBooking {
            nightly_rate,
            dates,
        }: EstimateBooking,
    ) -> Result<Self::Ok, Self::Err> {
        let nights = dates.nights();
        if dates.is_complete() && !dates.is_valid() {
            log::debug!("estimating inverted {dates:?} as {nights}");
        }
        Ok(PriceQuote::new(nightly_rate, nights, &self.config().fees))
    }
}
