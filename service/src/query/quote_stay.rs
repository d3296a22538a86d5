//! [`QuoteStay`] definition.

use std::convert::Infallible;

use common::operations::{By, Select};
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{DateRange, PriceQuote},
        property, Property,
    },
    infra::Catalog,
    query::EstimateBooking,
    Query, Service,
};

/// [`Query`] quoting a stay in a [`Property`] at its nightly price.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuoteStay {
    /// [`property::Slug`] of the [`Property`] to stay in.
    pub slug: property::Slug,

    /// Selected [`DateRange`] of the stay.
    pub dates: DateRange,
}

impl<C> Query<QuoteStay> for Service<C>
where
    C: Catalog<
        Select<By<Option<Property>, property::Slug>>,
        Ok = Option<Property>,
        Err = Infallible,
    >,
{
    type Ok = PriceQuote;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        QuoteStay { slug, dates }: QuoteStay,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let property = self
            .catalog()
            .execute(Select(By::<Option<Property>, _>::new(slug.clone())))
            .map_err(tracerr::from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(slug))
            .map_err(tracerr::wrap!())?;

        let quote = self
            .execute(EstimateBooking {
                nightly_rate: property.price,
                dates,
            })
            .map_err(tracerr::from_and_wrap!(=> E))?;

        log::debug!(
            "quoted {} for `Property(slug: {})`: total {}",
            quote.nights,
            property.slug,
            quote.total,
        );
        Ok(quote)
    }
}

/// Error of [`QuoteStay`] [`Query`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Property`] doesn't exist.
    #[display("`Property(slug: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Slug),
}

impl From<Infallible> for ExecutionError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
