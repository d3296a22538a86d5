//! [`Catalog`]-related implementations.

mod sample;

use std::{convert::Infallible, sync::Arc};

use common::operations::{By, Select};

use crate::{
    domain::{property, Property},
    read::property::list,
};

/// Catalog operation.
pub use common::Handler as Catalog;

/// In-memory [`Catalog`] of [`Property`]s bundled with the application.
#[derive(Clone, Debug, Default)]
pub struct Static {
    /// [`Property`]s of this [`Static`] [`Catalog`], in display order.
    properties: Arc<[Property]>,
}

impl Static {
    /// Creates a new [`Static`] [`Catalog`] out of the provided
    /// [`Property`]s.
    #[must_use]
    pub fn new(properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }

    /// Creates a new [`Static`] [`Catalog`] filled with the sample
    /// [`Property`]s.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample::properties())
    }

    /// Returns the number of [`Property`]s in this [`Static`] [`Catalog`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Indicates whether this [`Static`] [`Catalog`] has no [`Property`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Catalog<Select<By<Option<Property>, property::Slug>>> for Static {
    type Ok = Option<Property>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Slug>>,
    ) -> Result<Self::Ok, Self::Err> {
        let slug = by.into_inner();
        Ok(self.properties.iter().find(|p| p.slug == slug).cloned())
    }
}

impl Catalog<Select<By<Vec<Property>, list::Filter>>> for Static {
    type Ok = Vec<Property>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Property>, list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .properties
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
