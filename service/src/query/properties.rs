//! [`Query`] collection related to the multiple [`Property`].

use common::operations::By;

use crate::{domain::Property, read};
#[cfg(doc)]
use crate::Query;

use super::CatalogQuery;

/// Queries a list of [`Property`] passing a [`read::property::list::Filter`].
pub type List =
    CatalogQuery<By<Vec<Property>, read::property::list::Filter>>;
