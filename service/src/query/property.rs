//! [`Query`] collection related to a single [`Property`].

use common::operations::By;

use crate::domain::{property, Property};
#[cfg(doc)]
use crate::Query;

use super::CatalogQuery;

/// Queries a [`Property`] by its [`property::Slug`].
pub type BySlug = CatalogQuery<By<Option<Property>, property::Slug>>;
