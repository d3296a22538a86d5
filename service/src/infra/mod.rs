//! Infrastructure layer.

pub mod catalog;

pub use self::catalog::{Catalog, Static};
