//! Text views of the listing pages.
//!
//! Every view owns its UI state and renders itself via [`fmt::Display`].
//!
//! [`fmt::Display`]: std::fmt::Display

pub mod booking;
pub mod listing;
pub mod property;
pub mod review;

pub use self::{
    booking::BookingWidget, listing::HomeView, property::PropertyDetailView,
    review::ReviewSection,
};
