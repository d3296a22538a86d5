//! [`Command`] definition.

pub mod adjust_guest_count;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::adjust_guest_count::AdjustGuestCount;
