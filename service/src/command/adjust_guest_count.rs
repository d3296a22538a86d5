//! [`Command`] for adjusting a [`GuestCount`].

use std::convert::Infallible;

use tracing as log;

use crate::{
    domain::booking::{Direction, GuestCount},
    Service,
};

use super::Command;

/// [`Command`] for adjusting a [`GuestCount`] by a single guest.
///
/// Adjusting past the [`GuestCount`] bounds leaves it unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AdjustGuestCount {
    /// Current [`GuestCount`].
    pub guests: GuestCount,

    /// [`Direction`] to adjust the [`GuestCount`] in.
    pub direction: Direction,
}

impl<C> Command<AdjustGuestCount> for Service<C> {
    type Ok = GuestCount;
    type Err = Infallible;

    fn execute(
        &self,
        AdjustGuestCount { guests, direction }: AdjustGuestCount,
    ) -> Result<Self::Ok, Self::Err> {
        if !guests.can_adjust(direction) {
            log::debug!("`GuestCount` stays at {guests} on {direction}");
        }
        Ok(guests.adjust(direction))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::booking::{Direction, GuestCount},
        infra::Static,
        Command as _, Config, Service,
    };

    use super::AdjustGuestCount;

    fn adjust(guests: u8, direction: Direction) -> u8 {
        Service::new(Config::default(), Static::default())
            .execute(AdjustGuestCount {
                guests: GuestCount::new(guests).unwrap(),
                direction,
            })
            .unwrap()
            .get()
    }

    #[test]
    fn adjusts_by_one() {
        assert_eq!(adjust(2, Direction::Increment), 3);
        assert_eq!(adjust(2, Direction::Decrement), 1);
    }

    #[test]
    fn saturates_at_bounds() {
        assert_eq!(adjust(16, Direction::Increment), 16);
        assert_eq!(adjust(1, Direction::Decrement), 1);
        assert_eq!(adjust(15, Direction::Increment), 16);
    }
}
