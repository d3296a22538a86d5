//! [`BookingWidget`] definition.

use std::fmt;

use common::{Date, Handler as _, Money};
use service::{
    command::AdjustGuestCount,
    domain::booking::{DateRange, Direction, GuestCount, PriceQuote},
    query::EstimateBooking,
};
use tracing as log;

use crate::Service;

/// Booking form of a [`Property`] with its live [`PriceQuote`].
///
/// Dates entered here always form either an incomplete or a valid
/// [`DateRange`]: a check-out is only kept while it comes after the check-in.
///
/// [`Property`]: service::domain::Property
#[derive(Clone, Debug)]
pub struct BookingWidget {
    /// [`Service`] estimating the [`PriceQuote`]s.
    service: Service,

    /// Price of a single night.
    nightly_rate: Money,

    /// Current [`Date`], the earliest allowed check-in.
    today: Date,

    /// Selected [`DateRange`].
    dates: DateRange,

    /// Selected [`GuestCount`].
    guests: GuestCount,

    /// Indicator whether the guest selector dropdown is open.
    is_guest_selector_open: bool,
}

impl BookingWidget {
    /// Notice shown on the stubbed reservation action.
    pub const RESERVE_NOTICE: &'static str =
        "Booking functionality would be implemented here";

    /// Creates a new empty [`BookingWidget`] for the provided `nightly_rate`.
    #[must_use]
    pub fn new(service: Service, nightly_rate: Money, today: Date) -> Self {
        Self {
            service,
            nightly_rate,
            today,
            dates: DateRange::default(),
            guests: GuestCount::default(),
            is_guest_selector_open: false,
        }
    }

    /// Returns the selected [`DateRange`].
    #[must_use]
    pub const fn dates(&self) -> DateRange {
        self.dates
    }

    /// Returns the earliest [`Date`] allowed for the check-in.
    #[must_use]
    pub const fn check_in_min(&self) -> Date {
        self.today
    }

    /// Returns the earliest [`Date`] allowed for the check-out.
    ///
    /// [`None`] means the check-out input is disabled until a check-in is
    /// selected.
    #[must_use]
    pub const fn check_out_min(&self) -> Option<Date> {
        self.dates.check_in
    }

    /// Sets the check-in out of the raw form `input`.
    ///
    /// Blank, malformed and past inputs unset the check-in, and the
    /// check-out along with it. A check-out that is no longer after the new
    /// check-in is cleared.
    pub fn set_check_in(&mut self, input: &str) {
        let check_in =
            Date::from_input(input).filter(|d| *d >= self.check_in_min());
        if check_in.is_none() && !input.trim().is_empty() {
            log::debug!("ignoring check-in input: `{input}`");
        }

        self.dates.check_in = check_in;
        self.dates.check_out = self
            .dates
            .check_out
            .filter(|out| check_in.is_some_and(|d| d < *out));
    }

    /// Sets the check-out out of the raw form `input`.
    ///
    /// The input is ignored while no check-in is selected. Blank, malformed
    /// inputs and dates not after the check-in unset the check-out.
    pub fn set_check_out(&mut self, input: &str) {
        let Some(min) = self.check_out_min() else {
            log::debug!("check-out is disabled until a check-in is selected");
            return;
        };

        let check_out = Date::from_input(input).filter(|d| *d > min);
        if check_out.is_none() && !input.trim().is_empty() {
            log::debug!("ignoring check-out input: `{input}`");
        }
        self.dates.check_out = check_out;
    }

    /// Returns the selected [`GuestCount`].
    #[must_use]
    pub const fn guests(&self) -> GuestCount {
        self.guests
    }

    /// Indicates whether the guest selector dropdown is open.
    #[must_use]
    pub const fn is_guest_selector_open(&self) -> bool {
        self.is_guest_selector_open
    }

    /// Opens the guest selector dropdown if closed, or closes it otherwise.
    pub fn toggle_guest_selector(&mut self) {
        self.is_guest_selector_open = !self.is_guest_selector_open;
    }

    /// Closes the guest selector dropdown, like on an outside click or the
    /// "Done" button.
    pub fn dismiss_guest_selector(&mut self) {
        self.is_guest_selector_open = false;
    }

    /// Indicates whether the guest selector button of the provided
    /// [`Direction`] is enabled.
    #[must_use]
    pub fn can_adjust_guests(&self, direction: Direction) -> bool {
        self.guests.can_adjust(direction)
    }

    /// Adjusts the selected [`GuestCount`] by a single guest.
    pub fn adjust_guests(&mut self, direction: Direction) {
        self.guests = self
            .service
            .execute(AdjustGuestCount {
                guests: self.guests,
                direction,
            })
            .unwrap_or_else(|never| match never {});
    }

    /// Sets the [`GuestCount`] directly.
    pub fn set_guests(&mut self, guests: GuestCount) {
        self.guests = guests;
    }

    /// Estimates the [`PriceQuote`] of the current selection.
    #[must_use]
    pub fn quote(&self) -> PriceQuote {
        self.service
            .execute(EstimateBooking {
                nightly_rate: self.nightly_rate,
                dates: self.dates,
            })
            .unwrap_or_else(|never| match never {})
    }

    /// Performs the stubbed reservation, returning the notice to show.
    #[must_use]
    pub fn reserve(&self) -> &'static str {
        log::info!(
            "reservation requested: {} for {}",
            self.quote().nights,
            self.guests,
        );
        Self::RESERVE_NOTICE
    }
}

impl fmt::Display for BookingWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = |d: Option<Date>| {
            d.map_or_else(|| "Add date".to_owned(), |d| d.to_short_label())
        };

        writeln!(f, "{} night", self.nightly_rate)?;
        writeln!(f, "CHECK-IN  {}", date(self.dates.check_in))?;
        if self.check_out_min().is_some() {
            writeln!(f, "CHECKOUT  {}", date(self.dates.check_out))?;
        } else {
            writeln!(f, "CHECKOUT  Select check-in first")?;
        }
        writeln!(f, "GUESTS  {}", self.guests)?;
        if self.is_guest_selector_open {
            let button = |direction: Direction, glyph: char| {
                if self.can_adjust_guests(direction) {
                    format!("[{glyph}]")
                } else {
                    format!(" {glyph} ")
                }
            };
            writeln!(
                f,
                "  Adults (Ages 13+)  {} {} {}",
                button(Direction::Decrement, '-'),
                self.guests.get(),
                button(Direction::Increment, '+'),
            )?;
            writeln!(f, "  Done")?;
        }
        writeln!(f, "[Reserve]")?;
        writeln!(f, "You won't be charged yet")?;
        writeln!(f)?;
        write!(f, "{}", QuoteLines(&self.quote()))
    }
}

/// Price breakdown lines of a [`PriceQuote`].
#[derive(Clone, Copy, Debug)]
pub struct QuoteLines<'q>(pub &'q PriceQuote);

impl fmt::Display for QuoteLines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PriceQuote {
            nights,
            nightly_rate,
            subtotal,
            service_fee_rate: _,
            service_fee,
            cleaning_fee,
            total,
        } = self.0;

        writeln!(f, "{nightly_rate} x {nights}  {subtotal}")?;
        writeln!(f, "Cleaning fee  {cleaning_fee}")?;
        writeln!(f, "Service fee  {service_fee}")?;
        writeln!(f, "Total  {total}")
    }
}

#[cfg(test)]
mod spec {
    use common::{Date, Money};
    use service::{
        domain::booking::{Direction, GuestCount},
        infra::Static,
        Config,
    };

    use crate::Service;

    use super::BookingWidget;

    fn widget(rate: u64) -> BookingWidget {
        BookingWidget::new(
            Service::new(Config::default(), Static::default()),
            Money::whole(rate),
            "2024-05-01".parse::<Date>().unwrap(),
        )
    }

    fn date(s: &str) -> Option<Date> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn quotes_single_night_initially() {
        let quote = widget(200).quote();

        assert_eq!(quote.nights.get(), 1);
        assert_eq!(quote.total, Money::whole(270));
    }

    #[test]
    fn recomputes_quote_on_date_change() {
        let mut w = widget(200);
        w.set_check_in("2024-06-01");
        w.set_check_out("2024-06-04");

        let quote = w.quote();
        assert_eq!(quote.nights.get(), 3);
        assert_eq!(quote.subtotal, Money::whole(600));
        assert_eq!(quote.total, Money::whole(670));
    }

    #[test]
    fn disables_check_out_until_check_in() {
        let mut w = widget(200);
        assert_eq!(w.check_out_min(), None);

        w.set_check_out("2024-06-04");
        assert_eq!(w.dates().check_out, None);

        w.set_check_in("2024-06-01");
        assert_eq!(w.check_out_min(), date("2024-06-01"));
        w.set_check_out("2024-06-04");
        assert_eq!(w.dates().check_out, date("2024-06-04"));
    }

    #[test]
    fn rejects_check_out_not_after_check_in() {
        let mut w = widget(200);
        w.set_check_in("2024-06-04");

        w.set_check_out("2024-06-04");
        assert_eq!(w.dates().check_out, None);
        w.set_check_out("2024-06-01");
        assert_eq!(w.dates().check_out, None);
    }

    #[test]
    fn clears_check_out_on_later_check_in() {
        let mut w = widget(200);
        w.set_check_in("2024-06-01");
        w.set_check_out("2024-06-04");

        w.set_check_in("2024-06-02");
        assert_eq!(w.dates().check_out, date("2024-06-04"));

        w.set_check_in("2024-06-04");
        assert_eq!(w.dates().check_in, date("2024-06-04"));
        assert_eq!(w.dates().check_out, None);
    }

    #[test]
    fn rejects_past_and_malformed_check_in() {
        let mut w = widget(200);
        assert_eq!(w.check_in_min(), "2024-05-01".parse().unwrap());

        w.set_check_in("2024-04-30");
        assert_eq!(w.dates().check_in, None);
        w.set_check_in("tomorrow");
        assert_eq!(w.dates().check_in, None);
        w.set_check_in("2024-05-01");
        assert_eq!(w.dates().check_in, date("2024-05-01"));
    }

    #[test]
    fn unsets_check_out_with_check_in() {
        let mut w = widget(200);
        w.set_check_in("2024-06-01");
        w.set_check_out("2024-06-04");

        w.set_check_in("");
        assert!(!w.dates().is_complete());
        assert_eq!(w.dates().check_out, None);
        assert_eq!(w.quote().nights.get(), 1);
    }

    #[test]
    fn toggles_and_dismisses_guest_selector() {
        let mut w = widget(200);
        assert!(!w.is_guest_selector_open());

        w.toggle_guest_selector();
        assert!(w.is_guest_selector_open());
        w.toggle_guest_selector();
        assert!(!w.is_guest_selector_open());

        w.toggle_guest_selector();
        w.dismiss_guest_selector();
        assert!(!w.is_guest_selector_open());
        w.dismiss_guest_selector();
        assert!(!w.is_guest_selector_open());
    }

    #[test]
    fn adjusts_guests_within_bounds() {
        let mut w = widget(200);
        assert!(!w.can_adjust_guests(Direction::Decrement));

        w.adjust_guests(Direction::Decrement);
        assert_eq!(w.guests(), GuestCount::MIN);

        w.adjust_guests(Direction::Increment);
        assert_eq!(w.guests().get(), 2);

        w.set_guests(GuestCount::MAX);
        assert!(!w.can_adjust_guests(Direction::Increment));
        w.adjust_guests(Direction::Increment);
        assert_eq!(w.guests(), GuestCount::MAX);
    }

    #[test]
    fn renders_price_breakdown() {
        let mut w = widget(200);
        w.set_check_in("2024-06-01");
        w.set_check_out("2024-06-04");
        let out = w.to_string();

        assert!(out.starts_with("$200 night\n"));
        assert!(out.contains("CHECK-IN  Jun 1\n"));
        assert!(out.contains("CHECKOUT  Jun 4\n"));
        assert!(out.contains("GUESTS  1 guest\n"));
        assert!(out.contains("$200 x 3 nights  $600\n"));
        assert!(out.contains("Cleaning fee  $50\n"));
        assert!(out.contains("Service fee  $20\n"));
        assert!(out.ends_with("Total  $670\n"));
    }

    #[test]
    fn renders_guest_selector_when_open() {
        let mut w = widget(200);
        assert!(!w.to_string().contains("Adults"));
        assert!(w.to_string().contains("CHECKOUT  Select check-in first\n"));

        w.toggle_guest_selector();
        assert!(w.to_string().contains("  Adults (Ages 13+)   -  1 [+]\n"));

        w.set_guests(GuestCount::MAX);
        assert!(w.to_string().contains("  Adults (Ages 13+)  [-] 16  + \n"));
    }

    #[test]
    fn stubs_reservation() {
        assert_eq!(widget(200).reserve(), BookingWidget::RESERVE_NOTICE);
    }
}
