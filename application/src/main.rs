use std::{fmt, io, process::ExitCode, sync::OnceLock};

use application::{
    args::Command,
    view::{booking::QuoteLines, HomeView, PropertyDetailView},
    Args, AsError, Config, Service,
};
use common::{Date, Handler as _};
use service::{
    domain::booking::DateRange,
    infra::Static,
    query::{EstimateBooking, QuoteStay},
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt as _},
    registry::LookupSpan,
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    // Stdout carries the rendered page only.
    tracing_subscriber::registry()
        .with(log_layer(io::stderr))
        .init();

    match start() {
        Ok(page) => {
            print!("{page}");
            ExitCode::SUCCESS
        }
        Err(code) => ExitCode::from(code),
    }
}

fn start() -> Result<String, u8> {
    let Args { config, command } = Args::parse().map_err(|e| {
        // Help and version requests are reported as errors too.
        _ = e.print();
        u8::try_from(e.exit_code()).unwrap_or(2)
    })?;

    let Config { booking, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
        2
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service_config = service::Config::try_from(booking).map_err(|e| {
        log::error!("invalid `Config`: {e}");
        e.into_error().exit_code
    })?;
    let service = Service::new(service_config, Static::sample());

    log::debug!("rendering `{command:?}`");
    match command {
        Command::List { filter } => {
            let mut view = HomeView::open(service);
            view.select_filter(filter);
            Ok(view.to_string())
        }
        Command::Show {
            slug,
            tab,
            check_in,
            check_out,
            guests,
            select_guests,
            today,
        } => {
            let today = today.unwrap_or_else(Date::today);
            let mut view = PropertyDetailView::open(&service, slug, today)
                .map_err(fail)?;
            view.select_tab(tab);

            let booking = view.booking_mut();
            booking.set_check_in(&check_in);
            booking.set_check_out(&check_out);
            booking.set_guests(guests);
            if select_guests {
                booking.toggle_guest_selector();
            }
            Ok(view.to_string())
        }
        Command::Quote {
            rate,
            slug,
            check_in,
            check_out,
        } => {
            let dates = DateRange::from_input(&check_in, &check_out);
            let quote = if let Some(slug) = slug {
                service.execute(QuoteStay { slug, dates }).map_err(fail)?
            } else {
                service
                    .execute(EstimateBooking {
                        nightly_rate: rate.unwrap_or_default(),
                        dates,
                    })
                    .unwrap_or_else(|never| match never {})
            };
            Ok(QuoteLines(&quote).to_string())
        }
    }
}

/// Creates a compact log [`Layer`] writing into the provided `writer` the
/// records allowed by the configured [`LOG_LEVEL`].
fn log_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: log::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(true)
        .with_writer(writer)
        .with_filter(filter_fn(|meta| {
            meta.is_span()
                || LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                    >= *meta.level()
        }))
}

/// Reports the provided error, returning the exit code to terminate with.
fn fail(err: impl AsError + fmt::Display) -> u8 {
    let err = err.into_error();
    log::error!("{err}");
    err.exit_code
}
