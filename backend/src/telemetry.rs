use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::mode::Mode;

const DEFAULT_FILTER: &str = "backend=debug,mongoflow_service=debug,tower_http=debug";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// CloudWatch timestamps every line and does not render colours, so the
/// event-driven format drops both.
pub fn init(mode: Mode) {
    let fmt_layer = match mode {
        Mode::EventDriven => fmt::layer().with_ansi(false).without_time().boxed(),
        Mode::StandaloneServer => fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt_layer)
        .init();
}
