#![allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. A verbosity of zero (and no
/// debug flag) defers to the `RUST_LOG` environment variable.
pub fn log_init(verbose: i32, debug: bool) {
    let mut log_level = match verbose {
        0 => None,
        1 => Some(LevelFilter::WARN),
        2 => Some(LevelFilter::INFO),
        3 => Some(LevelFilter::DEBUG),
        4 => Some(LevelFilter::TRACE),
        _ => None,
    };
    if debug { log_level = Some(LevelFilter::DEBUG); }

    let ret = if let Some(log_level) = log_level {
        SubscriberBuilder::default().with_max_level(log_level).try_init()
    } else {
        SubscriberBuilder::default().with_env_filter(EnvFilter::from_default_env()).try_init()
    };
    if let Err(err) = ret {
        debug!("tracing subscriber already installed - {}", err);
    }
}
