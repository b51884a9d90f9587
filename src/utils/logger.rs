/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Sets up the global logger
///
/// The level is read from the `LOGLEVEL` environment variable (`DEBUG`,
/// `INFO`, `WARN`, `ERROR`, `TRACE`) and defaults to `INFO`. Only the first
/// call has an effect; later calls, or a subscriber installed by someone
/// else, leave the existing one in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from(env::var("LOGLEVEL").ok().as_deref());
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

fn log_level_from(value: Option<&str>) -> Level {
    match value.map(str::to_uppercase).as_deref() {
        Some("DEBUG") => Level::DEBUG,
        Some("ERROR") => Level::ERROR,
        Some("WARN") => Level::WARN,
        Some("TRACE") => Level::TRACE,
        _ => Level::INFO,
    }
}
