//! StationWatch GUI - Main Entry Point
//!
//! Monitoring dashboard for environmental sensor station networks.

use stationwatch_gui::app::application::run_app;
use stationwatch_gui::utils::config_store;

fn main() {
    // The guard flushes the rolling log file on exit
    let _guard = init_tracing();

    tracing::info!("Starting StationWatch...");

    run_app();
}

/// Log to a daily-rolling file under the data directory, or stdout when the
/// data directory is unavailable.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match config_store::app_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "stationwatch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}
