//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::warn;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{CONFIG_FILE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::features::dashboard::controller::DashboardController;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store;

actions!(stationwatch, [Quit]);

/// Run the StationWatch GUI application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        // Load persisted configuration, falling back to defaults
        let config = match config_store::load_config::<AppConfig>(CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                warn!(%e, "Failed to load config, using defaults");
                AppConfig::default()
            }
        };

        // Write the effective config back so a first run leaves an editable file
        if let Err(e) = config_store::save_config(CONFIG_FILE, &config) {
            warn!(%e, "Failed to persist config");
        }

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // Initialize service hub
        let service_hub = ServiceHub::new(config, event_tx);
        cx.set_global(service_hub);

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("StationWatch")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        })
        .expect("Failed to open main window");

        // Kick off the first load with the default filters
        let controller = DashboardController::new(cx.global::<AppEntities>().clone());
        controller.refresh(cx);

        cx.activate(true);
    });
}
