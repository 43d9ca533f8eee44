//! ServiceHub - Fetch Dispatch and Runtime Bridge
//!
//! GPUI runs its own executor, but reqwest wants tokio. The hub owns a
//! dedicated tokio runtime thread fed by a command channel; every fetch runs
//! there and reports back to the UI over the event channel.
//!
//! Top-level refreshes are tagged with a monotonically increasing sequence
//! number so the state layer can drop responses from a superseded refresh.
//! Drill-down fetches carry their selection instead; the event pump drops
//! them if the selection has moved on.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use gpui::Global;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::config::AppConfig;
use crate::domain::station::Status;
use crate::eventing::app_event::{AppEvent, FetchKind};
use crate::services::gateway::AggregationGateway;
use crate::state::filter_state::FilterState;

/// Commands that can be sent to the fetch loop
#[derive(Debug, Clone)]
pub enum FetchCommand {
    /// Refetch summary, map, and vendor table concurrently
    Refresh { filter: FilterState, seq: u64 },
    /// Fetch the district breakdown for an activated vendor badge
    LoadDistricts {
        filter: FilterState,
        vendor: String,
        branch: Status,
    },
    /// Fetch block-fault detail for a selected district
    LoadFaults {
        filter: FilterState,
        vendor: String,
        district: String,
    },
}

/// ServiceHub manages background fetches
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to the fetch loop
    command_tx: flume::Sender<FetchCommand>,
    /// Current configuration
    config: Arc<RwLock<AppConfig>>,
    /// Refresh sequence counter
    refresh_seq: Arc<AtomicU64>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its fetch loop
    pub fn new(config: AppConfig, event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<FetchCommand>();
        let config = Arc::new(RwLock::new(config));

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
            config: config.clone(),
            refresh_seq: Arc::new(AtomicU64::new(0)),
        };

        hub.start_fetch_loop(command_rx, config, event_tx);
        hub
    }

    /// Start the fetch loop on its own runtime thread
    fn start_fetch_loop(
        &self,
        command_rx: flume::Receiver<FetchCommand>,
        config: Arc<RwLock<AppConfig>>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("Failed to create Tokio runtime");

            rt.block_on(async move {
                while let Ok(cmd) = command_rx.recv_async().await {
                    let gateway =
                        AggregationGateway::new(config.read().server.base_url.clone());
                    let tx = event_tx.clone();

                    match cmd {
                        FetchCommand::Refresh { filter, seq } => {
                            debug!(seq, "Dispatching top-level refresh");
                            dispatch_refresh(gateway, filter, seq, tx);
                        }
                        FetchCommand::LoadDistricts { filter, vendor, branch } => {
                            tokio::spawn(async move {
                                match gateway.district_summary(&filter, &vendor, branch).await {
                                    Ok(rows) => {
                                        let _ = tx.send(AppEvent::DistrictsLoaded {
                                            vendor,
                                            branch,
                                            rows,
                                        });
                                    }
                                    Err(e) => report_failure(&tx, FetchKind::Districts, 0, e),
                                }
                            });
                        }
                        FetchCommand::LoadFaults { filter, vendor, district } => {
                            tokio::spawn(async move {
                                match gateway.block_faults(&filter, &vendor, &district).await {
                                    Ok(rows) => {
                                        let _ = tx.send(AppEvent::FaultsLoaded {
                                            vendor,
                                            district,
                                            rows,
                                        });
                                    }
                                    Err(e) => report_failure(&tx, FetchKind::Faults, 0, e),
                                }
                            });
                        }
                    }
                }
            });
        });
    }

    /// Allocate the next refresh sequence number
    pub fn next_refresh_seq(&self) -> u64 {
        self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Send a command to the fetch loop
    pub fn send(&self, cmd: FetchCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Dispatch a tagged top-level refresh
    pub fn refresh(&self, filter: FilterState, seq: u64) {
        self.send(FetchCommand::Refresh { filter, seq });
    }

    /// Dispatch a district breakdown fetch
    pub fn load_districts(&self, filter: FilterState, vendor: String, branch: Status) {
        self.send(FetchCommand::LoadDistricts { filter, vendor, branch });
    }

    /// Dispatch a block-fault fetch
    pub fn load_faults(&self, filter: FilterState, vendor: String, district: String) {
        self.send(FetchCommand::LoadFaults { filter, vendor, district });
    }

    /// Get current config
    pub fn config(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Spawn the three top-level fetches concurrently.
///
/// Each independently reports success or failure; there is no ordering
/// between them, the per-kind sequence guard in the state layer handles
/// network reordering across refreshes.
fn dispatch_refresh(
    gateway: AggregationGateway,
    filter: FilterState,
    seq: u64,
    tx: flume::Sender<AppEvent>,
) {
    {
        let gateway = gateway.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match gateway.summary(&filter).await {
                Ok(summary) => {
                    let _ = tx.send(AppEvent::SummaryLoaded { seq, summary });
                }
                Err(e) => report_failure(&tx, FetchKind::Summary, seq, e),
            }
        });
    }

    {
        let gateway = gateway.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match gateway.map_points(&filter).await {
                Ok(stations) => {
                    let _ = tx.send(AppEvent::MapLoaded { seq, stations });
                }
                Err(e) => report_failure(&tx, FetchKind::Map, seq, e),
            }
        });
    }

    tokio::spawn(async move {
        match gateway.vendor_summary(&filter).await {
            Ok(rows) => {
                let _ = tx.send(AppEvent::VendorsLoaded { seq, rows });
            }
            Err(e) => report_failure(&tx, FetchKind::Vendors, seq, e),
        }
    });
}

fn report_failure(
    tx: &flume::Sender<AppEvent>,
    kind: FetchKind,
    seq: u64,
    error: crate::error::Error,
) {
    warn!(kind = kind.label(), %error, "Fetch failed");
    let _ = tx.send(AppEvent::FetchFailed {
        kind,
        seq,
        message: error.to_string(),
    });
}
