use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Weak};
use std::time::Duration;
use parking_lot::{Mutex, RwLock};
use tokio::sync::{mpsc, watch};
use crate::common::structs::logger::Logger;
use crate::config::structs::parsed_server_config::ParsedServerConfig;
use crate::http::types::RouteConfigurator;
use crate::server::enums::server_state::ServerState;
use crate::server::structs::listener_failure::ListenerFailure;
use crate::server::structs::orchestrator_runtime::OrchestratorRuntime;
use crate::tls::structs::negotiated_tls_options::NegotiatedTlsOptions;

pub struct ServerOrchestrator {
    pub(crate) config: Arc<ParsedServerConfig>,
    /// Present iff SSL is enabled.
    pub(crate) tls_options: Option<Arc<NegotiatedTlsOptions>>,
    pub(crate) routes: RouteConfigurator,
    pub(crate) logger: Logger,
    pub(crate) state: RwLock<ServerState>,
    /// Only `start` and `stop` take this lock.
    pub(crate) runtime: tokio::sync::Mutex<OrchestratorRuntime>,
    pub(crate) failure_tx: Mutex<Option<mpsc::Sender<ListenerFailure>>>,
    pub(crate) fatal_failure: Mutex<Option<ListenerFailure>>,
    /// One-shot close guard for the fan-in queue and the shutdown signal.
    pub(crate) stop_latch: AtomicBool,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) self_ref: Weak<ServerOrchestrator>,
    pub(crate) challenge_startup_window: Duration,
}
