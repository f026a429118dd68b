use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use actix_web::{App, HttpServer};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::Instant;
use crate::common::structs::logger::Logger;
use crate::config::config::parse_server_config;
use crate::config::enums::config_validation_error::ConfigValidationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::parsed_server_config::ParsedServerConfig;
use crate::http::http::http_service_redirect_routes;
use crate::http::types::RouteConfigurator;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::enums::server_error::ServerError;
use crate::server::enums::server_state::ServerState;
use crate::server::server::{
    monitor_errors,
    run_renewal_scheduler,
    serve_listener,
    watch_cancellation,
    RENEWAL_INTERVAL
};
use crate::server::structs::listener_failure::ListenerFailure;
use crate::server::structs::listener_handle::ListenerHandle;
use crate::server::structs::orchestrator_runtime::OrchestratorRuntime;
use crate::server::structs::renewal_ticker::RenewalTicker;
use crate::server::structs::server_orchestrator::ServerOrchestrator;
use crate::server::traits::certificate_renewal::CertificateRenewal;
use crate::server::traits::system_stop::SystemStop;
use crate::ssl::challenge::start_challenge_server;
use crate::ssl::ssl::provision_certificates;
use crate::ssl::structs::challenge_server_handle::ChallengeServerHandle;
use crate::tls::tls::build_negotiated_options;

impl std::fmt::Debug for ServerOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerOrchestrator")
            .field("state", &*self.state.read())
            .field("address", &self.config.address())
            .field("ssl_enabled", &self.config.ssl_enabled())
            .finish()
    }
}

impl ServerOrchestrator {
    pub const CHALLENGE_STARTUP_WINDOW: Duration = Duration::from_secs(5);

    /// Validates the configuration and TLS options. Nothing is bound yet.
    pub fn configure(
        config: &Configuration,
        routes: RouteConfigurator,
        logger: Logger,
    ) -> Result<Arc<ServerOrchestrator>, ServerError> {
        Self::configure_with_challenge_window(config, routes, logger, Self::CHALLENGE_STARTUP_WINDOW)
    }

    pub fn configure_with_challenge_window(
        config: &Configuration,
        routes: RouteConfigurator,
        logger: Logger,
        challenge_startup_window: Duration,
    ) -> Result<Arc<ServerOrchestrator>, ServerError> {
        let parsed = parse_server_config(&config.server, &config.environment)?;
        let tls_options = if parsed.ssl_enabled() {
            let options = build_negotiated_options(parsed.ssl(), &logger).map_err(ConfigValidationError::from)?;
            Some(Arc::new(options))
        } else {
            None
        };
        let (shutdown_tx, _) = watch::channel(false);
        Ok(Arc::new_cyclic(|self_ref| ServerOrchestrator {
            config: Arc::new(parsed),
            tls_options,
            routes,
            logger,
            state: RwLock::new(ServerState::Configured),
            runtime: tokio::sync::Mutex::new(OrchestratorRuntime::default()),
            failure_tx: Mutex::new(None),
            fatal_failure: Mutex::new(None),
            stop_latch: AtomicBool::new(false),
            shutdown_tx,
            self_ref: self_ref.clone(),
            challenge_startup_window,
        }))
    }

    pub fn state(&self) -> ServerState {
        *self.state.read()
    }

    pub fn config(&self) -> &Arc<ParsedServerConfig> {
        &self.config
    }

    /// Flips to `true` once the shutdown sequence has finished.
    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// The listener failure that caused the last cascading stop, if any.
    pub fn failure(&self) -> Option<ServerError> {
        self.fatal_failure.lock().clone().map(ServerError::Listener)
    }

    pub async fn listener_addresses(&self) -> Vec<(ListenerKind, SocketAddr)> {
        self.runtime.lock().await.listeners.addresses()
    }

    pub async fn challenge_address(&self) -> Option<SocketAddr> {
        self.runtime.lock().await.challenge_server.as_ref().map(|challenge| challenge.address())
    }

    /// Feeds a failure into the fan-in queue. `false` once the queue is closed.
    pub fn report_failure(&self, failure: ListenerFailure) -> bool {
        let sender = self.failure_tx.lock().clone();
        match sender {
            Some(sender) => sender.try_send(failure).is_ok(),
            None => false,
        }
    }

    pub async fn start(&self, cancel: watch::Receiver<bool>) -> Result<(), ServerError> {
        let mut runtime = self.runtime.lock().await;
        {
            let mut state = self.state.write();
            if *state != ServerState::Configured {
                return Err(ServerError::InvalidState { operation: "start", state: *state });
            }
            *state = ServerState::Starting;
        }
        self.logger.info(format!("[SERVER] Starting ({} environment)", self.config.environment()));

        match self.start_listeners(&mut runtime, cancel).await {
            Ok(()) => {
                *self.state.write() = ServerState::Running;
                for (kind, address) in runtime.listeners.addresses() {
                    self.logger.info(format!("[SERVER] {} listener running on {}", kind, address));
                }
                Ok(())
            }
            Err(error) => {
                *self.state.write() = error.failure_state();
                self.logger.error(format!("[SERVER] Startup failed: {}", error));
                Err(error)
            }
        }
    }

    async fn start_listeners(
        &self,
        runtime: &mut OrchestratorRuntime,
        cancel: watch::Receiver<bool>,
    ) -> Result<(), ServerError> {
        let ssl_enabled = self.config.ssl_enabled();
        let auto_ssl = self.config.auto_ssl_enabled();
        let capacity = 1 + usize::from(ssl_enabled) + usize::from(auto_ssl);
        let (failure_tx, failure_rx) = mpsc::channel::<ListenerFailure>(capacity);

        let certificates = if ssl_enabled {
            Some(provision_certificates(&self.config, &self.logger)?)
        } else {
            None
        };

        let sockets = self.bind_sockets(ssl_enabled)?;
        let https_port = sockets.iter()
            .find(|(kind, _, _)| *kind == ListenerKind::Encrypted)
            .map(|(_, _, address)| address.port())
            .unwrap_or_else(|| self.config.ssl_address().port());

        let mut challenge_server = None;
        let mut tls_config = None;
        if let Some(certificates) = &certificates {
            if let Some(manager) = certificates.acme_manager() {
                challenge_server = Some(start_challenge_server(
                    manager.clone(),
                    self.config.challenge_address(),
                    https_port,
                    self.challenge_startup_window,
                    Some(failure_tx.clone()),
                    self.logger.child("gatehouse::acme"),
                ).await?);
            }
            let built = match &self.tls_options {
                Some(options) => options
                    .server_config(certificates.server_certificate(), &self.logger)
                    .map_err(ServerError::from),
                None => Err(ServerError::InvalidState {
                    operation: "build TLS configuration",
                    state: ServerState::Starting,
                }),
            };
            match built {
                Ok(config) => tls_config = Some(config),
                Err(error) => {
                    self.abandon_challenge_server(challenge_server).await;
                    return Err(error);
                }
            }
        }
        runtime.certificates = certificates;

        for (kind, socket, address) in sockets {
            let routes = match kind {
                ListenerKind::Plain if self.config.redirect_to_https() => http_service_redirect_routes(https_port),
                _ => self.routes.clone(),
            };
            let tls = match kind {
                ListenerKind::Encrypted => tls_config.take(),
                _ => None,
            };
            let server = match self.run_listener(kind, address, socket, routes, tls) {
                Ok(server) => server,
                Err(error) => {
                    let deadline = Instant::now() + self.config.shutdown_timeout();
                    let _ = std::mem::take(&mut runtime.listeners).shutdown_all(deadline).await;
                    self.abandon_challenge_server(challenge_server).await;
                    runtime.certificates = None;
                    return Err(error);
                }
            };
            let handle = server.handle();
            let task = tokio::spawn(serve_listener(kind, address, server, failure_tx.clone(), self.logger.clone()));
            runtime.listeners.insert(ListenerHandle { kind, address, handle, task })?;
        }

        let system: Weak<dyn SystemStop> = self.self_ref.clone();
        runtime.monitor_task = Some(tokio::spawn(monitor_errors(
            failure_rx,
            system.clone(),
            cancel.clone(),
            self.logger.child("gatehouse::monitor"),
        )));
        runtime.cancel_task = Some(tokio::spawn(watch_cancellation(
            system,
            cancel.clone(),
            self.shutdown_tx.subscribe(),
            self.logger.clone(),
        )));

        if auto_ssl {
            if let Some(certificates) = &runtime.certificates {
                let renewal: Arc<dyn CertificateRenewal> = Arc::new(certificates.clone());
                let (stop_tx, stop_rx) = oneshot::channel();
                let task = tokio::spawn(run_renewal_scheduler(
                    renewal,
                    RENEWAL_INTERVAL,
                    stop_rx,
                    cancel,
                    self.logger.child("gatehouse::renewal"),
                ));
                runtime.renewal_ticker = Some(RenewalTicker { stop: stop_tx, task });
            }
        }

        runtime.challenge_server = challenge_server;
        *self.failure_tx.lock() = Some(failure_tx);
        Ok(())
    }

    /// Binds every socket before any listener runs, so a conflict leaves nothing behind.
    fn bind_sockets(
        &self,
        ssl_enabled: bool,
    ) -> Result<Vec<(ListenerKind, TcpListener, SocketAddr)>, ServerError> {
        let mut wanted = vec![(ListenerKind::Plain, self.config.address())];
        if ssl_enabled {
            wanted.push((ListenerKind::Encrypted, self.config.ssl_address()));
        }
        let mut sockets = Vec::with_capacity(wanted.len());
        for (kind, address) in wanted {
            let socket = TcpListener::bind(address).map_err(|source| ServerError::Bind { kind, address, source })?;
            let bound = socket.local_addr().map_err(|source| ServerError::Bind { kind, address, source })?;
            sockets.push((kind, socket, bound));
        }
        Ok(sockets)
    }

    fn run_listener(
        &self,
        kind: ListenerKind,
        address: SocketAddr,
        socket: TcpListener,
        routes: RouteConfigurator,
        tls: Option<rustls::ServerConfig>,
    ) -> Result<actix_web::dev::Server, ServerError> {
        let config = &self.config;
        let mut server = HttpServer::new(move || {
            let routes = routes.clone();
            App::new().configure(move |cfg| routes(cfg))
        })
            .keep_alive(config.idle_timeout())
            .client_request_timeout(config.read_timeout())
            .client_disconnect_timeout(config.write_timeout())
            .shutdown_timeout(config.shutdown_timeout().as_secs())
            .disable_signals();
        if config.raw().workers > 0 {
            server = server.workers(config.raw().workers);
        }
        let server = match tls {
            Some(tls) => server.listen_rustls_0_23(socket, tls),
            None => server.listen(socket),
        }.map_err(|source| ServerError::Bind { kind, address, source })?;
        Ok(server.run())
    }

    async fn abandon_challenge_server(&self, challenge_server: Option<ChallengeServerHandle>) {
        if let Some(challenge) = challenge_server {
            let deadline = Instant::now() + self.config.shutdown_timeout();
            if let Err(reason) = challenge.shutdown(deadline).await {
                self.logger.warn(format!("[ACME] {}", reason));
            }
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.stop_latch.load(Ordering::SeqCst)
    }

    /// Ordered shutdown bounded by `timeout`. Safe to call more than once and
    /// before `start`; only the first call does the work.
    pub async fn stop(&self, timeout: Duration) -> Result<(), ServerError> {
        let deadline = Instant::now() + timeout;
        let state = self.state();
        if state == ServerState::Configured || state.is_terminal() {
            self.logger.debug(format!("[SERVER] Stop requested while {}, nothing to do", state));
            return Ok(());
        }
        if self.stop_latch.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
            let mut done = self.shutdown_tx.subscribe();
            let _ = tokio::time::timeout_at(deadline, done.wait_for(|stopped| *stopped)).await;
            return Ok(());
        }

        let mut runtime = self.runtime.lock().await;
        let state = self.state();
        if state != ServerState::Running {
            self.logger.debug(format!("[SERVER] Stop requested while {}, nothing to do", state));
            self.shutdown_tx.send_replace(true);
            return Ok(());
        }
        *self.state.write() = ServerState::Stopping;
        self.logger.info("[SERVER] Stopping");

        let mut last_error = None;

        if let Some(ticker) = runtime.renewal_ticker.take() {
            if let Err(reason) = ticker.shutdown(deadline).await {
                self.logger.warn(format!("[RENEWAL] {}", reason));
            }
        }

        if let Some(challenge) = runtime.challenge_server.take() {
            if let Err(reason) = challenge.shutdown(deadline).await {
                self.logger.error(format!("[ACME] {}", reason));
                last_error = Some(ServerError::Shutdown { listener: ListenerKind::Challenge, reason });
            }
        }

        let listeners = std::mem::take(&mut runtime.listeners);
        for (kind, result) in listeners.shutdown_all(deadline).await {
            match result {
                Ok(()) => self.logger.debug(format!("[SERVER] {} listener stopped", kind)),
                Err(reason) => {
                    self.logger.error(format!("[SERVER] {}", reason));
                    last_error = Some(ServerError::Shutdown { listener: kind, reason });
                }
            }
        }

        self.failure_tx.lock().take();
        self.shutdown_tx.send_replace(true);
        runtime.monitor_task.take();
        runtime.cancel_task.take();
        runtime.certificates = None;

        *self.state.write() = ServerState::Stopped;
        match &last_error {
            Some(error) => self.logger.warn(format!("[SERVER] Stopped with errors, last: {}", error)),
            None => self.logger.info("[SERVER] Stopped"),
        }
        match last_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SystemStop for ServerOrchestrator {
    async fn stop_system(&self, cause: Option<ListenerFailure>) -> Result<(), ServerError> {
        if let Some(cause) = cause {
            self.fatal_failure.lock().get_or_insert(cause);
        }
        self.stop(self.config.shutdown_timeout()).await
    }

    fn is_shutting_down(&self) -> bool {
        ServerOrchestrator::is_shutting_down(self)
    }
}
