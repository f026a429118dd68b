use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use actix_web::dev::Server;
use actix_web::{App, HttpServer};
use tokio::sync::{mpsc, oneshot};
use crate::common::structs::logger::Logger;
use crate::http::http::http_service_challenge_routes;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::structs::listener_failure::ListenerFailure;
use crate::ssl::enums::provisioning_error::ProvisioningError;
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;
use crate::ssl::structs::challenge_server_handle::ChallengeServerHandle;

/// Binds the HTTP-01 listener and waits `startup_window` for an early failure.
///
/// A failure inside the window is returned as `ChallengeStartup`. Failures after
/// the window go to `failures` when a queue is given, otherwise they are logged.
pub async fn start_challenge_server(
    manager: Arc<AcmeCertManager>,
    address: SocketAddr,
    https_port: u16,
    startup_window: Duration,
    failures: Option<mpsc::Sender<ListenerFailure>>,
    logger: Logger,
) -> Result<ChallengeServerHandle, ProvisioningError>
{
    logger.info(format!("[ACME] Starting challenge listener on {}", address));
    let routes = http_service_challenge_routes(manager, https_port);
    let server = HttpServer::new(move || {
        let routes = routes.clone();
        App::new().configure(move |cfg| routes(cfg))
    })
        .workers(1)
        .disable_signals()
        .shutdown_timeout(1)
        .bind(address)
        .map_err(|source| ProvisioningError::ChallengeBind { address, source })?;
    let bound = server.addrs().first().copied().unwrap_or(address);
    supervise_challenge_server(server.run(), bound, startup_window, failures, logger).await
}

/// Runs an already bound challenge server and races it against `startup_window`.
pub(crate) async fn supervise_challenge_server(
    server: Server,
    bound: SocketAddr,
    startup_window: Duration,
    failures: Option<mpsc::Sender<ListenerFailure>>,
    logger: Logger,
) -> Result<ChallengeServerHandle, ProvisioningError>
{
    let handle = server.handle();

    let confirmed = Arc::new(AtomicBool::new(false));
    let (done_tx, mut done_rx) = oneshot::channel::<Result<(), String>>();
    let task = tokio::spawn({
        let confirmed = confirmed.clone();
        let logger = logger.clone();
        async move {
            let result = server.await.map_err(|error| error.to_string());
            if !confirmed.load(Ordering::SeqCst) {
                let _ = done_tx.send(result);
                return;
            }
            if let Err(error) = result {
                let failure = ListenerFailure::new(ListenerKind::Challenge, bound, error);
                match failures {
                    Some(queue) => {
                        if queue.try_send(failure).is_err() {
                            logger.warn(format!(
                                "[ACME] Challenge listener on {} failed after startup, error queue unavailable",
                                bound
                            ));
                        }
                    }
                    None => logger.error(format!("[ACME] Challenge listener on {} failed: {}", bound, failure.error)),
                }
            }
        }
    });

    let early = tokio::select! {
        _ = tokio::time::sleep(startup_window) => None,
        result = &mut done_rx => Some(result.unwrap_or(Ok(()))),
    };
    confirmed.store(true, Ordering::SeqCst);
    let early = early.or_else(|| done_rx.try_recv().ok());

    match early {
        None => {
            logger.info(format!("[ACME] Challenge listener running on {}", bound));
            Ok(ChallengeServerHandle { address: bound, handle, task })
        }
        Some(result) => {
            let reason = match result {
                Ok(()) => String::from("listener stopped during startup"),
                Err(error) => error,
            };
            logger.error(format!("[ACME] Challenge listener on {} failed to start: {}", bound, reason));
            Err(ProvisioningError::ChallengeStartup(reason))
        }
    }
}
