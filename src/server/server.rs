use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::Instant;
use crate::common::common::wait_for_cancel;
use crate::common::structs::logger::Logger;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::structs::listener_failure::ListenerFailure;
use crate::server::traits::certificate_renewal::CertificateRenewal;
use crate::server::traits::system_stop::SystemStop;

pub const RENEWAL_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);
pub const RENEWAL_RETRY_INITIAL: Duration = Duration::from_secs(60);
pub const RENEWAL_RETRY_MAX: Duration = Duration::from_secs(60 * 60);

/// Drives one listener until it closes. Only an error is reported to the fan-in queue.
pub async fn serve_listener<F>(
    kind: ListenerKind,
    address: SocketAddr,
    server: F,
    failures: mpsc::Sender<ListenerFailure>,
    logger: Logger,
)
where
    F: Future<Output = std::io::Result<()>>,
{
    logger.info(format!("[SERVER] {} listener serving on {}", kind, address));
    match server.await {
        Ok(()) => logger.debug(format!("[SERVER] {} listener on {} closed", kind, address)),
        Err(error) => {
            let failure = ListenerFailure::new(kind, address, error.to_string());
            if let Err(
                mpsc::error::TrySendError::Closed(failure) | mpsc::error::TrySendError::Full(failure)
            ) = failures.try_send(failure) {
                logger.warn(format!("[SERVER] Error queue unavailable, dropping: {}", failure));
            }
        }
    }
}

/// Consumes the fan-in queue. The first failure triggers the system stop; anything
/// arriving while a stop is underway is only logged.
pub async fn monitor_errors(
    mut failures: mpsc::Receiver<ListenerFailure>,
    system: Weak<dyn SystemStop>,
    mut cancel: watch::Receiver<bool>,
    logger: Logger,
)
{
    let mut stop_requested = false;
    loop {
        let failure = tokio::select! {
            failure = failures.recv() => match failure {
                Some(failure) => failure,
                None => {
                    logger.debug("[MONITOR] Error queue closed");
                    break;
                }
            },
            _ = wait_for_cancel(&mut cancel) => {
                logger.debug("[MONITOR] Cancelled");
                break;
            }
        };

        let Some(system) = system.upgrade() else {
            logger.warn(format!("[MONITOR] {} (server already gone)", failure));
            continue;
        };
        if stop_requested || system.is_shutting_down() {
            logger.warn(format!("[MONITOR] {} (shutdown already in progress)", failure));
            continue;
        }

        stop_requested = true;
        logger.error(format!("[MONITOR] {}, stopping the server", failure));
        if let Err(error) = system.stop_system(Some(failure)).await {
            logger.error(format!("[MONITOR] Shutdown finished with an error: {}", error));
        }
    }
}

/// Checks for renewal right away, then once per `period`.
///
/// A failed pass is retried after `RENEWAL_RETRY_INITIAL`, doubling up to
/// `RENEWAL_RETRY_MAX` (never beyond `period`), until a pass succeeds.
pub async fn run_renewal_scheduler(
    renewal: Arc<dyn CertificateRenewal>,
    period: Duration,
    mut stop: oneshot::Receiver<()>,
    mut cancel: watch::Receiver<bool>,
    logger: Logger,
)
{
    let mut next_check = Instant::now();
    let mut backoff = RENEWAL_RETRY_INITIAL.min(period);
    loop {
        tokio::select! {
            _ = tokio::time::sleep_until(next_check) => {
                match renewal.renew_if_needed().await {
                    Ok(count) => {
                        if count == 0 {
                            logger.debug("[RENEWAL] Nothing to renew");
                        } else {
                            logger.info(format!("[RENEWAL] Renewed {} certificate(s)", count));
                        }
                        backoff = RENEWAL_RETRY_INITIAL.min(period);
                        next_check = Instant::now() + period;
                    }
                    Err(error) => {
                        logger.error(format!(
                            "[RENEWAL] Renewal failed: {}, retrying in {}s",
                            error,
                            backoff.as_secs()
                        ));
                        next_check = Instant::now() + backoff;
                        backoff = (backoff * 2).min(RENEWAL_RETRY_MAX).min(period);
                    }
                }
            }
            _ = &mut stop => {
                logger.debug("[RENEWAL] Scheduler stopped");
                break;
            }
            _ = wait_for_cancel(&mut cancel) => {
                logger.debug("[RENEWAL] Scheduler cancelled");
                break;
            }
        }
    }
}

/// Enters the shutdown sequence when `cancel` fires, unless the server stopped first.
pub async fn watch_cancellation(
    system: Weak<dyn SystemStop>,
    mut cancel: watch::Receiver<bool>,
    mut shutdown: watch::Receiver<bool>,
    logger: Logger,
)
{
    tokio::select! {
        _ = wait_for_cancel(&mut cancel) => {
            if let Some(system) = system.upgrade() {
                logger.info("[SERVER] Cancellation received");
                if let Err(error) = system.stop_system(None).await {
                    logger.error(format!("[SERVER] Shutdown finished with an error: {}", error));
                }
            }
        }
        _ = wait_for_cancel(&mut shutdown) => {}
    }
}
