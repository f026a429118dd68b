use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct RenewalTicker {
    pub(crate) stop: oneshot::Sender<()>,
    pub(crate) task: JoinHandle<()>,
}
