use tokio::task::JoinHandle;
use crate::server::structs::listener_set::ListenerSet;
use crate::server::structs::renewal_ticker::RenewalTicker;
use crate::ssl::enums::certificate_state::CertificateState;
use crate::ssl::structs::challenge_server_handle::ChallengeServerHandle;

#[derive(Default)]
pub struct OrchestratorRuntime {
    pub(crate) listeners: ListenerSet,
    pub(crate) certificates: Option<CertificateState>,
    pub(crate) challenge_server: Option<ChallengeServerHandle>,
    pub(crate) renewal_ticker: Option<RenewalTicker>,
    pub(crate) monitor_task: Option<JoinHandle<()>>,
    pub(crate) cancel_task: Option<JoinHandle<()>>,
}
