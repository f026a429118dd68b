use std::net::SocketAddr;
use actix_web::dev::ServerHandle;
use tokio::task::JoinHandle;

pub struct ChallengeServerHandle {
    pub(crate) address: SocketAddr,
    pub(crate) handle: ServerHandle,
    pub(crate) task: JoinHandle<()>,
}
