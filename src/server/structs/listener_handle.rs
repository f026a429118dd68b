use std::net::SocketAddr;
use actix_web::dev::ServerHandle;
use tokio::task::JoinHandle;
use crate::server::enums::listener_kind::ListenerKind;

pub struct ListenerHandle {
    pub(crate) kind: ListenerKind,
    pub(crate) address: SocketAddr,
    pub(crate) handle: ServerHandle,
    pub(crate) task: JoinHandle<()>,
}
