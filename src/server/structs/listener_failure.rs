use std::net::SocketAddr;
use crate::server::enums::listener_kind::ListenerKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    pub kind: ListenerKind,
    pub address: SocketAddr,
    pub error: String,
}
