use std::fmt;
use std::net::SocketAddr;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::structs::listener_failure::ListenerFailure;

impl ListenerFailure {
    pub fn new(kind: ListenerKind, address: SocketAddr, error: impl Into<String>) -> ListenerFailure {
        ListenerFailure {
            kind,
            address,
            error: error.into(),
        }
    }
}

impl fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} listener on {} failed: {}", self.kind, self.address, self.error)
    }
}
