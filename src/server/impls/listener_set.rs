use std::net::SocketAddr;
use futures_util::future::join_all;
use tokio::time::Instant;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::enums::server_error::ServerError;
use crate::server::structs::listener_handle::ListenerHandle;
use crate::server::structs::listener_set::ListenerSet;

impl ListenerSet {
    pub fn new() -> ListenerSet {
        ListenerSet::default()
    }

    pub fn insert(&mut self, listener: ListenerHandle) -> Result<(), ServerError> {
        if self.listeners.contains_key(&listener.kind) {
            return Err(ServerError::DuplicateListener(listener.kind));
        }
        self.listeners.insert(listener.kind, listener);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn contains(&self, kind: ListenerKind) -> bool {
        self.listeners.contains_key(&kind)
    }

    pub fn addresses(&self) -> Vec<(ListenerKind, SocketAddr)> {
        self.listeners.values().map(|listener| (listener.kind, listener.address)).collect()
    }

    /// Shuts every listener down concurrently; one failure does not skip the others.
    pub async fn shutdown_all(self, deadline: Instant) -> Vec<(ListenerKind, Result<(), String>)> {
        join_all(self.listeners.into_values().map(|listener| async move {
            let kind = listener.kind;
            (kind, listener.shutdown(deadline).await)
        })).await
    }
}
