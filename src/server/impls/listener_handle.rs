use std::net::SocketAddr;
use tokio::time::Instant;
use crate::server::enums::listener_kind::ListenerKind;
use crate::server::structs::listener_handle::ListenerHandle;

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("kind", &self.kind)
            .field("address", &self.address)
            .finish()
    }
}

impl ListenerHandle {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Stops accepting, waits for in-flight requests until `deadline`, then aborts.
    pub async fn shutdown(self, deadline: Instant) -> Result<(), String> {
        let ListenerHandle { kind, address, handle, mut task } = self;
        if tokio::time::timeout_at(deadline, handle.stop(true)).await.is_err() {
            task.abort();
            return Err(format!("{} listener on {} did not stop before the deadline", kind, address));
        }
        match tokio::time::timeout_at(deadline, &mut task).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(error)) => Err(format!("{} listener task on {} ended abnormally: {}", kind, address, error)),
            Err(_) => {
                task.abort();
                Err(format!("{} listener task on {} did not finish before the deadline", kind, address))
            }
        }
    }
}
