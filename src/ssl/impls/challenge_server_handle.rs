use std::net::SocketAddr;
use tokio::time::Instant;
use crate::ssl::structs::challenge_server_handle::ChallengeServerHandle;

impl std::fmt::Debug for ChallengeServerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallengeServerHandle")
            .field("address", &self.address)
            .finish()
    }
}

impl ChallengeServerHandle {
    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Graceful stop bounded by `deadline`; the serving task is aborted when it runs out.
    pub async fn shutdown(self, deadline: Instant) -> Result<(), String> {
        let ChallengeServerHandle { address, handle, mut task } = self;
        if tokio::time::timeout_at(deadline, handle.stop(true)).await.is_err() {
            task.abort();
            return Err(format!("challenge listener on {} did not stop before the deadline", address));
        }
        match tokio::time::timeout_at(deadline, &mut task).await {
            Ok(_) => Ok(()),
            Err(_) => {
                task.abort();
                Err(format!("challenge listener on {} did not stop before the deadline", address))
            }
        }
    }
}
