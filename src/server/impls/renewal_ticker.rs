use tokio::time::Instant;
use crate::server::structs::renewal_ticker::RenewalTicker;

impl RenewalTicker {
    pub async fn shutdown(self, deadline: Instant) -> Result<(), String> {
        let RenewalTicker { stop, mut task } = self;
        let _ = stop.send(());
        match tokio::time::timeout_at(deadline, &mut task).await {
            Ok(_) => Ok(()),
            Err(_) => {
                task.abort();
                Err(String::from("renewal scheduler did not stop before the deadline"))
            }
        }
    }
}
