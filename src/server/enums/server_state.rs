/// `ValidationFailed` and `ProvisioningFailed` are terminal and only reachable from `Starting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Configured,
    Starting,
    Running,
    Stopping,
    Stopped,
    ValidationFailed,
    ProvisioningFailed,
}
