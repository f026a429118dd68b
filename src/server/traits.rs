/// Renewal hook used by the scheduler.
pub mod certificate_renewal;

/// Stop hook used by the error monitor.
pub mod system_stop;
