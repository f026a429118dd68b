use std::sync::Arc;

/// A logging capability passed to components at construction time.
///
/// Every record is emitted with a fixed `target`. The sink defaults to the
/// process wide logger installed by `setup_logging`, tests swap in a
/// `MemoryLogSink` to inspect what was written.
#[derive(Clone)]
pub struct Logger {
    pub(crate) target: &'static str,
    pub(crate) sink: Arc<dyn log::Log>,
}
