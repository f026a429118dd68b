use parking_lot::Mutex;

/// Records every log entry it receives as `(level, message)`.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    pub(crate) records: Mutex<Vec<(log::Level, String)>>,
}
