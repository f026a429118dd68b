use log::Level;
use crate::common::structs::memory_log_sink::MemoryLogSink;

impl MemoryLogSink {
    pub fn new() -> MemoryLogSink {
        MemoryLogSink::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().clone()
    }

    /// Number of records at `level` whose message contains `needle`.
    pub fn count(&self, level: Level, needle: &str) -> usize {
        self.records.lock()
            .iter()
            .filter(|(record_level, message)| *record_level == level && message.contains(needle))
            .count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.records.lock().iter().any(|(_, message)| message.contains(needle))
    }
}

impl log::Log for MemoryLogSink {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records.lock().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
