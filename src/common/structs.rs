/// Plain message error used during bootstrap.
pub mod custom_error;

/// Logging capability with a fixed target.
pub mod logger;

/// In-memory log sink.
pub mod memory_log_sink;
