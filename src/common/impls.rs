/// Display and Error impls for `CustomError`.
pub mod custom_error;

/// Logging helpers for `Logger`.
pub mod logger;

/// `log::Log` impl for `MemoryLogSink`.
pub mod memory_log_sink;
