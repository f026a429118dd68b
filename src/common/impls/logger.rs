use std::fmt;
use std::sync::Arc;
use log::Level;
use crate::common::structs::logger::Logger;

struct GlobalSink;

impl log::Log for GlobalSink {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

impl Logger {
    /// Forwards to whatever logger `log::set_logger` installed.
    pub fn global(target: &'static str) -> Logger {
        Logger {
            target,
            sink: Arc::new(GlobalSink),
        }
    }

    pub fn with_sink(target: &'static str, sink: Arc<dyn log::Log>) -> Logger {
        Logger { target, sink }
    }

    /// Same sink, different target.
    pub fn child(&self, target: &'static str) -> Logger {
        Logger {
            target,
            sink: self.sink.clone(),
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Level::Warn, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, message);
    }

    fn emit(&self, level: Level, message: impl fmt::Display) {
        let metadata = log::Metadata::builder()
            .level(level)
            .target(self.target)
            .build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(
            &log::Record::builder()
                .metadata(metadata)
                .args(format_args!("{}", message))
                .build()
        );
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("target", &self.target).finish()
    }
}
