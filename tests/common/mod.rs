#![allow(dead_code)]
use std::sync::Arc;
use actix_web::{web, HttpResponse};
use actix_web::web::ServiceConfig;
use tempfile::TempDir;
use gatehouse::common::structs::logger::Logger;
use gatehouse::common::structs::memory_log_sink::MemoryLogSink;
use gatehouse::config::structs::configuration::Configuration;
use gatehouse::http::types::RouteConfigurator;

pub fn test_logger() -> (Logger, Arc<MemoryLogSink>) {
    let sink = Arc::new(MemoryLogSink::new());
    (Logger::with_sink("gatehouse::test", sink.clone()), sink)
}

/// Plain listener on an ephemeral local port.
pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.server.address = String::from("127.0.0.1:0");
    config.server.shutdown_timeout = String::from("5s");
    config.server.workers = 1;
    config
}

/// Development config with SSL on and no certificate files, so a self-signed
/// pair is generated into `dir`.
pub fn create_self_signed_config(dir: &TempDir) -> Configuration {
    let mut config = create_test_config();
    config.environment = String::from("development");
    config.server.ssl.enabled = true;
    config.server.ssl.address = String::from("127.0.0.1:0");
    config.server.ssl.self_signed_dir = dir.path().to_string_lossy().to_string();
    config
}

pub fn hello_routes() -> RouteConfigurator {
    Arc::new(|cfg: &mut ServiceConfig| {
        cfg.route("/", web::get().to(|| async { HttpResponse::Ok().body("hello") }));
    })
}
