use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use actix_web::{web, HttpResponse};
use actix_web::web::ServiceConfig;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio::sync::watch;
use gatehouse::common::common::{setup_logging, wait_for_cancel};
use gatehouse::common::structs::logger::Logger;
use gatehouse::config::structs::configuration::Configuration;
use gatehouse::http::types::RouteConfigurator;
use gatehouse::server::structs::server_orchestrator::ServerOrchestrator;
use gatehouse::ssl::ssl::generate_self_signed_certificate;
use gatehouse::structs::{Cli, Command};

fn status_routes() -> RouteConfigurator
{
    Arc::new(|cfg: &mut ServiceConfig| {
        cfg.route("/", web::get().to(|| async { HttpResponse::Ok().body("gatehouse") }));
    })
}

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.command == Some(Command::GenerateConfig) {
        match Configuration::init().to_toml() {
            Ok(config_toml) => {
                println!("{}", config_toml);
                return Ok(());
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                exit(1)
            }
        }
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {}", e);
        exit(1)
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.command == Some(Command::SelfSigned) {
        let directory = config.server.ssl.self_signed_dir.clone();
        let logger = Logger::global("gatehouse::certgen");
        if let Err(e) = generate_self_signed_certificate(&config.environment, Path::new(&directory), &logger) {
            error!("[CERTGEN] {}", e);
            exit(1)
        }
        return Ok(());
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let logger = Logger::global("gatehouse::server");
            let orchestrator = match ServerOrchestrator::configure(&config, status_routes(), logger) {
                Ok(orchestrator) => orchestrator,
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1)
                }
            };

            let (cancel_tx, cancel_rx) = watch::channel(false);
            if let Err(e) = orchestrator.start(cancel_rx).await {
                error!("[BOOT] {}", e);
                exit(1)
            }

            let mut stopped = orchestrator.shutdown_signal();
            tokio::select! {
                _ = shutdown_requested() => {
                    info!("Shutdown request received, shutting down...");
                }
                _ = wait_for_cancel(&mut stopped) => {}
            }

            let stop_result = orchestrator.stop(orchestrator.config().shutdown_timeout()).await;
            let _ = cancel_tx.send(true);

            if let Some(failure) = orchestrator.failure() {
                error!("[SERVER] {}", failure);
                exit(1)
            }
            if let Err(e) = stop_result {
                error!("[SERVER] {}", e);
                exit(1)
            }
            info!("Server shutting down completed");
            Ok(())
        })
}

async fn shutdown_requested()
{
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
