mod common;

use std::time::Duration;
use tokio::sync::watch;
use gatehouse::server::enums::listener_kind::ListenerKind;
use gatehouse::server::enums::server_error::ServerError;
use gatehouse::server::enums::server_state::ServerState;
use gatehouse::server::structs::listener_failure::ListenerFailure;
use gatehouse::server::structs::server_orchestrator::ServerOrchestrator;
use gatehouse::ssl::enums::provisioning_error::ProvisioningError;
use gatehouse::ssl::ssl::SELF_SIGNED_CERT_FILE;

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

fn port_of(listeners: &[(ListenerKind, std::net::SocketAddr)], kind: ListenerKind) -> u16 {
    listeners.iter().find(|(k, _)| *k == kind).map(|(_, address)| address.port()).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_ssl_disabled_runs_one_listener() {
    let (logger, _sink) = common::test_logger();
    let orchestrator = ServerOrchestrator::configure(&common::create_test_config(), common::hello_routes(), logger).unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    orchestrator.start(cancel_rx).await.unwrap();

    let listeners = orchestrator.listener_addresses().await;
    assert_eq!(listeners.len(), 1);
    let port = port_of(&listeners, ListenerKind::Plain);

    let response = no_redirect_client().get(format!("http://127.0.0.1:{}/", port)).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "hello");

    orchestrator.stop(Duration::from_secs(5)).await.unwrap();
    assert_eq!(orchestrator.state(), ServerState::Stopped);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_self_signed_development_runs_two_listeners() {
    let (logger, _sink) = common::test_logger();
    let dir = tempfile::tempdir().unwrap();
    let config = common::create_self_signed_config(&dir);
    let orchestrator = ServerOrchestrator::configure(&config, common::hello_routes(), logger).unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    orchestrator.start(cancel_rx).await.unwrap();

    assert!(dir.path().join(SELF_SIGNED_CERT_FILE).exists());
    let listeners = orchestrator.listener_addresses().await;
    assert_eq!(listeners.len(), 2);
    let encrypted = port_of(&listeners, ListenerKind::Encrypted);
    assert!(tokio::net::TcpStream::connect(("127.0.0.1", encrypted)).await.is_ok());

    orchestrator.stop(Duration::from_secs(5)).await.unwrap();
    assert!(orchestrator.listener_addresses().await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_plain_listener_redirects_to_https() {
    let (logger, _sink) = common::test_logger();
    let dir = tempfile::tempdir().unwrap();
    let mut config = common::create_self_signed_config(&dir);
    config.server.redirect_to_https = true;
    let orchestrator = ServerOrchestrator::configure(&config, common::hello_routes(), logger).unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    orchestrator.start(cancel_rx).await.unwrap();

    let listeners = orchestrator.listener_addresses().await;
    let plain = port_of(&listeners, ListenerKind::Plain);
    let encrypted = port_of(&listeners, ListenerKind::Encrypted);
    let response = no_redirect_client().get(format!("http://127.0.0.1:{}/docs?page=2", plain)).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 301);
    let location = response.headers().get("location").unwrap().to_str().unwrap();
    assert_eq!(location, format!("https://127.0.0.1:{}/docs?page=2", encrypted));

    orchestrator.stop(Duration::from_secs(5)).await.unwrap();
}

#[tokio::test]
async fn test_zerossl_without_eab_key_spawns_no_listener() {
    let (logger, _sink) = common::test_logger();
    let mut config = common::create_test_config();
    config.server.ssl.enabled = true;
    config.server.ssl.address = String::from("127.0.0.1:0");
    config.server.ssl.auto_ssl = true;
    config.server.ssl.auto_ssl_domains = vec![String::from("example.com")];
    config.server.ssl.auto_ssl_provider = String::from("zerossl");
    config.server.ssl.auto_ssl_zerossl_eab_key = String::new();

    let orchestrator = ServerOrchestrator::configure(&config, common::hello_routes(), logger).unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    let error = orchestrator.start(cancel_rx).await.unwrap_err();

    assert!(matches!(error, ServerError::Provisioning(ProvisioningError::MissingExternalAccountBinding(_))));
    assert!(error.to_string().contains("auto_ssl_zerossl_eab_key"));
    assert_eq!(orchestrator.state(), ServerState::ProvisioningFailed);
    assert!(orchestrator.listener_addresses().await.is_empty());
    orchestrator.stop(Duration::from_secs(1)).await.unwrap();
}

#[tokio::test]
async fn test_stop_before_start_leaves_configured_state() {
    let (logger, _sink) = common::test_logger();
    let orchestrator = ServerOrchestrator::configure(&common::create_test_config(), common::hello_routes(), logger).unwrap();
    assert!(orchestrator.stop(Duration::from_secs(1)).await.is_ok());
    assert_eq!(orchestrator.state(), ServerState::Configured);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_challenge_listener_failure_leaves_no_encrypted_listener() {
    let (logger, _sink) = common::test_logger();
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let mut config = common::create_test_config();
    config.server.ssl.enabled = true;
    config.server.ssl.address = String::from("127.0.0.1:0");
    config.server.ssl.auto_ssl = true;
    config.server.ssl.auto_ssl_domains = vec![String::from("example.com")];
    config.server.ssl.auto_ssl_challenge_addr = occupied.local_addr().unwrap().to_string();

    let orchestrator = ServerOrchestrator::configure_with_challenge_window(
        &config,
        common::hello_routes(),
        logger,
        Duration::from_millis(200),
    ).unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    let error = orchestrator.start(cancel_rx).await.unwrap_err();

    assert!(matches!(error, ServerError::ChallengeStartup(_)));
    assert!(orchestrator.listener_addresses().await.is_empty());
    assert!(orchestrator.challenge_address().await.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_bind_conflict_is_synchronous() {
    let (logger, _sink) = common::test_logger();
    let dir = tempfile::tempdir().unwrap();
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let mut config = common::create_self_signed_config(&dir);
    config.server.ssl.address = occupied.local_addr().unwrap().to_string();

    let orchestrator = ServerOrchestrator::configure(&config, common::hello_routes(), logger).unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    let error = orchestrator.start(cancel_rx).await.unwrap_err();

    assert!(matches!(error, ServerError::Bind { kind: ListenerKind::Encrypted, .. }));
    assert!(orchestrator.listener_addresses().await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_listener_failure_triggers_single_stop() {
    let (logger, sink) = common::test_logger();
    let orchestrator = ServerOrchestrator::configure(&common::create_test_config(), common::hello_routes(), logger).unwrap();
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    orchestrator.start(cancel_rx).await.unwrap();
    let address = orchestrator.listener_addresses().await[0].1;

    let mut stopped = orchestrator.shutdown_signal();
    assert!(orchestrator.report_failure(ListenerFailure::new(ListenerKind::Plain, address, "accept failed")));
    tokio::time::timeout(Duration::from_secs(10), stopped.wait_for(|done| *done)).await.unwrap().unwrap();

    orchestrator.stop(Duration::from_secs(1)).await.unwrap();
    assert_eq!(sink.count(log::Level::Info, "[SERVER] Stopping"), 1);
    assert!(orchestrator.failure().is_some());
}
