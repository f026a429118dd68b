#[cfg(test)]
mod common_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::watch;
    use crate::common::common::{
        host_without_port,
        https_redirect_location,
        parse_duration,
        parse_log_level,
        resolve_bind_address,
        wait_for_cancel,
    };
    use crate::common::structs::logger::Logger;
    use crate::common::structs::memory_log_sink::MemoryLogSink;

    #[test]
    fn test_parse_duration_simple_units() {
        assert_eq!(parse_duration("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("10us").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("10\u{00b5}s").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::from_nanos(7));
    }

    #[test]
    fn test_parse_duration_compound_and_fraction() {
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("+2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        for value in ["", "5", "abc", "5x", "-5s", "s", ".s", "1.5", "1h-2m"] {
            assert!(parse_duration(value).is_err(), "expected {:?} to be rejected", value);
        }
    }

    #[test]
    fn test_parse_duration_error_names_value() {
        let error = parse_duration("10parsecs").unwrap_err();
        assert!(error.to_string().contains("10parsecs"));
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_resolve_bind_address_port_only() {
        let address = resolve_bind_address(":8443").unwrap();
        assert_eq!(address, "0.0.0.0:8443".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_resolve_bind_address_literals() {
        assert_eq!(resolve_bind_address("127.0.0.1:80").unwrap(), "127.0.0.1:80".parse::<SocketAddr>().unwrap());
        assert_eq!(resolve_bind_address("[::1]:443").unwrap(), "[::1]:443".parse::<SocketAddr>().unwrap());
        assert!(resolve_bind_address(":http").is_err());
        assert!(resolve_bind_address("no-port-here").is_err());
    }

    #[test]
    fn test_host_without_port() {
        assert_eq!(host_without_port("example.com:8080"), "example.com");
        assert_eq!(host_without_port("example.com"), "example.com");
        assert_eq!(host_without_port("[::1]:8080"), "[::1]");
        assert_eq!(host_without_port("[::1]"), "[::1]");
    }

    #[test]
    fn test_https_redirect_location() {
        assert_eq!(https_redirect_location("example.com:80", "/a?b=c", 443), "https://example.com/a?b=c");
        assert_eq!(https_redirect_location("example.com", "", 8443), "https://example.com:8443/");
    }

    #[test]
    fn test_logger_writes_to_injected_sink() {
        let sink = Arc::new(MemoryLogSink::new());
        let logger = Logger::with_sink("gatehouse::test", sink.clone());
        logger.info("[SERVER] hello");
        logger.child("gatehouse::other").error("[SERVER] broken");
        assert_eq!(sink.count(log::Level::Info, "hello"), 1);
        assert_eq!(sink.count(log::Level::Error, "broken"), 1);
        assert_eq!(logger.target(), "gatehouse::test");
    }

    #[tokio::test]
    async fn test_wait_for_cancel_ignores_dropped_sender() {
        let (tx, mut rx) = watch::channel(false);
        drop(tx);
        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for_cancel(&mut rx)).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn test_wait_for_cancel_fires_on_true() {
        let (tx, mut rx) = watch::channel(false);
        let waiter = tokio::spawn(async move { wait_for_cancel(&mut rx).await });
        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
    }
}
