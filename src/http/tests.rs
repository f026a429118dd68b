#[cfg(test)]
mod http_tests {
    use actix_web::{http, test, App};
    use crate::http::http::http_service_redirect_routes;

    #[actix_web::test]
    async fn test_redirect_keeps_path_and_query() {
        let routes = http_service_redirect_routes(8443);
        let app = test::init_service(App::new().configure(move |cfg| routes(cfg))).await;
        let request = test::TestRequest::get()
            .uri("/some/path?x=1")
            .insert_header((http::header::HOST, "example.com:8080"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), http::StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers().get(http::header::LOCATION).unwrap(), "https://example.com:8443/some/path?x=1");
    }

    #[actix_web::test]
    async fn test_redirect_omits_default_port() {
        let routes = http_service_redirect_routes(443);
        let app = test::init_service(App::new().configure(move |cfg| routes(cfg))).await;
        let request = test::TestRequest::post()
            .uri("/")
            .insert_header((http::header::HOST, "example.com"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), http::StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers().get(http::header::LOCATION).unwrap(), "https://example.com/");
    }
}
