use std::sync::Arc;
use actix_web::{http, web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use crate::common::common::https_redirect_location;
use crate::http::structs::redirect_target::RedirectTarget;
use crate::http::types::RouteConfigurator;
use crate::ssl::structs::acme_cert_manager::AcmeCertManager;

pub const ACME_CHALLENGE_PATH: &str = "/.well-known/acme-challenge/{token}";

/// Every request is answered with a redirect to the HTTPS listener.
pub fn http_service_redirect_routes(https_port: u16) -> RouteConfigurator
{
    Arc::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(RedirectTarget { https_port }));
        cfg.default_service(web::route().to(http_service_redirect));
    })
}

/// HTTP-01 tokens from the manager, everything else redirected to HTTPS.
pub fn http_service_challenge_routes(manager: Arc<AcmeCertManager>, https_port: u16) -> RouteConfigurator
{
    Arc::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(manager.clone()));
        cfg.app_data(Data::new(RedirectTarget { https_port }));
        cfg.service(web::resource(ACME_CHALLENGE_PATH).route(web::get().to(http_service_acme_challenge)));
        cfg.default_service(web::route().to(http_service_redirect));
    })
}

pub async fn http_service_redirect(request: HttpRequest, target: Data<RedirectTarget>) -> HttpResponse
{
    let connection_info = request.connection_info();
    let path_and_query = request.uri().path_and_query().map(|value| value.as_str()).unwrap_or("/");
    let location = https_redirect_location(connection_info.host(), path_and_query, target.https_port);
    HttpResponse::MovedPermanently()
        .insert_header((http::header::LOCATION, location))
        .finish()
}

pub async fn http_service_acme_challenge(token: web::Path<String>, manager: Data<Arc<AcmeCertManager>>) -> HttpResponse
{
    match manager.challenge_response(token.as_str()) {
        Some(key_authorization) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(key_authorization),
        None => HttpResponse::NotFound()
            .content_type(ContentType::plaintext())
            .body("unknown challenge token"),
    }
}
