use std::sync::Arc;
use actix_web::web::ServiceConfig;

/// Installs the application routes on every worker's `App`.
pub type RouteConfigurator = Arc<dyn Fn(&mut ServiceConfig) + Send + Sync>;
