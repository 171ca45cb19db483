use actix_web::{web, Scope};

use crate::handlers::{health_check, query_config};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .configure(query_config)
}
