use actix_web::{
    web::{self, Data},
    HttpResponse, Resource,
};

use crate::{api::types::HealthResponse, core::services::health::HealthService};

pub fn resource() -> Resource {
    web::resource("/health").route(web::get().to(health_check))
}

async fn health_check(health: Data<HealthService>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        metrics: health.get_metrics(),
    })
}
