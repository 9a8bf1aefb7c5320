pub mod error;
pub mod handlers;
pub mod rest;
pub mod types;

use actix_web::web::{self, Data};

use crate::core::services::{comparison::ComparisonService, health::HealthService};

/// Shared state handed to every worker's `App`.
#[derive(Clone)]
pub struct AppState {
    pub comparison: Data<ComparisonService>,
    pub health: Data<HealthService>,
    pub max_request_size: usize,
}

impl AppState {
    pub fn new(comparison: ComparisonService, health: HealthService, max_request_size: usize) -> Self {
        Self {
            comparison: Data::new(comparison),
            health: Data::new(health),
            max_request_size,
        }
    }

    /// Registers the data and routes on an `App`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.comparison.clone())
            .app_data(self.health.clone())
            .app_data(web::PayloadConfig::new(self.max_request_size))
            .service(handlers::compare::resource())
            .service(handlers::health::resource());
    }
}
