pub mod api;
pub mod core;
pub mod utils;

use actix_web::dev::Server;
use tracing::info;

use crate::{
    api::{rest::RestApi, AppState},
    core::services::{comparison::ComparisonService, health::HealthService},
    utils::{config::Config, error::Result},
};

pub struct Application {
    rest_api: RestApi,
    state: AppState,
}

impl Application {
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing comparison service...");
        let comparison_service = ComparisonService::from_config(&config.verifier)?;

        let state = AppState::new(
            comparison_service,
            HealthService::new(),
            config.server.max_request_size,
        );

        Ok(Self {
            rest_api: RestApi::new(&config.server),
            state,
        })
    }

    /// Binds the API server. The returned [`Server`] must be awaited to serve requests.
    pub fn start(&self) -> Result<Server> {
        info!("Starting API server...");
        self.rest_api.start(self.state.clone())
    }
}
