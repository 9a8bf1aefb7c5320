// src/api/rest.rs
use actix_cors::Cors;
use actix_web::{dev::Server, middleware, App, HttpServer};
use tracing::info;

use super::AppState;
use crate::utils::{
    config::ServerConfig,
    error::{GatewayError, Result},
};

pub struct RestApi {
    host: String,
    port: u16,
    workers: Option<usize>,
    cors_allowed_origins: Vec<String>,
}

impl RestApi {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            workers: config.workers,
            cors_allowed_origins: config.cors_allowed_origins.clone(),
        }
    }

    /// Binds the listener and returns the server without driving it.
    ///
    /// Signal handling is disabled; the caller stops the server through its handle.
    pub fn start(&self, state: AppState) -> Result<Server> {
        let origins = self.cors_allowed_origins.clone();

        let mut server = HttpServer::new(move || {
            let state = state.clone();
            App::new()
                .wrap(middleware::Condition::new(!origins.is_empty(), cors(&origins)))
                .wrap(middleware::Logger::default())
                .configure(move |cfg| state.configure(cfg))
        })
        .disable_signals();

        if let Some(workers) = self.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind((self.host.as_str(), self.port))
            .map_err(|e| GatewayError::Io(format!("Failed to bind API server on {}:{}: {}", self.host, self.port, e)))?;

        info!("API server listening on {}:{}", self.host, self.port);
        Ok(server.run())
    }
}

fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);

    origins.iter().fold(cors, |cors, origin| {
        if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        }
    })
}
