use actix_web::{
    web::{self, Bytes, Data},
    HttpResponse, Resource,
};
use tracing::{error, info, warn};

use crate::{
    api::types::{ComparisonResponse, ErrorResponse},
    core::{
        services::{comparison::ComparisonService, health::HealthService},
        types::ComparisonRequest,
    },
    utils::error::GatewayError,
};

const UNREADABLE_BODY_MESSAGE: &str = "Request body could not be read.";

pub fn resource() -> Resource {
    web::resource("/compare-faces").route(web::post().to(compare_faces))
}

async fn compare_faces(
    service: Data<ComparisonService>,
    health: Data<HealthService>,
    body: Result<Bytes, actix_web::Error>,
) -> Result<HttpResponse, GatewayError> {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            // Oversized or interrupted payloads keep actix's status but get a JSON body.
            warn!("Rejected comparison request body: {}", e);
            let status = e.as_response_error().status_code();
            return Ok(HttpResponse::build(status)
                .json(ErrorResponse::with_details(UNREADABLE_BODY_MESSAGE, e.to_string())));
        }
    };

    let request = ComparisonRequest::from_json(&body).map_err(|e| {
        warn!("Invalid comparison request: {}", e);
        e
    })?;

    info!("Received face comparison request");

    let result = service.compare(&request).await;
    health.record_comparison(result.is_ok());

    let outcome = result.map_err(|e| {
        error!(error = ?e, "Face comparison failed: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(ComparisonResponse::from(outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::AppState,
        core::{types::VerificationOutcome, verifier::MockFaceVerifier},
    };
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn state(verifier: MockFaceVerifier, dir: &TempDir, max_request_size: usize) -> AppState {
        AppState::new(
            ComparisonService::new(Arc::new(verifier), dir.path()),
            HealthService::new(),
            max_request_size,
        )
    }

    #[actix_web::test]
    async fn test_compare_faces_ok() {
        let dir = TempDir::new().unwrap();
        let mut verifier = MockFaceVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .returning(|_, _| Ok(VerificationOutcome { verified: true, distance: 0.04 }));
        let state = state(verifier, &dir, 1024);

        let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
        let request = test::TestRequest::post()
            .uri("/compare-faces")
            .set_json(json!({ "image": "aGVsbG8=", "saved_image": "aGVsbG8=" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: ComparisonResponse = test::read_body_json(response).await;
        assert!(body.verified);
        assert_eq!(body.distance, 0.04);
        assert_eq!(state.health.get_metrics().processed_requests, 1);
    }

    #[actix_web::test]
    async fn test_compare_faces_rejects_missing_fields() {
        let dir = TempDir::new().unwrap();
        let mut verifier = MockFaceVerifier::new();
        verifier.expect_verify().never();
        let state = state(verifier, &dir, 1024);

        let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
        let request = test::TestRequest::post()
            .uri("/compare-faces")
            .set_json(json!({}))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(response).await;
        assert!(body.error.contains("'image'"));
        assert!(body.error.contains("'saved_image'"));
        assert_eq!(state.health.get_metrics().processed_requests, 0);
    }

    #[actix_web::test]
    async fn test_compare_faces_rejects_oversized_body() {
        let dir = TempDir::new().unwrap();
        let mut verifier = MockFaceVerifier::new();
        verifier.expect_verify().never();
        let state = state(verifier, &dir, 16);

        let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
        let request = test::TestRequest::post()
            .uri("/compare-faces")
            .set_json(json!({ "image": "aGVsbG8=", "saved_image": "aGVsbG8=" }))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: ErrorResponse = test::read_body_json(response).await;
        assert_eq!(body.error, UNREADABLE_BODY_MESSAGE);
    }
}
