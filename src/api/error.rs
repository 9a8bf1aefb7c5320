use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use super::types::ErrorResponse;
use crate::utils::error::GatewayError;

pub const PROCESSING_FAILURE_MESSAGE: &str = "Failed to compare faces.";

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            GatewayError::Validation(message) => ErrorResponse::new(message.as_str()),
            other => ErrorResponse::with_details(PROCESSING_FAILURE_MESSAGE, other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
