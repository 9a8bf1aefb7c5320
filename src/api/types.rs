// src/api/types.rs
use serde::{Deserialize, Serialize};

use crate::core::{services::health::HealthMetrics, types::VerificationOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub verified: bool,
    pub distance: f64,
}

impl From<VerificationOutcome> for ComparisonResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            verified: outcome.verified,
            distance: outcome.distance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(flatten)]
    pub metrics: HealthMetrics,
}
