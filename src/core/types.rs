// src/core/types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::{GatewayError, Result};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Parameters 'image' and 'saved_image' are required.";

/// A validated comparison request. Both payloads are still base64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub image: String,
    pub saved_image: String,
}

impl ComparisonRequest {
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| GatewayError::Validation(REQUIRED_FIELDS_MESSAGE.into()))?;

        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(GatewayError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
        };

        match (take_field(&mut fields, "image"), take_field(&mut fields, "saved_image")) {
            (Some(image), Some(saved_image)) => Ok(Self {
                image: image?,
                saved_image: saved_image?,
            }),
            _ => Err(GatewayError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        }
    }
}

/// `None` when the field is absent or null.
fn take_field(fields: &mut Map<String, Value>, name: &str) -> Option<Result<String>> {
    match fields.remove(name)? {
        Value::Null => None,
        Value::String(encoded) => Some(Ok(encoded)),
        _ => Some(Err(GatewayError::Validation(format!(
            "Parameter '{}' must be a base64 string.",
            name
        )))),
    }
}

/// What the external verifier reports for a pair of images.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub verified: bool,
    pub distance: f64,
}
