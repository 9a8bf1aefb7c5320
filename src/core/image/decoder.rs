use std::borrow::Cow;

use base64::{engine::general_purpose, Engine as _};

use crate::utils::error::{GatewayError, Result};

const DATA_URI_PREFIX: &str = "data:image";

/// Decodes a standard, padded base64 image, stripping a `data:image/...;base64,` header if present.
///
/// ASCII whitespace is ignored so that payloads wrapped by MIME encoders still decode.
/// Decoding is otherwise strict: padding is required and the unused bits of the final
/// symbol must be zero, so non-canonical input such as `QR==` is rejected.
pub fn decode_base64_image(encoded: &str) -> Result<Vec<u8>> {
    let payload = if encoded.starts_with(DATA_URI_PREFIX) {
        encoded
            .split_once(',')
            .map(|(_, payload)| payload)
            .ok_or_else(|| GatewayError::Decode("data URI is missing the ',' separator".into()))?
    } else {
        encoded
    };

    let payload: Cow<'_, str> = if payload.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(payload.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(payload)
    };

    general_purpose::STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| GatewayError::Decode(e.to_string()))
}
