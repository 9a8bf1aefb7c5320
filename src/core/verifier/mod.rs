// src/core/verifier/mod.rs
mod command;

use std::path::Path;

use async_trait::async_trait;

use crate::{core::types::VerificationOutcome, utils::error::Result};

pub use command::CommandVerifier;

/// The external face-verification capability.
///
/// Implementations receive two image files that exist for the duration of the call and
/// report failures (no face found, unreadable image, model errors) as
/// [`GatewayError::Verification`](crate::utils::error::GatewayError::Verification).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaceVerifier: Send + Sync {
    async fn verify(&self, first: &Path, second: &Path) -> Result<VerificationOutcome>;
}
