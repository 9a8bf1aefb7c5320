use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::{
    core::{
        image::{decode_base64_image, TempImage},
        types::{ComparisonRequest, VerificationOutcome},
        verifier::{CommandVerifier, FaceVerifier},
    },
    utils::{
        config::VerifierConfig,
        error::{GatewayError, Result},
    },
};

/// Decodes a pair of images, stages them on disk and hands them to the verifier.
///
/// Staged files live only for the duration of [`ComparisonService::compare`].
pub struct ComparisonService {
    verifier: Arc<dyn FaceVerifier>,
    temp_dir: PathBuf,
}

impl ComparisonService {
    pub fn new(verifier: Arc<dyn FaceVerifier>, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            verifier,
            temp_dir: temp_dir.into(),
        }
    }

    /// Builds the service around a [`CommandVerifier`], creating the temp directory if needed.
    pub fn from_config(config: &VerifierConfig) -> Result<Self> {
        let temp_dir = config.temp_dir();
        std::fs::create_dir_all(&temp_dir).map_err(|e| {
            GatewayError::Config(format!("Cannot use temp directory {}: {}", temp_dir.display(), e))
        })?;

        info!(
            program = %config.program,
            model = config.model().unwrap_or("default"),
            temp_dir = %temp_dir.display(),
            "Configured face verifier"
        );

        Ok(Self::new(Arc::new(CommandVerifier::from_config(config)), temp_dir))
    }

    pub async fn compare(&self, request: &ComparisonRequest) -> Result<VerificationOutcome> {
        let span = info_span!("compare_faces", request_id = %Uuid::new_v4());

        async move {
            let captured = decode_base64_image(&request.image)?;
            let saved = decode_base64_image(&request.saved_image)?;

            // Both guards are dropped on every return path below, removing the files.
            let captured_file = TempImage::write_in(&self.temp_dir, &captured)?;
            let saved_file = TempImage::write_in(&self.temp_dir, &saved)?;

            let outcome = self
                .verifier
                .verify(captured_file.path(), saved_file.path())
                .await?;

            info!(verified = outcome.verified, distance = outcome.distance, "Comparison finished");
            Ok(outcome)
        }
        .instrument(span)
        .await
    }
}
