// tests/common/mod.rs
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use tempfile::TempDir;

use face_compare_gateway::{
    api::AppState,
    core::{
        services::{comparison::ComparisonService, health::HealthService},
        types::VerificationOutcome,
        verifier::FaceVerifier,
    },
    utils::error::{GatewayError, Result},
};

pub const MAX_REQUEST_SIZE: usize = 64 * 1024;

/// Matches images by content: identical bytes verify with distance 0.0.
#[derive(Default)]
pub struct ByteMatchVerifier {
    pub calls: AtomicUsize,
}

#[async_trait]
impl FaceVerifier for ByteMatchVerifier {
    async fn verify(&self, first: &Path, second: &Path) -> Result<VerificationOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let first = fs::read(first).map_err(|e| GatewayError::Verification(e.to_string()))?;
        let second = fs::read(second).map_err(|e| GatewayError::Verification(e.to_string()))?;

        if first.is_empty() || second.is_empty() {
            return Err(GatewayError::Verification("Face could not be detected".into()));
        }

        Ok(if first == second {
            VerificationOutcome { verified: true, distance: 0.0 }
        } else {
            VerificationOutcome { verified: false, distance: 0.87 }
        })
    }
}

pub struct TestContext {
    pub temp_dir: TempDir,
    pub verifier: Arc<ByteMatchVerifier>,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let verifier = Arc::new(ByteMatchVerifier::default());
        let comparison = ComparisonService::new(verifier.clone(), temp_dir.path());

        Self {
            state: AppState::new(comparison, HealthService::new(), MAX_REQUEST_SIZE),
            temp_dir,
            verifier,
        }
    }

    pub fn verifier_calls(&self) -> usize {
        self.verifier.calls.load(Ordering::SeqCst)
    }

    pub fn remaining_files(&self) -> usize {
        fs::read_dir(self.temp_dir.path())
            .expect("Failed to list temp dir")
            .count()
    }
}

pub fn encode(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

pub fn photo_a() -> Vec<u8> {
    b"\xff\xd8\xff\xe0\x00\x10JFIF photo A".to_vec()
}

pub fn photo_b() -> Vec<u8> {
    b"\x89PNG\r\n\x1a\n photo B".to_vec()
}
