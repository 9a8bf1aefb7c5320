use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use super::FaceVerifier;
use crate::{
    core::types::VerificationOutcome,
    utils::{
        config::VerifierConfig,
        error::{GatewayError, Result},
    },
};

/// Runs an external program per comparison:
/// `<program> [args...] <first> <second> [--model <model>]`.
///
/// The program must print a JSON object with `verified` and `distance` on stdout and
/// exit with status 0. Anything else is a verification failure.
#[derive(Debug, Clone)]
pub struct CommandVerifier {
    program: String,
    args: Vec<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl CommandVerifier {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            model: None,
            timeout: None,
        }
    }

    pub fn from_config(config: &VerifierConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            model: config.model().map(str::to_owned),
            timeout: config.timeout(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn command(&self, first: &Path, second: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(first).arg(second);
        if let Some(model) = &self.model {
            command.arg("--model").arg(model);
        }
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl FaceVerifier for CommandVerifier {
    async fn verify(&self, first: &Path, second: &Path) -> Result<VerificationOutcome> {
        debug!(
            program = %self.program,
            model = self.model.as_deref().unwrap_or("default"),
            "Invoking face verifier"
        );

        let mut command = self.command(first, second);
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    GatewayError::Verification(format!(
                        "{} did not finish within {:?}",
                        self.program, limit
                    ))
                })?,
            None => command.output().await,
        }
        .map_err(|e| GatewayError::Verification(format!("Failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .rev()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or("no error output");
            return Err(GatewayError::Verification(format!(
                "{} exited with {}: {}",
                self.program, output.status, reason
            )));
        }

        let outcome = parse_outcome(&output.stdout)?;
        info!(verified = outcome.verified, distance = outcome.distance, "Face verifier finished");
        Ok(outcome)
    }
}

/// Accepts either a single JSON document or log lines followed by a final JSON line.
fn parse_outcome(stdout: &[u8]) -> Result<VerificationOutcome> {
    if let Ok(outcome) = serde_json::from_slice(stdout) {
        return Ok(outcome);
    }

    let stdout = String::from_utf8_lossy(stdout);
    let last_line = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| GatewayError::Verification("Verifier produced no output".into()))?;

    serde_json::from_str(last_line)
        .map_err(|e| GatewayError::Verification(format!("Unexpected verifier output: {}", e)))
}
