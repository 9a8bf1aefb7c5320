use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempPath};
use tracing::{debug, warn};

use crate::utils::error::{GatewayError, Result};

const TEMP_PREFIX: &str = "face-";
const TEMP_SUFFIX: &str = ".jpg";

/// An image written to a uniquely named file, removed when the guard is dropped.
///
/// Names are random and the file is created exclusively, so concurrent requests never share a path.
#[derive(Debug)]
pub struct TempImage {
    path: PathBuf,
    guard: Option<TempPath>,
}

impl TempImage {
    /// Writes `data` into a new file under `dir`. The file is synced and closed before this returns.
    pub fn write_in(dir: &Path, data: &[u8]) -> Result<Self> {
        let mut file = Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)
            .map_err(|e| {
                GatewayError::Io(format!("Failed to create temporary image in {}: {}", dir.display(), e))
            })?;

        file.write_all(data)
            .and_then(|_| file.flush())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| {
                GatewayError::Io(format!("Failed to write temporary image {}: {}", file.path().display(), e))
            })?;

        let guard = file.into_temp_path();
        let path = guard.to_path_buf();
        debug!(path = %path.display(), bytes = data.len(), "Wrote temporary image");

        Ok(Self {
            path,
            guard: Some(guard),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        let Some(guard) = self.guard.take() else {
            return;
        };

        match guard.close() {
            Ok(()) => debug!(path = %self.path.display(), "Removed temporary image"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Temporary image already removed")
            }
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove temporary image"),
        }
    }
}
