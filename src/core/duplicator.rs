use crate::config::CopyConfig;
use crate::core::Task;
use crate::utils::error::{Result, TaskError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copies `source` over `destination`, creating or truncating it.
///
/// Returns the number of bytes copied. A missing or non-file source is
/// reported against the source path; any other failure is reported against
/// the destination.
pub fn copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    let metadata = fs::metadata(source).map_err(|e| TaskError::file(source, e))?;
    if !metadata.is_file() {
        return Err(TaskError::file(
            source,
            io::Error::new(io::ErrorKind::InvalidInput, "source is not a regular file"),
        ));
    }

    tracing::debug!("Copying {} -> {}", source.display(), destination.display());
    let bytes = fs::copy(source, destination).map_err(|e| TaskError::file(destination, e))?;
    tracing::info!("Copied {} bytes to {}", bytes, destination.display());

    Ok(bytes)
}

pub struct CopyTask {
    source: PathBuf,
    destination: PathBuf,
}

impl CopyTask {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn from_config(config: &CopyConfig) -> Self {
        Self::new(&config.source, &config.destination)
    }
}

impl Task for CopyTask {
    type Output = u64;

    fn name(&self) -> &'static str {
        "file duplicator"
    }

    fn run(&self) -> Result<u64> {
        copy_file(&self.source, &self.destination)
    }
}
