use std::path::PathBuf;

use thiserror::Error;

/// Failure to inspect a file.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Anything else that went wrong while opening or reading the file: not a HDF5 file, permission
    /// denied, unsupported structure, ..
    #[error("{0}")]
    OpenOrRead(#[from] hdf5::Error),
}

impl InspectError {
    /// Stable tag for machine readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            InspectError::FileNotFound(_) => "file_not_found",
            InspectError::OpenOrRead(_) => "open_or_read",
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;
