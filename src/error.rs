use thiserror::Error;

/// Errors from the pure value encoders.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EncodeError {
    #[error("Cannot encode non-finite value: {0}")]
    NonFinite(f64),
}

/// The primary error type for the geotagger crate.
#[derive(Error, Debug)]
pub enum GeotaggerError {
    #[error("Exiftool failed to execute or process the file")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("Value encoding failed: {0}")]
    Encode(#[from] EncodeError),
}
