//! Error types for the audio processing pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while processing audio files.
///
/// The pure analysis functions never fail on well-formed input; they return
/// defined degenerate values instead (negative-infinity level, no-op trim).
/// Failures originate at the I/O boundary: decoding, encoding, filesystem.
#[derive(Debug, Error)]
pub enum Error {
    /// A zero-length or out-of-bounds sample range was passed to analysis.
    #[error("invalid sample range: {0}")]
    InvalidRange(String),

    /// The input file could not be decoded.
    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// The output file could not be encoded.
    #[error("failed to encode {}: {reason}", .path.display())]
    Encode { path: PathBuf, reason: String },

    /// The file extension names no supported container format.
    #[error("unsupported audio format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Filesystem error with the offending path attached.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
