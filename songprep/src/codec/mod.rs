//! The codec boundary: decoding input containers and encoding results.
//!
//! The analysis core consumes and produces generic PCM buffers; everything
//! container-specific stays behind this module.

use std::path::Path;

use crate::audio::AudioBuffer;
use crate::error::{Error, Result};

pub mod decode;
pub mod mp3;
pub mod wav;

pub use decode::decode;
pub use mp3::encode_mp3;
pub use wav::encode_wav;

/// Encode a buffer to the container format named by the output extension.
///
/// `bitrate_kbps` only applies to MP3 output.
pub fn encode(buffer: &AudioBuffer, path: &Path, bitrate_kbps: u32) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "mp3" => encode_mp3(buffer, path, bitrate_kbps),
        "wav" => encode_wav(buffer, path),
        _ => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
