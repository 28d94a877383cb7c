//! WAV encoding through hound.

use std::path::Path;

use crate::audio::AudioBuffer;
use crate::error::{Error, Result};

fn encode_error(path: &Path, reason: impl ToString) -> Error {
    Error::Encode {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Write a PCM buffer as a 16-bit integer WAV file.
pub fn encode_wav(buffer: &AudioBuffer, path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.channels,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| encode_error(path, e))?;
    for &sample in &buffer.samples {
        let quantized = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        writer
            .write_sample(quantized)
            .map_err(|e| encode_error(path, e))?;
    }
    writer.finalize().map_err(|e| encode_error(path, e))?;

    log::debug!("encoded {}", path.display());
    Ok(())
}
