//! MP3 encoding through LAME.

use std::fs;
use std::path::Path;

use mp3lame_encoder::{Birtate, Builder, FlushNoGap, InterleavedPcm, MonoPcm, Quality};

use crate::audio::AudioBuffer;
use crate::error::{Error, Result};

fn encode_error(path: &Path, reason: impl std::fmt::Debug) -> Error {
    Error::Encode {
        path: path.to_path_buf(),
        reason: format!("{reason:?}"),
    }
}

/// Closest LAME bitrate preset at or below the requested kbit/s.
fn bitrate_preset(kbps: u32) -> Birtate {
    match kbps {
        0..=95 => Birtate::Kbps64,
        96..=111 => Birtate::Kbps96,
        112..=127 => Birtate::Kbps112,
        128..=159 => Birtate::Kbps128,
        160..=191 => Birtate::Kbps160,
        192..=223 => Birtate::Kbps192,
        224..=255 => Birtate::Kbps224,
        256..=319 => Birtate::Kbps256,
        _ => Birtate::Kbps320,
    }
}

/// Encode a PCM buffer to an MP3 file at the given bitrate.
///
/// Samples are converted to 16-bit integers with saturation. LAME handles
/// mono and stereo only.
pub fn encode_mp3(buffer: &AudioBuffer, path: &Path, bitrate_kbps: u32) -> Result<()> {
    if buffer.channels == 0 || buffer.channels > 2 {
        return Err(Error::Encode {
            path: path.to_path_buf(),
            reason: format!("mp3 supports 1 or 2 channels, got {}", buffer.channels),
        });
    }

    let mut builder = Builder::new().ok_or_else(|| Error::Encode {
        path: path.to_path_buf(),
        reason: "failed to create LAME encoder".to_string(),
    })?;
    builder
        .set_num_channels(buffer.channels as u8)
        .map_err(|e| encode_error(path, e))?;
    builder
        .set_sample_rate(buffer.sample_rate)
        .map_err(|e| encode_error(path, e))?;
    builder
        .set_brate(bitrate_preset(bitrate_kbps))
        .map_err(|e| encode_error(path, e))?;
    builder
        .set_quality(Quality::Best)
        .map_err(|e| encode_error(path, e))?;
    let mut encoder = builder.build().map_err(|e| encode_error(path, e))?;

    let pcm: Vec<i16> = buffer
        .samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16)
        .collect();

    let mut out = Vec::with_capacity(mp3lame_encoder::max_required_buffer_size(
        pcm.len() / buffer.channels as usize,
    ));
    match buffer.channels {
        1 => encoder
            .encode_to_vec(MonoPcm(&pcm), &mut out)
            .map_err(|e| encode_error(path, e))?,
        _ => encoder
            .encode_to_vec(InterleavedPcm(&pcm), &mut out)
            .map_err(|e| encode_error(path, e))?,
    };
    encoder
        .flush_to_vec::<FlushNoGap>(&mut out)
        .map_err(|e| encode_error(path, e))?;

    fs::write(path, &out).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!(
        "encoded {} ({} bytes at {bitrate_kbps} kbit/s)",
        path.display(),
        out.len()
    );
    Ok(())
}
