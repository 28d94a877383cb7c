//! Loudness normalization: raise quiet buffers to a target level.

use crate::analysis::level;
use crate::audio::AudioBuffer;
use crate::config::NormalizePolicy;
use crate::error::Result;

/// The gain committed by a normalization pass; zero when no change was
/// required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainDecision {
    pub applied_db: f32,
}

impl GainDecision {
    pub fn none() -> Self {
        Self { applied_db: 0.0 }
    }
}

/// Measure the buffer's average level and, if it is below the target, apply
/// the linear gain that raises it to the target.
///
/// Samples that would exceed full scale after gain saturate at ±1.0 instead
/// of wrapping. A buffer at or above the target is returned unchanged, as is
/// a fully silent buffer (no finite gain can raise it). Errors only on a
/// zero-length buffer.
pub fn normalize(
    mut buffer: AudioBuffer,
    policy: &NormalizePolicy,
) -> Result<(AudioBuffer, GainDecision)> {
    let current = level::dbfs(&buffer.samples)?;

    if current >= policy.target_dbfs {
        log::info!(
            "average level {current:.2} dBFS already at or above target {:.2} dBFS, no gain applied",
            policy.target_dbfs
        );
        return Ok((buffer, GainDecision::none()));
    }

    if current == f32::NEG_INFINITY {
        log::warn!("buffer is silent, skipping normalization");
        return Ok((buffer, GainDecision::none()));
    }

    let gain_db = policy.target_dbfs - current;
    let factor = 10.0f32.powf(gain_db / 20.0);
    for sample in buffer.samples.iter_mut() {
        *sample = (*sample * factor).clamp(-1.0, 1.0);
    }

    log::info!("average level {current:.2} dBFS, volume increased by {gain_db:.2} dB (x{factor:.4})");
    Ok((buffer, GainDecision { applied_db: gain_db }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_buffer(amplitude: f32) -> AudioBuffer {
        AudioBuffer::new(vec![amplitude; 10_000], 1000, 1)
    }

    fn target(dbfs: f32) -> NormalizePolicy {
        NormalizePolicy { target_dbfs: dbfs }
    }

    #[test]
    fn quiet_buffer_is_raised_to_the_target() {
        // -20 dBFS against a -15 dBFS target is +5 dB,
        // a linear factor of about 1.7783.
        let buffer = constant_buffer(0.1); // -20 dBFS
        let (raised, decision) = normalize(buffer, &target(-15.0)).unwrap();

        assert!((decision.applied_db - 5.0).abs() < 1e-3);
        assert!((raised.samples[0] - 0.17783).abs() < 1e-4);
        let after = level::dbfs(&raised.samples).unwrap();
        assert!((after - (-15.0)).abs() < 0.01);
    }

    #[test]
    fn loud_buffer_is_byte_for_byte_unchanged() {
        let buffer = constant_buffer(10.0f32.powf(-10.0 / 20.0)); // -10 dBFS
        let original = buffer.clone();
        let (kept, decision) = normalize(buffer, &target(-15.0)).unwrap();

        assert_eq!(decision.applied_db, 0.0);
        assert_eq!(kept, original);
    }

    #[test]
    fn silent_buffer_gets_no_gain() {
        let (kept, decision) = normalize(constant_buffer(0.0), &target(-15.0)).unwrap();
        assert_eq!(decision.applied_db, 0.0);
        assert!(kept.samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn empty_buffer_is_an_error() {
        let empty = AudioBuffer::new(Vec::new(), 1000, 1);
        assert!(normalize(empty, &target(-15.0)).is_err());
    }

    #[test]
    fn scaled_samples_saturate_instead_of_wrapping() {
        // Mostly quiet with a few near-full-scale peaks: average is low, so
        // a big gain applies, and the peaks must clamp at ±1.0.
        let mut samples = vec![0.01f32; 10_000];
        samples[0] = 0.95;
        samples[1] = -0.95;
        let buffer = AudioBuffer::new(samples, 1000, 1);

        let (raised, decision) = normalize(buffer, &target(-15.0)).unwrap();
        assert!(decision.applied_db > 0.0);
        assert_eq!(raised.samples[0], 1.0);
        assert_eq!(raised.samples[1], -1.0);
        assert!(raised.samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn resulting_level_is_monotonic() {
        for amplitude in [0.02f32, 0.05, 0.1, 0.3, 0.7] {
            let before = level::dbfs(&[amplitude]).unwrap();
            let (after_buf, _) = normalize(constant_buffer(amplitude), &target(-15.0)).unwrap();
            let after = level::dbfs(&after_buf.samples).unwrap();
            assert!(after >= before.min(-15.0) - 0.01);
        }
    }
}
