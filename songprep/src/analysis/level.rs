//! Average signal level measurement in dBFS.

use crate::error::{Error, Result};

/// Compute the average level of a sample range in dBFS.
///
/// The level is the root-mean-square amplitude relative to full scale (1.0
/// for normalized f32 PCM), converted with `20 * log10(rms)`. An all-zero
/// range yields `f32::NEG_INFINITY` rather than an error; a zero-length
/// range is a precondition violation.
pub fn dbfs(samples: &[f32]) -> Result<f32> {
    if samples.is_empty() {
        return Err(Error::InvalidRange(
            "cannot measure level of a zero-length sample range".to_string(),
        ));
    }

    let sum_sq: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    let rms = (sum_sq / samples.len() as f64).sqrt();

    if rms <= 0.0 {
        return Ok(f32::NEG_INFINITY);
    }
    Ok((20.0 * rms.log10()) as f32)
}
