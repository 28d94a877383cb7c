//! Decoded PCM audio, the unit of work for every pipeline stage.

/// A decoded PCM buffer: interleaved f32 samples normalized to [-1.0, 1.0].
///
/// Each stage of the pipeline owns the buffer it is given and hands a new
/// one off; buffers are never shared across files or mutated concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Interleaved sample frames.
    pub samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
}

impl AudioBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Number of sample frames (one frame spans all channels).
    pub fn frame_count(&self) -> u64 {
        self.samples.len() as u64 / u64::from(self.channels.max(1))
    }

    /// Total duration in milliseconds, derived from frame count and rate.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frame_count() * 1000 / u64::from(self.sample_rate)
    }

    /// Interleaved sample index of the frame at `ms`, clamped to the buffer.
    fn sample_index_at_ms(&self, ms: u64) -> usize {
        let frame = ms * u64::from(self.sample_rate) / 1000;
        let index = frame as usize * self.channels.max(1) as usize;
        index.min(self.samples.len())
    }

    /// Borrow the samples of the half-open range `[start_ms, end_ms)`.
    ///
    /// Boundaries are clamped to the buffer; a reversed range yields an
    /// empty slice.
    pub fn sample_range_ms(&self, start_ms: u64, end_ms: u64) -> &[f32] {
        let start = self.sample_index_at_ms(start_ms);
        let end = self.sample_index_at_ms(end_ms).max(start);
        &self.samples[start..end]
    }

    /// Copy the frames of `[start_ms, end_ms)` into a new buffer.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> AudioBuffer {
        AudioBuffer {
            samples: self.sample_range_ms(start_ms, end_ms).to_vec(),
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }
}
