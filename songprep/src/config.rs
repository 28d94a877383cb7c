//! Policy structs for trimming and normalization.
//!
//! One instance per run; passed explicitly into each operation instead of
//! living in process-wide state. Call sites may build their own to override
//! any field.

/// Local level at or below which a window counts as silent.
pub const DEFAULT_SILENCE_THRESHOLD_DBFS: f32 = -45.0;

/// Shortest quiet run that is reported as a silence interval.
pub const DEFAULT_MIN_SILENCE_LEN_MS: u64 = 100;

/// Amount of detected silence preserved at a trim boundary.
pub const DEFAULT_SILENCE_TO_LEAVE_MS: u64 = 200;

/// Level a quiet recording is raised to.
pub const DEFAULT_TARGET_DBFS: f32 = -15.0;

/// Output bitrate for MP3 encoding.
pub const DEFAULT_BITRATE_KBPS: u32 = 128;

/// Configuration for silence detection and trimming.
#[derive(Debug, Clone)]
pub struct TrimPolicy {
    /// Silence threshold in dBFS.
    pub silence_threshold_dbfs: f32,

    /// Minimum length of silence in ms to detect.
    pub min_silence_len_ms: u64,

    /// Silence in ms to leave at a boundary when the detected run is longer.
    pub silence_to_leave_ms: u64,
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self {
            silence_threshold_dbfs: DEFAULT_SILENCE_THRESHOLD_DBFS,
            min_silence_len_ms: DEFAULT_MIN_SILENCE_LEN_MS,
            silence_to_leave_ms: DEFAULT_SILENCE_TO_LEAVE_MS,
        }
    }
}

/// Configuration for loudness normalization.
#[derive(Debug, Clone)]
pub struct NormalizePolicy {
    /// Target average level in dBFS.
    pub target_dbfs: f32,
}

impl Default for NormalizePolicy {
    fn default() -> Self {
        Self {
            target_dbfs: DEFAULT_TARGET_DBFS,
        }
    }
}
