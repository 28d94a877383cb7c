//! # songprep
//!
//! Batch post-processing for recorded audio files: trimming excess leading
//! and trailing silence while keeping a configurable cushion, and raising
//! quiet recordings to a target loudness.
//!
//! The analysis core ([`analysis`]) is pure and synchronous and operates on
//! decoded PCM buffers; container handling ([`codec`]) and filename cleanup
//! ([`names`]) sit at the edges.
//!
//! ```no_run
//! use songprep::{codec, trim_silence, TrimPolicy};
//!
//! let buffer = codec::decode(std::path::Path::new("take.mp3"))?;
//! let (trimmed, decision) = trim_silence(&buffer, &TrimPolicy::default());
//! println!("kept [{}, {})ms", decision.start_trim_ms, decision.end_trim_ms);
//! codec::encode_mp3(&trimmed, std::path::Path::new("take_trimmed.mp3"), 128)?;
//! # Ok::<(), songprep::Error>(())
//! ```

pub mod analysis;
pub mod audio;
pub mod codec;
pub mod config;
pub mod error;
pub mod names;

// Re-export key functionality for easy access
pub use analysis::gain::{normalize, GainDecision};
pub use analysis::level::dbfs;
pub use analysis::silence::{detect_silence, SilenceInterval};
pub use analysis::trim::{apply_trim, compute_trim, trim_silence, TrimDecision};
pub use audio::AudioBuffer;
pub use config::{NormalizePolicy, TrimPolicy};
pub use error::{Error, Result};
