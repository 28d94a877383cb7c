//! Pure signal analysis over decoded PCM buffers.
//!
//! Everything in here is synchronous and side-effect free: level
//! measurement, silence-interval detection, trim-boundary computation and
//! gain application. I/O lives in [`crate::codec`].

pub mod gain;
pub mod level;
pub mod silence;
pub mod trim;
