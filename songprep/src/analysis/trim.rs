//! Trim-boundary computation from detected silence intervals.

use crate::analysis::silence::{self, SilenceInterval};
use crate::audio::AudioBuffer;
use crate::config::TrimPolicy;

/// The committed trim window `[start_trim_ms, end_trim_ms)`.
///
/// Invariant: `0 <= start_trim_ms <= end_trim_ms <= duration_ms`. A
/// computation that would violate it is corrected to the full-buffer range
/// instead of propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimDecision {
    pub start_trim_ms: u64,
    pub end_trim_ms: u64,
}

impl TrimDecision {
    /// The no-op decision spanning the whole buffer.
    pub fn full(duration_ms: u64) -> Self {
        Self {
            start_trim_ms: 0,
            end_trim_ms: duration_ms,
        }
    }

    /// True when applying the decision leaves the buffer untouched.
    pub fn is_noop(&self, duration_ms: u64) -> bool {
        self.start_trim_ms == 0 && self.end_trim_ms == duration_ms
    }
}

/// Decide how much leading and trailing silence to cut.
///
/// Only a first interval starting at 0 (a true leading run) and a last
/// interval ending at `duration_ms` (a true trailing run) are acted upon;
/// mid-file silence is intentionally left untouched. A run is trimmed down
/// to exactly `silence_to_leave_ms`; a run no longer than that cushion is
/// kept as is. The two decisions are independent of each other.
pub fn compute_trim(
    duration_ms: u64,
    intervals: &[SilenceInterval],
    policy: &TrimPolicy,
) -> TrimDecision {
    let mut start_trim = 0u64;
    let mut end_trim = duration_ms;

    if intervals.is_empty() {
        log::debug!("no silence intervals detected, nothing to trim");
        return TrimDecision::full(duration_ms);
    }
    log::debug!("silence intervals: {intervals:?} | duration: {duration_ms}ms");

    if let Some(first) = intervals.first() {
        if first.start_ms == 0 {
            let lead_len = first.end_ms;
            if lead_len > policy.silence_to_leave_ms {
                start_trim = lead_len - policy.silence_to_leave_ms;
                log::info!(
                    "trimming leading silence from {lead_len}ms to {}ms, start trim at {start_trim}ms",
                    policy.silence_to_leave_ms
                );
            } else {
                log::debug!(
                    "leading silence ({lead_len}ms) within {}ms cushion, no leading trim",
                    policy.silence_to_leave_ms
                );
            }
        }
    }

    if let Some(last) = intervals.last() {
        if last.end_ms == duration_ms {
            let trail_len = last.len_ms();
            if trail_len > policy.silence_to_leave_ms {
                end_trim = last.start_ms + policy.silence_to_leave_ms;
                log::info!(
                    "trimming trailing silence from {trail_len}ms to {}ms, end trim at {end_trim}ms",
                    policy.silence_to_leave_ms
                );
            } else {
                log::debug!(
                    "trailing silence ({trail_len}ms) within {}ms cushion, no trailing trim",
                    policy.silence_to_leave_ms
                );
            }
        }
    }

    // Degenerate interval sets (e.g. one interval spanning the whole buffer)
    // can cross the boundaries over; fall back to the no-op trim.
    if start_trim > end_trim {
        log::warn!(
            "computed start trim ({start_trim}ms) is past end trim ({end_trim}ms), \
             resetting to the full buffer"
        );
        return TrimDecision::full(duration_ms);
    }

    TrimDecision {
        start_trim_ms: start_trim,
        end_trim_ms: end_trim,
    }
}

/// Extract the frames of the committed trim window.
///
/// A no-op decision returns a buffer logically identical to the input.
pub fn apply_trim(buffer: &AudioBuffer, decision: &TrimDecision) -> AudioBuffer {
    if decision.is_noop(buffer.duration_ms()) {
        return buffer.clone();
    }
    buffer.slice_ms(decision.start_trim_ms, decision.end_trim_ms)
}

/// Detect silence, compute the trim window and apply it in one pass.
pub fn trim_silence(buffer: &AudioBuffer, policy: &TrimPolicy) -> (AudioBuffer, TrimDecision) {
    let intervals = silence::detect_silence(
        buffer,
        policy.silence_threshold_dbfs,
        policy.min_silence_len_ms,
    );
    let decision = compute_trim(buffer.duration_ms(), &intervals, policy);
    (apply_trim(buffer, &decision), decision)
}
