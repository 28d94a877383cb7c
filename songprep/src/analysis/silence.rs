//! Silence interval detection over fixed-size analysis windows.

use crate::analysis::level;
use crate::audio::AudioBuffer;

/// Analysis window granularity. Silence boundaries are reported at this
/// precision, not sample-exact; that is an explicit non-goal.
const WINDOW_MS: u64 = 10;

/// A half-open time range `[start_ms, end_ms)` during which the local level
/// stayed at or below the silence threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilenceInterval {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl SilenceInterval {
    pub fn len_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// Scan `buffer` and report every silence interval of at least
/// `min_silence_len_ms`, in time order.
///
/// The buffer is partitioned into fixed windows; a window is quiet when its
/// level is at or below `threshold_dbfs`. Consecutive quiet windows merge
/// into one candidate, so the returned intervals never overlap and are never
/// adjacent. No quiet windows means an empty vec, not an error; an entirely
/// quiet buffer yields a single `[0, duration)` interval.
pub fn detect_silence(
    buffer: &AudioBuffer,
    threshold_dbfs: f32,
    min_silence_len_ms: u64,
) -> Vec<SilenceInterval> {
    let duration_ms = buffer.duration_ms();
    if duration_ms == 0 {
        return Vec::new();
    }

    let mut intervals = Vec::new();
    let mut quiet_start: Option<u64> = None;

    let mut window_start = 0u64;
    while window_start < duration_ms {
        let window_end = (window_start + WINDOW_MS).min(duration_ms);
        // A window too short to hold a single frame counts as quiet.
        let window_level = level::dbfs(buffer.sample_range_ms(window_start, window_end))
            .unwrap_or(f32::NEG_INFINITY);

        if window_level <= threshold_dbfs {
            if quiet_start.is_none() {
                quiet_start = Some(window_start);
            }
        } else if let Some(start) = quiet_start.take() {
            push_candidate(&mut intervals, start, window_start, min_silence_len_ms);
        }

        window_start = window_end;
    }

    if let Some(start) = quiet_start {
        push_candidate(&mut intervals, start, duration_ms, min_silence_len_ms);
    }

    log::debug!(
        "detected {} silence interval(s) in {}ms of audio",
        intervals.len(),
        duration_ms
    );
    intervals
}

fn push_candidate(intervals: &mut Vec<SilenceInterval>, start_ms: u64, end_ms: u64, min_len_ms: u64) {
    if end_ms - start_ms >= min_len_ms {
        intervals.push(SilenceInterval { start_ms, end_ms });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 kHz mono keeps milliseconds and frames aligned one-to-one.
    fn buffer_ms(sections: &[(u64, f32)]) -> AudioBuffer {
        let mut samples = Vec::new();
        for &(len_ms, amplitude) in sections {
            samples.extend(std::iter::repeat(amplitude).take(len_ms as usize));
        }
        AudioBuffer::new(samples, 1000, 1)
    }

    #[test]
    fn no_quiet_windows_yields_empty_sequence() {
        let buffer = buffer_ms(&[(1000, 0.5)]);
        assert!(detect_silence(&buffer, -45.0, 100).is_empty());
    }

    #[test]
    fn entirely_quiet_buffer_yields_single_full_interval() {
        let buffer = buffer_ms(&[(1000, 0.0)]);
        let intervals = detect_silence(&buffer, -45.0, 100);
        assert_eq!(
            intervals,
            vec![SilenceInterval {
                start_ms: 0,
                end_ms: 1000
            }]
        );
    }

    #[test]
    fn leading_and_trailing_runs_are_separate_intervals() {
        let buffer = buffer_ms(&[(300, 0.0), (400, 0.5), (300, 0.0)]);
        let intervals = detect_silence(&buffer, -45.0, 100);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0], SilenceInterval { start_ms: 0, end_ms: 300 });
        assert_eq!(
            intervals[1],
            SilenceInterval {
                start_ms: 700,
                end_ms: 1000
            }
        );
    }

    #[test]
    fn runs_shorter_than_minimum_are_discarded() {
        let buffer = buffer_ms(&[(200, 0.5), (50, 0.0), (200, 0.5)]);
        assert!(detect_silence(&buffer, -45.0, 100).is_empty());
    }

    #[test]
    fn intervals_are_ordered_and_disjoint() {
        let buffer = buffer_ms(&[
            (200, 0.0),
            (100, 0.5),
            (150, 0.0),
            (100, 0.5),
            (250, 0.0),
        ]);
        let intervals = detect_silence(&buffer, -45.0, 100);
        assert_eq!(intervals.len(), 3);
        for pair in intervals.windows(2) {
            assert!(pair[0].end_ms < pair[1].start_ms);
        }
    }

    #[test]
    fn level_equal_to_threshold_counts_as_quiet() {
        // Threshold set to the buffer's own constant level: the comparison
        // is inclusive, so every window is quiet.
        let buffer = buffer_ms(&[(500, 0.01)]);
        let threshold = level::dbfs(&buffer.samples).unwrap();
        let intervals = detect_silence(&buffer, threshold, 100);
        assert_eq!(
            intervals,
            vec![SilenceInterval {
                start_ms: 0,
                end_ms: 500
            }]
        );
    }

    #[test]
    fn mid_file_silence_is_reported_but_bounded() {
        let buffer = buffer_ms(&[(300, 0.5), (400, 0.0), (300, 0.5)]);
        let intervals = detect_silence(&buffer, -45.0, 100);
        assert_eq!(
            intervals,
            vec![SilenceInterval {
                start_ms: 300,
                end_ms: 700
            }]
        );
    }
}
