//! End-to-end analysis pipeline tests on synthetic buffers, codec-free.

use songprep::{
    detect_silence, dbfs, normalize, trim_silence, AudioBuffer, NormalizePolicy, TrimPolicy,
};

// 1 kHz mono: one frame per millisecond, so durations are exact.
fn recording(lead_silence_ms: u64, signal_ms: u64, trail_silence_ms: u64, amplitude: f32) -> AudioBuffer {
    let mut samples = vec![0.0f32; lead_silence_ms as usize];
    samples.extend(vec![amplitude; signal_ms as usize]);
    samples.extend(vec![0.0f32; trail_silence_ms as usize]);
    AudioBuffer::new(samples, 1000, 1)
}

#[test]
fn trim_cuts_both_ends_down_to_the_cushion() {
    let buffer = recording(700, 9000, 300, 0.5);
    let policy = TrimPolicy::default(); // leave 200 ms

    let (trimmed, decision) = trim_silence(&buffer, &policy);

    assert_eq!(decision.start_trim_ms, 500);
    assert_eq!(decision.end_trim_ms, 9900);
    assert_eq!(trimmed.duration_ms(), 9400);

    // 200 ms cushion on each side, signal in between.
    assert!(trimmed.samples[..200].iter().all(|&s| s == 0.0));
    assert!(trimmed.samples[trimmed.samples.len() - 200..]
        .iter()
        .all(|&s| s == 0.0));
    assert_eq!(trimmed.samples[200], 0.5);
}

#[test]
fn short_edges_survive_a_trim_pass_unchanged() {
    let buffer = recording(150, 9650, 200, 0.5);
    let (trimmed, decision) = trim_silence(&buffer, &TrimPolicy::default());

    assert!(decision.is_noop(buffer.duration_ms()));
    assert_eq!(trimmed, buffer);
}

#[test]
fn trim_then_retrim_is_stable() {
    let buffer = recording(1500, 8000, 900, 0.5);
    let policy = TrimPolicy::default();

    let (once, _) = trim_silence(&buffer, &policy);
    let (twice, second) = trim_silence(&once, &policy);

    assert!(second.is_noop(once.duration_ms()));
    assert_eq!(twice, once);
}

#[test]
fn fully_silent_recording_is_returned_whole() {
    let buffer = recording(0, 0, 10_000, 0.5);
    let intervals = detect_silence(&buffer, -45.0, 100);
    assert_eq!(intervals.len(), 1);
    assert_eq!((intervals[0].start_ms, intervals[0].end_ms), (0, 10_000));

    let (trimmed, decision) = trim_silence(&buffer, &TrimPolicy::default());
    assert!(decision.is_noop(buffer.duration_ms()));
    assert_eq!(trimmed.duration_ms(), 10_000);
}

#[test]
fn trim_then_normalize_raises_the_kept_signal() {
    // Quiet recording: 0.05 amplitude is about -26 dBFS.
    let buffer = recording(700, 9000, 300, 0.05);
    let (trimmed, _) = trim_silence(&buffer, &TrimPolicy::default());

    let before = dbfs(&trimmed.samples).unwrap();
    let (raised, decision) = normalize(trimmed, &NormalizePolicy::default()).unwrap();
    let after = dbfs(&raised.samples).unwrap();

    assert!(decision.applied_db > 0.0);
    assert!((after - (-15.0)).abs() < 0.05);
    assert!(after > before);
    // The cushion silence stays silent.
    assert!(raised.samples[..200].iter().all(|&s| s == 0.0));
}

#[test]
fn normalize_leaves_loud_recordings_alone() {
    let buffer = recording(0, 10_000, 0, 0.5); // about -6 dBFS
    let original = buffer.clone();
    let (kept, decision) = normalize(buffer, &NormalizePolicy::default()).unwrap();

    assert_eq!(decision.applied_db, 0.0);
    assert_eq!(kept, original);
}
