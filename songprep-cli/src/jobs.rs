//! Per-file operations: each one decodes, transforms and re-encodes a
//! single file, fully isolated from the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use songprep::{codec, names, normalize, trim_silence, NormalizePolicy, TrimPolicy};

/// Suffix for trimmed output files.
pub const TRIMMED_SUFFIX: &str = "_trimmed";
/// Suffix for normalized output files.
pub const NORMALIZED_SUFFIX: &str = "_soundincreased";

fn io_error(path: &Path, source: std::io::Error) -> songprep::Error {
    songprep::Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// `take.mp3` + `_trimmed` -> `take_trimmed.mp3`.
fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{suffix}.{ext}"),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

/// Trim leading/trailing silence and write the result next to the input.
pub fn trim_file(path: &Path, policy: &TrimPolicy, bitrate_kbps: u32) -> songprep::Result<PathBuf> {
    let buffer = codec::decode(path)?;
    let duration_ms = buffer.duration_ms();
    let (trimmed, decision) = trim_silence(&buffer, policy);

    let output = suffixed_path(path, TRIMMED_SUFFIX);
    info!(
        "{}: kept [{}, {})ms of {duration_ms}ms -> {}",
        path.display(),
        decision.start_trim_ms,
        decision.end_trim_ms,
        output.display()
    );
    codec::encode(&trimmed, &output, bitrate_kbps)?;
    Ok(output)
}

/// Raise the file to the target level if it is too quiet.
///
/// A file already at or above the target needs no output; the input path is
/// returned untouched.
pub fn normalize_file(
    path: &Path,
    policy: &NormalizePolicy,
    bitrate_kbps: u32,
) -> songprep::Result<PathBuf> {
    let buffer = codec::decode(path)?;
    let (normalized, decision) = normalize(buffer, policy)?;

    if decision.applied_db == 0.0 {
        info!("{}: sound level is sufficient, no output written", path.display());
        return Ok(path.to_path_buf());
    }

    let output = suffixed_path(path, NORMALIZED_SUFFIX);
    info!(
        "{}: +{:.2} dB -> {}",
        path.display(),
        decision.applied_db,
        output.display()
    );
    codec::encode(&normalized, &output, bitrate_kbps)?;
    Ok(output)
}

/// Re-encode a WAV file as MP3 at the target bitrate.
pub fn convert_file(path: &Path, bitrate_kbps: u32) -> songprep::Result<PathBuf> {
    let buffer = codec::decode(path)?;
    let output = path.with_extension("mp3");
    info!("converting {} -> {}", path.display(), output.display());
    codec::encode_mp3(&buffer, &output, bitrate_kbps)?;
    Ok(output)
}

/// Rename a file to its cleaned-up name.
///
/// Collision policy: a byte-identical file already at the cleaned name is a
/// duplicate, so the junk-named source is deleted instead of renamed;
/// anything else there is overwritten.
pub fn clean_file(path: &Path) -> songprep::Result<PathBuf> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let cleaned = names::clean_name(name);
    if cleaned == name {
        return Ok(path.to_path_buf());
    }

    let target = path.with_file_name(&cleaned);
    if target.exists() {
        if files_identical(path, &target)? {
            info!(
                "{}: byte-identical file already at {}, removing duplicate",
                path.display(),
                target.display()
            );
            fs::remove_file(path).map_err(|e| io_error(path, e))?;
            return Ok(target);
        }
        info!("overwriting existing {}", target.display());
        fs::remove_file(&target).map_err(|e| io_error(&target, e))?;
    }

    fs::rename(path, &target).map_err(|e| io_error(path, e))?;
    info!("renamed {} -> {}", path.display(), target.display());
    Ok(target)
}

fn files_identical(a: &Path, b: &Path) -> songprep::Result<bool> {
    let meta_a = fs::metadata(a).map_err(|e| io_error(a, e))?;
    let meta_b = fs::metadata(b).map_err(|e| io_error(b, e))?;
    if meta_a.len() != meta_b.len() {
        return Ok(false);
    }
    let bytes_a = fs::read(a).map_err(|e| io_error(a, e))?;
    let bytes_b = fs::read(b).map_err(|e| io_error(b, e))?;
    Ok(bytes_a == bytes_b)
}
