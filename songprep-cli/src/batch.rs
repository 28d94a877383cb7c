//! Batch execution: directory enumeration and the per-file worker pool.
//!
//! Files are independent, so each runs as its own blocking task with no
//! shared state. One file's failure is logged and counted, never fatal to
//! the batch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

/// Non-recursive listing of the files in `dir` carrying `extension`
/// (case-insensitive), sorted for deterministic processing order.
pub fn list_files(dir: &Path, extension: &str) -> songprep::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| songprep::Error::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| songprep::Error::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matched = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matched {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Run `job` over every file on a bounded pool of blocking workers.
///
/// Returns the number of failed files; the caller turns that into the
/// process exit status.
pub async fn run<F>(files: Vec<PathBuf>, workers: usize, job: F) -> usize
where
    F: Fn(&Path) -> songprep::Result<PathBuf> + Send + Sync + 'static,
{
    let total = files.len();
    if total == 0 {
        info!("no matching files found, nothing to do");
        return 0;
    }
    info!("processing {total} file(s) with {workers} worker(s)");

    let progress = ProgressBar::new(total as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("Internal Error: Failed to set progress bar style")
            .progress_chars("#>-"),
    );
    progress.set_message("processing");

    let job = Arc::new(job);
    let results: Vec<(PathBuf, Result<PathBuf, String>)> = stream::iter(files.into_iter().map(|path| {
        let job = Arc::clone(&job);
        let progress = progress.clone();
        async move {
            let task_path = path.clone();
            let outcome = match tokio::task::spawn_blocking(move || job(&task_path)).await {
                Ok(Ok(output)) => Ok(output),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("worker panicked: {e}")),
            };
            progress.inc(1);
            (path, outcome)
        }
    }))
    .buffer_unordered(workers.max(1))
    .collect()
    .await;
    progress.finish_with_message("done");

    let mut failed = 0usize;
    for (path, outcome) in results {
        if let Err(reason) = outcome {
            error!("{}: {reason}", path.display());
            failed += 1;
        }
    }
    info!(
        "batch complete: {} succeeded, {failed} failed",
        total - failed
    );
    failed
}
