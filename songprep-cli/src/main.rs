use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use songprep::{config, NormalizePolicy, TrimPolicy};

mod batch;
mod jobs;

#[derive(Subcommand, Debug)]
enum Mode {
    /// Trim excess leading and trailing silence from every MP3 in a directory
    #[command(alias = "t")]
    Trim {
        /// Directory to scan for .mp3 files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Silence threshold in dBFS
        #[arg(
            long,
            value_name = "DBFS",
            default_value_t = config::DEFAULT_SILENCE_THRESHOLD_DBFS,
            allow_negative_numbers = true
        )]
        threshold: f32,

        /// Minimum length of silence in ms to detect
        #[arg(long, value_name = "MS", default_value_t = config::DEFAULT_MIN_SILENCE_LEN_MS)]
        min_silence: u64,

        /// Silence in ms to leave at each trimmed boundary
        #[arg(long, value_name = "MS", default_value_t = config::DEFAULT_SILENCE_TO_LEAVE_MS)]
        leave: u64,

        /// Output bitrate in kbit/s
        #[arg(long, value_name = "KBPS", default_value_t = config::DEFAULT_BITRATE_KBPS)]
        bitrate: u32,
    },

    /// Raise every MP3 below the target level to the target
    #[command(alias = "n")]
    Normalize {
        /// Directory to scan for .mp3 files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Target average level in dBFS
        #[arg(
            long,
            value_name = "DBFS",
            default_value_t = config::DEFAULT_TARGET_DBFS,
            allow_negative_numbers = true
        )]
        target: f32,

        /// Output bitrate in kbit/s
        #[arg(long, value_name = "KBPS", default_value_t = config::DEFAULT_BITRATE_KBPS)]
        bitrate: u32,
    },

    /// Convert every WAV in a directory to MP3
    #[command(alias = "c")]
    Convert {
        /// Directory to scan for .wav files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output bitrate in kbit/s
        #[arg(long, value_name = "KBPS", default_value_t = config::DEFAULT_BITRATE_KBPS)]
        bitrate: u32,
    },

    /// Strip junk tokens from MP3 filenames in a directory
    Clean {
        /// Directory to scan for .mp3 files
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "songprep", version, about = "Batch audio post-processing")]
struct Cli {
    /// Number of files processed in parallel
    #[arg(short = 'j', long = "jobs", default_value_t = 4)]
    jobs: usize,

    #[command(subcommand)]
    mode: Mode,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let failed = match cli.mode {
        Mode::Trim {
            dir,
            threshold,
            min_silence,
            leave,
            bitrate,
        } => {
            let policy = TrimPolicy {
                silence_threshold_dbfs: threshold,
                min_silence_len_ms: min_silence,
                silence_to_leave_ms: leave,
            };
            match batch::list_files(&dir, "mp3") {
                Ok(files) => {
                    batch::run(files, cli.jobs, move |path| {
                        jobs::trim_file(path, &policy, bitrate)
                    })
                    .await
                }
                Err(e) => {
                    error!("{e}");
                    1
                }
            }
        }

        Mode::Normalize { dir, target, bitrate } => {
            let policy = NormalizePolicy {
                target_dbfs: target,
            };
            match batch::list_files(&dir, "mp3") {
                Ok(files) => {
                    batch::run(files, cli.jobs, move |path| {
                        jobs::normalize_file(path, &policy, bitrate)
                    })
                    .await
                }
                Err(e) => {
                    error!("{e}");
                    1
                }
            }
        }

        Mode::Convert { dir, bitrate } => match batch::list_files(&dir, "wav") {
            Ok(files) => {
                batch::run(files, cli.jobs, move |path| {
                    jobs::convert_file(path, bitrate)
                })
                .await
            }
            Err(e) => {
                error!("{e}");
                1
            }
        },

        // Renames race against each other on a shared destination name, so
        // cleanup stays sequential and deterministic.
        Mode::Clean { dir } => match batch::list_files(&dir, "mp3") {
            Ok(files) => {
                let mut failed = 0usize;
                for path in files {
                    if let Err(e) = jobs::clean_file(&path) {
                        error!("{}: {e}", path.display());
                        failed += 1;
                    }
                }
                failed
            }
            Err(e) => {
                error!("{e}");
                1
            }
        },
    };

    if failed > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
