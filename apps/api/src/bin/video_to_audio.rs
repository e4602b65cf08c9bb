//! Writes the audio track of a video to an MP3 file.
//!
//! Usage: video-to-audio <video_path> <audio_path>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_ner::convert::extract_audio;

#[derive(Debug, Parser)]
#[command(name = "video-to-audio", version, about = "Extract a video's audio track as MP3")]
struct Cli {
    /// Video file to read
    video_path: PathBuf,

    /// MP3 file to write; overwritten if it exists
    audio_path: PathBuf,

    /// ffmpeg executable
    #[arg(long, env = "FFMPEG_BIN", default_value = "ffmpeg")]
    ffmpeg: String,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match extract_audio(&cli.ffmpeg, &cli.video_path, &cli.audio_path) {
        Ok(path) => {
            println!("Audio saved to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
