use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use super::ConvertError;

/// How much of ffmpeg's stderr to keep in errors. Its banner and stream
/// listing come first; the failure reason is at the end.
const STDERR_TAIL_LINES: usize = 8;

/// Writes the audio track of `video` to `audio` as MP3 using ffmpeg.
/// An existing output file is overwritten.
pub fn extract_audio(ffmpeg: &str, video: &Path, audio: &Path) -> Result<PathBuf, ConvertError> {
    if !video.is_file() {
        return Err(ConvertError::NotFound(video.to_path_buf()));
    }

    debug!(%ffmpeg, video = %video.display(), audio = %audio.display(), "Running ffmpeg");

    let output = Command::new(ffmpeg)
        .arg("-y")
        .arg("-hide_banner")
        .arg("-i")
        .arg(video)
        .args(["-vn", "-acodec", "libmp3lame"])
        .arg(audio)
        .output()
        .map_err(|source| ConvertError::ToolUnavailable {
            tool: ffmpeg.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ConvertError::ToolFailed {
            tool: ffmpeg.to_string(),
            status: output.status.to_string(),
            stderr: stderr_tail(&String::from_utf8_lossy(&output.stderr)),
        });
    }

    info!(audio = %audio.display(), "Audio extracted");
    Ok(audio.to_path_buf())
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_video() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_audio(
            "ffmpeg",
            &dir.path().join("missing.mp4"),
            &dir.path().join("out.mp3"),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::NotFound(_)));
    }

    #[test]
    fn test_missing_ffmpeg_binary() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"not really a video").unwrap();

        let err = extract_audio("/nonexistent/bin/ffmpeg", &video, &dir.path().join("out.mp3"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::ToolUnavailable { .. }), "got {err:?}");
    }

    #[test]
    fn test_stderr_tail_keeps_last_lines() {
        let stderr: String = (1..=20).map(|i| format!("line {i}\n\n")).collect();
        let tail = stderr_tail(&stderr);
        assert_eq!(tail.lines().count(), STDERR_TAIL_LINES);
        assert!(tail.starts_with("line 13"));
        assert!(tail.ends_with("line 20"));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_ffmpeg_with_mp3_codec() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"not really a video").unwrap();

        let install = |name: &str, body: &str| {
            let path = dir.path().join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().into_owned()
        };

        // Fake ffmpeg that records its arguments into the output file.
        let ok = install("ffmpeg-ok", r#"for last; do :; done; printf '%s ' "$@" > "$last""#);
        let audio = dir.path().join("out.mp3");
        let written = extract_audio(&ok, &video, &audio).unwrap();
        assert_eq!(written, audio);
        let args = std::fs::read_to_string(&audio).unwrap();
        assert!(args.contains("-vn -acodec libmp3lame"), "args were {args}");
        assert!(args.starts_with("-y"));

        let failing = install(
            "ffmpeg-fail",
            "echo 'Output file #0 does not contain any stream' >&2; exit 1",
        );
        let err = extract_audio(&failing, &video, &dir.path().join("fail.mp3")).unwrap_err();
        match err {
            ConvertError::ToolFailed { stderr, .. } => {
                assert_eq!(stderr, "Output file #0 does not contain any stream")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
