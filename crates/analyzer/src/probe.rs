//! Dimension probing: image headers via the `image` crate, videos via
//! ffprobe.

use std::path::Path;

use serde::Deserialize;

/// Pixel dimensions of a probed asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Fallback for videos whose dimensions cannot be determined. Story-sized
/// portrait, matching the most common raw export.
const VIDEO_FALLBACK: Dimensions = Dimensions {
    width: 1080,
    height: 1920,
};

/// Read an image's dimensions from its header without decoding pixels.
///
/// Returns `None` on failure (corrupt file, unsupported codec); the caller
/// records the asset with unknown dimensions rather than failing the run.
pub fn image_dimensions(path: &Path) -> Option<Dimensions> {
    match image::image_dimensions(path) {
        Ok((width, height)) => Some(Dimensions { width, height }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read image dimensions");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// ffprobe JSON output structures
// ---------------------------------------------------------------------------

/// Top-level ffprobe JSON output (`-print_format json -show_streams`).
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

/// A single stream from ffprobe output. Only the fields the analyzer needs.
#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// Probe a video's dimensions with ffprobe.
///
/// A missing ffprobe binary, a failing probe, or unparsable output all
/// degrade to the portrait fallback with a warning; analysis never fails on
/// one bad video.
pub async fn video_dimensions(path: &Path) -> Option<Dimensions> {
    let output = match tokio::process::Command::new("ffprobe")
        .args(["-v", "quiet", "-print_format", "json", "-show_streams"])
        .arg(path)
        .output()
        .await
    {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            tracing::warn!(
                path = %path.display(),
                exit_code = ?output.status.code(),
                "ffprobe failed; using fallback video dimensions"
            );
            return Some(VIDEO_FALLBACK);
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "ffprobe not available; using fallback video dimensions"
            );
            return Some(VIDEO_FALLBACK);
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    match parse_ffprobe_dimensions(&stdout) {
        Some(dims) => Some(dims),
        None => {
            tracing::warn!(
                path = %path.display(),
                "no video stream in ffprobe output; using fallback dimensions"
            );
            Some(VIDEO_FALLBACK)
        }
    }
}

/// Extract the first video stream's dimensions from ffprobe JSON.
fn parse_ffprobe_dimensions(json: &str) -> Option<Dimensions> {
    let parsed: FfprobeOutput = serde_json::from_str(json).ok()?;
    parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .and_then(|s| match (s.width, s.height) {
            (Some(width), Some(height)) => Some(Dimensions { width, height }),
            _ => None,
        })
}
