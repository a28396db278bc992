use std::path::Path;
use std::process::Command;

use serde::Deserialize;
use thiserror::Error;

/// Language shown when a stream carries no language tag.
const UNKNOWN_LANGUAGE: &str = "Unknown";

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("ffprobe is not available: {0}")]
    ProbeUnavailable(#[source] std::io::Error),
    #[error("ffprobe failed for {path}: {detail}")]
    ProbeFailed { path: String, detail: String },
    #[error("could not parse ffprobe output: {0}")]
    BadOutput(#[source] serde_json::Error),
}

/// One audio stream, for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    pub language: String,
    pub format: String,
    pub channels: Option<u32>,
    pub sample_rate: Option<u32>,
}

/// One subtitle stream, for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    pub language: String,
    pub format: String,
}

/// Audio and subtitle streams of one container, in stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackReport {
    pub audio: Vec<AudioTrack>,
    pub subtitles: Vec<SubtitleTrack>,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    channels: Option<u32>,
    // ffprobe reports the sample rate as a JSON string
    sample_rate: Option<String>,
    #[serde(default)]
    tags: ProbeTags,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeTags {
    language: Option<String>,
}

/// Reads the audio and subtitle track layout of a media file via ffprobe.
///
/// Informational only: no placement decision depends on the result, and an
/// unreadable or unsupported file yields a descriptive error rather than a
/// crash.
pub fn inspect_tracks(path: &Path) -> Result<TrackReport, InspectError> {
    let output = Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_streams"])
        .arg(path)
        .output()
        .map_err(InspectError::ProbeUnavailable)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(InspectError::ProbeFailed {
            path: path.display().to_string(),
            detail: stderr.trim().to_string(),
        });
    }

    parse_probe_output(&String::from_utf8_lossy(&output.stdout))
}

fn parse_probe_output(json: &str) -> Result<TrackReport, InspectError> {
    let probe: ProbeOutput = serde_json::from_str(json).map_err(InspectError::BadOutput)?;

    let mut report = TrackReport::default();
    for stream in probe.streams {
        let language = stream
            .tags
            .language
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());
        let format = stream
            .codec_name
            .unwrap_or_else(|| "unknown".to_string());

        match stream.codec_type.as_deref() {
            Some("audio") => report.audio.push(AudioTrack {
                language,
                format,
                channels: stream.channels,
                sample_rate: stream.sample_rate.and_then(|rate| rate.parse().ok()),
            }),
            Some("subtitle") => report.subtitles.push(SubtitleTrack { language, format }),
            _ => {}
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBE_JSON: &str = r#"{
        "streams": [
            {
                "index": 0,
                "codec_name": "h264",
                "codec_type": "video",
                "width": 1920
            },
            {
                "index": 1,
                "codec_name": "aac",
                "codec_type": "audio",
                "channels": 6,
                "sample_rate": "48000",
                "tags": { "language": "eng" }
            },
            {
                "index": 2,
                "codec_name": "ac3",
                "codec_type": "audio",
                "channels": 2,
                "sample_rate": "44100"
            },
            {
                "index": 3,
                "codec_name": "subrip",
                "codec_type": "subtitle",
                "tags": { "language": "slk" }
            }
        ]
    }"#;

    #[test]
    fn test_parses_audio_and_subtitle_streams() {
        let report = parse_probe_output(PROBE_JSON).unwrap();

        assert_eq!(report.audio.len(), 2);
        assert_eq!(report.audio[0].language, "eng");
        assert_eq!(report.audio[0].format, "aac");
        assert_eq!(report.audio[0].channels, Some(6));
        assert_eq!(report.audio[0].sample_rate, Some(48000));

        assert_eq!(report.subtitles.len(), 1);
        assert_eq!(report.subtitles[0].language, "slk");
        assert_eq!(report.subtitles[0].format, "subrip");
    }

    #[test]
    fn test_missing_language_reports_unknown() {
        let report = parse_probe_output(PROBE_JSON).unwrap();
        assert_eq!(report.audio[1].language, "Unknown");
    }

    #[test]
    fn test_video_streams_are_ignored() {
        let report = parse_probe_output(PROBE_JSON).unwrap();
        assert!(report.audio.iter().all(|t| t.format != "h264"));
    }

    #[test]
    fn test_garbage_output_is_an_error() {
        assert!(matches!(
            parse_probe_output("not json"),
            Err(InspectError::BadOutput(_))
        ));
    }

    #[test]
    fn test_no_streams_key_is_empty_report() {
        let report = parse_probe_output("{}").unwrap();
        assert!(report.audio.is_empty());
        assert!(report.subtitles.is_empty());
    }
}
