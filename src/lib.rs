pub mod config;
pub mod output;
pub mod search;
pub mod transcript;

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete transcript for a video
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: String,
    /// Human-readable track language, e.g. "Spanish"
    pub language: String,
    pub language_code: String,
    pub segments: Vec<Segment>,
}

static VIDEO_ID_RE: OnceLock<Regex> = OnceLock::new();

fn video_id_re() -> &'static Regex {
    VIDEO_ID_RE.get_or_init(|| {
        Regex::new(
            r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:watch\?v=|shorts/)|youtu\.be/)([a-zA-Z0-9_-]{11})",
        )
        .unwrap()
    })
}

/// Extract the 11-character video ID from a watch, shorts, or youtu.be URL
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_re().captures(url).map(|caps| caps[1].to_string())
}
