use eyre::Result;
use serde::Serialize;

use crate::Segment;

const SEPARATOR_WIDTH: usize = 60;

/// One video's worth of output in JSON mode
#[derive(Debug, Serialize)]
pub struct VideoBlock {
    pub url: String,
    pub transcript: String,
}

/// Collapse segments to a single space-joined string, in segment order
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one video's text block: transcript (or inline error) plus separator
pub fn render_block(url: &str, transcript: &str) -> String {
    format!("Transcript for {url}:\n{transcript}\n{}", "-".repeat(SEPARATOR_WIDTH))
}

pub fn render_json(blocks: &[VideoBlock]) -> Result<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}
