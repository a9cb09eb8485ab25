//! Video identifier extraction

use std::sync::LazyLock;

use regex::Regex;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]{11})").expect("video id pattern is valid")
});

/// Pull the 11-character video id out of a long or short video URL
pub fn youtube_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
