//! Video references and link parsing

use crate::error::{Result, YoutubeError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::debug;
use url::Url;

static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Failed to compile video id regex"));

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s?)?$").expect("Failed to compile timestamp regex")
});

/// Hosts that serve the watch page, after stripping `www.`, `m.` or `music.`
const VIDEO_HOSTS: [&str; 2] = ["youtube.com", "youtube-nocookie.com"];

/// Path prefixes followed by the id, as in `/embed/<id>`
const ID_PATHS: [&str; 4] = ["embed", "shorts", "live", "v"];

/// One video, optionally starting part-way through
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoRef {
    id: String,
    start: Option<u32>,
}

impl VideoRef {
    /// Fails when `id` is not a well-formed video id.
    pub fn new(id: impl Into<String>, start: Option<u32>) -> Result<Self> {
        let id = id.into();
        if !VIDEO_ID.is_match(&id) {
            return Err(YoutubeError::InvalidVideoId(id));
        }
        Ok(Self {
            id,
            start: start.filter(|s| *s > 0),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Start offset in seconds
    pub fn start(&self) -> Option<u32> {
        self.start
    }

    /// Canonical link, as stored in the document
    pub fn watch_url(&self) -> String {
        match self.start {
            Some(start) => format!("https://www.youtube.com/watch?v={}&t={start}s", self.id),
            None => format!("https://www.youtube.com/watch?v={}", self.id),
        }
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.watch_url())
    }
}

impl std::str::FromStr for VideoRef {
    type Err = YoutubeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_video_url(s)
    }
}

/// Parse a YouTube timestamp: `90`, `90s`, `1m30s` or `1h2m3s`.
///
/// Returns `None` for anything else, including values that overflow.
pub fn parse_timestamp(value: &str) -> Option<u32> {
    let caps = TIMESTAMP.captures(value.trim())?;
    if caps.get(0).is_some_and(|m| m.is_empty()) {
        return None;
    }

    let part = |i: usize, scale: u32| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse::<u32>().ok()?.checked_mul(scale),
            None => Some(0),
        }
    };
    part(1, 3600)?
        .checked_add(part(2, 60)?)?
        .checked_add(part(3, 1)?)
}

/// Parse whatever a user pastes: a watch, embed, shorts or short link, with
/// or without a scheme, or a bare video id.
pub fn parse_video_url(input: &str) -> Result<VideoRef> {
    let input = input.trim();
    if input.is_empty() {
        return Err(YoutubeError::Empty);
    }
    if VIDEO_ID.is_match(input) {
        return VideoRef::new(input, None);
    }

    let url = if input.contains("://") {
        Url::parse(input)?
    } else {
        Url::parse(&format!("https://{input}"))?
    };

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(YoutubeError::UnsupportedScheme(scheme.to_string())),
    }

    let host = url.host_str().unwrap_or_default();
    let host = ["www.", "m.", "music."]
        .iter()
        .find_map(|prefix| host.strip_prefix(prefix))
        .unwrap_or(host);

    let id = if host == "youtu.be" {
        url.path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    } else if VIDEO_HOSTS.contains(&host) {
        id_from_video_host(&url)
    } else {
        return Err(YoutubeError::UnsupportedHost(host.to_string()));
    };
    let id = id.ok_or_else(|| YoutubeError::MissingVideoId(input.to_string()))?;

    let start = url
        .query_pairs()
        .find(|(key, _)| key == "t" || key == "start")
        .and_then(|(_, value)| {
            let start = parse_timestamp(&value);
            if start.is_none() {
                debug!(value = %value, "ignoring unreadable start time");
            }
            start
        });

    let video = VideoRef::new(id, start)?;
    debug!(id = %video.id, start = ?video.start, "parsed video link");
    Ok(video)
}

fn id_from_video_host(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?;
    match segments.next()? {
        "watch" => url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, id)| id.into_owned()),
        prefix if ID_PATHS.contains(&prefix) => segments
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ID: &str = "dQw4w9WgXcQ";

    #[rstest]
    #[case("dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("http://youtube.com/watch?feature=share&v=dQw4w9WgXcQ")]
    #[case("youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://m.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case("https://music.youtube.com/watch?v=dQw4w9WgXcQ&list=RD")]
    #[case("https://youtu.be/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ")]
    #[case("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")]
    #[case("https://youtube.com/shorts/dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/live/dQw4w9WgXcQ?feature=share")]
    #[case("https://www.youtube.com/v/dQw4w9WgXcQ")]
    #[case("  https://youtu.be/dQw4w9WgXcQ  ")]
    fn test_accepted_links(#[case] input: &str) {
        let video = parse_video_url(input).unwrap();
        assert_eq!(video.id(), ID);
        assert_eq!(video.start(), None);
    }

    #[rstest]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=90", Some(90))]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=90s", Some(90))]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m30s", Some(90))]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ?start=3723", Some(3723))]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1h2m3s", Some(3723))]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=0", None)]
    #[case("https://youtu.be/dQw4w9WgXcQ?t=soon", None)]
    fn test_start_times(#[case] input: &str, #[case] start: Option<u32>) {
        assert_eq!(parse_video_url(input).unwrap().start(), start);
    }

    #[rstest]
    #[case("", YoutubeError::Empty)]
    #[case("   ", YoutubeError::Empty)]
    #[case("https://vimeo.com/12345", YoutubeError::UnsupportedHost("vimeo.com".into()))]
    #[case("ftp://youtube.com/watch?v=dQw4w9WgXcQ", YoutubeError::UnsupportedScheme("ftp".into()))]
    #[case("https://www.youtube.com/", YoutubeError::MissingVideoId("https://www.youtube.com/".into()))]
    #[case("https://youtu.be/", YoutubeError::MissingVideoId("https://youtu.be/".into()))]
    #[case("https://youtu.be/short", YoutubeError::InvalidVideoId("short".into()))]
    fn test_rejected_links(#[case] input: &str, #[case] expected: YoutubeError) {
        assert_eq!(parse_video_url(input), Err(expected));
    }

    #[test]
    fn test_malformed_url() {
        assert!(matches!(
            parse_video_url("https://exa mple.com/watch"),
            Err(YoutubeError::InvalidUrl(_))
        ));
    }

    #[rstest]
    #[case("90", Some(90))]
    #[case("2m", Some(120))]
    #[case("1h", Some(3600))]
    #[case("", None)]
    #[case("1x", None)]
    #[case("99999999999", None)]
    fn test_parse_timestamp(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_timestamp(input), expected);
    }

    #[test]
    fn test_watch_url_is_canonical() {
        let video = VideoRef::new(ID, Some(42)).unwrap();
        assert_eq!(
            video.to_string(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"
        );
        assert_eq!(parse_video_url(&video.watch_url()).unwrap(), video);
    }
}
