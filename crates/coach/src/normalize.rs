//! Turns user-pasted video links into something a player can embed, and
//! decides whether a link is a plain media file or needs an embed frame.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const VIMEO_PLAYER: &str = "https://player.vimeo.com/video/";
const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

// A pattern that fails to compile leaves its slot empty and the input passes
// through untouched.
static VIMEO_LINK: Lazy<Option<Regex>> =
  Lazy::new(|| Regex::new(r"^https?://(?:www\.)?vimeo\.com/(\d+)").ok());

static YOUTUBE_LINK: Lazy<Option<Regex>> = Lazy::new(|| {
  Regex::new(r"^https?://(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]+)").ok()
});

static MEDIA_FILE: Lazy<Option<Regex>> =
  Lazy::new(|| Regex::new(r"(?i)\.(?:mp4|m4v|webm|ogv|mov)(?:\?[^#]*)?(?:#.*)?$").ok());

/// How a resolved URL should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
  /// A media file the player can load directly
  DirectMedia,
  /// Anything else, shown through an embed frame
  Embed,
}

/// Rewrite a shareable video link into its embeddable form.
///
/// Vimeo page links become player links and YouTube watch/short links become
/// embed links. Everything else, including links that are already
/// embeddable, is returned unchanged.
pub fn normalize(raw: &str) -> String {
  if raw.is_empty() {
    return String::new();
  }

  if let Some(id) = capture(&VIMEO_LINK, raw) {
    return format!("{VIMEO_PLAYER}{id}");
  }

  if let Some(id) = capture(&YOUTUBE_LINK, raw) {
    return format!("{YOUTUBE_EMBED}{id}");
  }

  raw.to_string()
}

fn capture<'a>(pattern: &Option<Regex>, input: &'a str) -> Option<&'a str> {
  let regex = pattern.as_ref()?;
  regex.captures(input)?.get(1).map(|m| m.as_str())
}

/// Classify a URL as it was stored, before normalization
pub fn classify(url: &str) -> MediaKind {
  let is_file = (*MEDIA_FILE).as_ref().is_some_and(|regex| regex.is_match(url));
  if is_file {
    MediaKind::DirectMedia
  } else {
    MediaKind::Embed
  }
}
