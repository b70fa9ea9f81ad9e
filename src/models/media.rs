// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media item data structures and URL classification.
//!
//! A project's media list is derived, never stored: all images first in
//! array order, then all videos in array order. Videos hosted by a known
//! provider are classified as embeds and displayed through that provider's
//! player instead of a native playback surface.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Kind of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Embed,
}

/// One image or video of a project, addressed by its position in the
/// combined image+video list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

impl MediaItem {
    /// Tag an image URL.
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
        }
    }

    /// Tag a video URL, classifying it as a direct video or an embed.
    pub fn video(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            kind: classify_video_url(&url),
            url,
        }
    }
}

/// Third-party video hosts whose players can be embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedProvider {
    YouTube,
    Vimeo,
    Loom,
}

impl EmbedProvider {
    /// Human readable provider name.
    pub fn label(self) -> &'static str {
        match self {
            EmbedProvider::YouTube => "YouTube",
            EmbedProvider::Vimeo => "Vimeo",
            EmbedProvider::Loom => "Loom",
        }
    }
}

static YOUTUBE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:https?://)?(?:[a-z0-9-]+\.)*",
        r"(?:youtube(?:-nocookie)?\.com/(?:embed/|watch\b|shorts/)|youtu\.be/)",
    ))
    .expect("valid regex")
});

static VIMEO_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:player\.vimeo\.com/video/|(?:www\.)?vimeo\.com/\d)")
        .expect("valid regex")
});

// Loom share pages cannot be rewritten; only the embed form is recognised.
static LOOM_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:[a-z0-9-]+\.)*loom\.com/embed/").expect("valid regex")
});

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:https?://)?(?:[a-z0-9-]+\.)*",
        r"(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|shorts/)|youtu\.be/)",
        r"([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    ))
    .expect("valid regex")
});

static VIMEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.)?vimeo\.com/(\d+)(?:[/?#]|$)")
        .expect("valid regex")
});

/// Identify the embeddable provider a URL belongs to, by shape alone.
pub fn embed_provider(url: &str) -> Option<EmbedProvider> {
    let url = url.trim();
    if YOUTUBE_SHAPE.is_match(url) {
        Some(EmbedProvider::YouTube)
    } else if VIMEO_SHAPE.is_match(url) {
        Some(EmbedProvider::Vimeo)
    } else if LOOM_SHAPE.is_match(url) {
        Some(EmbedProvider::Loom)
    } else {
        None
    }
}

/// Classify a video URL as an embed or a directly playable file.
pub fn classify_video_url(url: &str) -> MediaKind {
    match embed_provider(url) {
        Some(_) => MediaKind::Embed,
        None => MediaKind::Video,
    }
}

/// Rewrite a provider watch page or short link into the provider's
/// embeddable player URL.
///
/// Returns the input unchanged when no video identifier can be extracted,
/// which also covers URLs that are already in embed form.
pub fn embed_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some(caps) = YOUTUBE_ID.captures(trimmed) {
        return format!("https://www.youtube.com/embed/{}", &caps[1]);
    }
    if let Some(caps) = VIMEO_ID.captures(trimmed) {
        return format!("https://player.vimeo.com/video/{}", &caps[1]);
    }
    url.to_string()
}

/// Build the ordered media list from image and video URL lists.
pub fn media_items(images: &[String], videos: &[String]) -> Vec<MediaItem> {
    images
        .iter()
        .map(MediaItem::image)
        .chain(videos.iter().map(MediaItem::video))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_embed_shapes() {
        let embeds = [
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://m.youtube.com/shorts/dQw4w9WgXcQ",
            "https://player.vimeo.com/video/76979871",
            "https://vimeo.com/76979871",
            "https://www.loom.com/embed/0281766fa2d04bb788eaf19e65135184",
            "loom.com/embed/0281766fa2d04bb788eaf19e65135184?hide_owner=true",
        ];
        for url in embeds {
            assert_eq!(classify_video_url(url), MediaKind::Embed, "{url}");
        }
    }

    #[test]
    fn test_classify_direct_video() {
        assert_eq!(classify_video_url("/videos/demo.mp4"), MediaKind::Video);
        assert_eq!(
            classify_video_url("https://cdn.example.com/clip.webm"),
            MediaKind::Video
        );
        assert_eq!(classify_video_url("https://vimeo.com/about"), MediaKind::Video);
        assert_eq!(
            classify_video_url("https://example.com/?ref=youtube.com/embed/x"),
            MediaKind::Video
        );
    }

    #[test]
    fn test_embed_url_youtube_forms() {
        let expected = "https://www.youtube.com/embed/dQw4w9WgXcQ";
        assert_eq!(embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(
            embed_url("https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ&t=4s"),
            expected
        );
        assert_eq!(embed_url("https://youtu.be/dQw4w9WgXcQ?t=10"), expected);
        assert_eq!(embed_url("youtube.com/shorts/dQw4w9WgXcQ"), expected);
    }

    #[test]
    fn test_embed_url_vimeo() {
        assert_eq!(
            embed_url("https://vimeo.com/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
    }

    #[test]
    fn test_embed_url_falls_back_to_input() {
        let already = "https://www.youtube.com/embed/dQw4w9WgXcQ";
        assert_eq!(embed_url(already), already);

        let player = "https://player.vimeo.com/video/76979871";
        assert_eq!(embed_url(player), player);

        // Watch page without an identifier
        let no_id = "https://www.youtube.com/watch?list=PL123";
        assert_eq!(embed_url(no_id), no_id);

        let short = "https://youtu.be/abc";
        assert_eq!(embed_url(short), short);

        let loom = "https://www.loom.com/embed/0281766fa2d04bb788eaf19e65135184";
        assert_eq!(embed_url(loom), loom);
    }

    #[test]
    fn test_embed_provider_loom() {
        assert_eq!(
            embed_provider("https://www.loom.com/embed/0281766fa2d04bb788eaf19e65135184"),
            Some(EmbedProvider::Loom)
        );
        // Share pages are not embeddable as-is
        assert_eq!(
            classify_video_url("https://www.loom.com/share/0281766fa2d04bb788eaf19e65135184"),
            MediaKind::Video
        );
    }

    #[test]
    fn test_media_items_order() {
        let images = vec!["a.png".to_string(), "b.png".to_string()];
        let videos = vec![
            "clip.mp4".to_string(),
            "https://youtu.be/dQw4w9WgXcQ".to_string(),
        ];

        let items = media_items(&images, &videos);
        let kinds: Vec<MediaKind> = items.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MediaKind::Image, MediaKind::Image, MediaKind::Video, MediaKind::Embed]
        );
        assert_eq!(items[0].url, "a.png");
        assert_eq!(items[1].url, "b.png");
        assert_eq!(items[2].url, "clip.mp4");
    }

    #[test]
    fn test_media_items_empty() {
        assert!(media_items(&[], &[]).is_empty());
    }
}
