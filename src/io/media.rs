// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading (images and videos).
//!
//! This module decodes images into RGBA pixels suitable for egui textures
//! and probes video sources before playback. Both run on background threads
//! and report back over channels; the UI thread drains the receivers once
//! per frame.

use crate::viewer::{PlaybackSignal, SurfaceKey};
use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use url::Url;

/// Largest texture side; bigger images are downscaled after decoding.
const MAX_TEXTURE_SIDE: u32 = 2048;

/// Container extensions treated as directly playable video.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "webm", "mov", "mkv", "ogv", "ogg"];

/// Decoded image ready for upload as a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Result of a background image load, tagged with the requested URL and
/// the cache generation it was requested under.
pub struct ImageLoadResult {
    pub url: String,
    pub generation: u64,
    pub result: Result<LoadedImage, String>,
}

/// Whether a media URL points at a remote resource.
pub fn is_remote(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve a media URL to a local file path.
///
/// Relative paths are resolved against `base_dir` (the content file's
/// directory). Returns `None` for URLs with a non-file scheme.
pub fn resolve_local(url: &str, base_dir: Option<&Path>) -> Option<PathBuf> {
    let url = url.trim();
    let path = match url.strip_prefix("file://") {
        Some(rest) => PathBuf::from(rest),
        None if url.contains("://") || url.starts_with("data:") => return None,
        None => PathBuf::from(url),
    };

    match base_dir {
        Some(base) if path.is_relative() => Some(base.join(path)),
        _ => Some(path),
    }
}

/// Percent-encoded `file://` URL for a local path.
///
/// Relative paths are made absolute against the working directory.
pub fn file_url(path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|_| anyhow::anyhow!("Cannot express {} as a file URL", absolute.display()))
}

/// Source URL a browser video element can load for a direct video.
///
/// Remote URLs pass through; local paths become escaped `file://` URLs.
pub fn player_source(url: &str, base_dir: Option<&Path>) -> Result<String> {
    if is_remote(url) {
        return Ok(url.trim().to_string());
    }
    let Some(path) = resolve_local(url, base_dir) else {
        bail!("Unsupported video URL: {}", url);
    };
    file_url(&path)
}

/// Minimal HTML page that plays `src` in the browser's video element.
///
/// Muted playback is allowed to start without a user gesture, so `muted`
/// pages autoplay.
pub fn player_page(src: &str, muted: bool) -> String {
    let src = src
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let attributes = if muted { "controls autoplay muted playsinline" } else { "controls playsinline" };
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html><head><meta charset=\"utf-8\"><title>Folio player</title></head>\n",
            "<body style=\"margin:0;background:#000\">\n",
            "<video src=\"{}\" {} style=\"width:100vw;height:100vh;object-fit:contain\"></video>\n",
            "</body></html>\n",
        ),
        src, attributes
    )
}

/// Write a player page for `src` to the temp directory and return its path.
pub fn write_player_page(src: &str, muted: bool) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("folio-player-{}.html", std::process::id()));
    std::fs::write(&path, player_page(src, muted))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Load an image file and convert it to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let mut img = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;

    if img.width() > MAX_TEXTURE_SIDE || img.height() > MAX_TEXTURE_SIDE {
        img = img.resize(
            MAX_TEXTURE_SIDE,
            MAX_TEXTURE_SIDE,
            image::imageops::FilterType::Triangle,
        );
    }

    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Decode the image behind `url` on a background thread.
pub fn spawn_image_load(
    url: String,
    generation: u64,
    base_dir: Option<PathBuf>,
    sender: Sender<ImageLoadResult>,
) {
    std::thread::spawn(move || {
        let result = (|| -> Result<LoadedImage> {
            if is_remote(&url) {
                bail!("Remote images are not fetched: {}", url);
            }
            let Some(path) = resolve_local(&url, base_dir.as_deref()) else {
                bail!("Unsupported image URL: {}", url);
            };
            let loaded = load_image(&path)?;
            log::debug!("Loaded image: {} ({}x{})", path.display(), loaded.width, loaded.height);
            Ok(loaded)
        })();

        let _ = sender.send(ImageLoadResult {
            url,
            generation,
            result: result.map_err(|e| format!("{:#}", e)),
        });
    });
}

/// Check that a video source can be handed to a player.
///
/// Remote sources are accepted as-is. Local sources must exist, carry a
/// known container extension and be readable.
pub fn probe_video(url: &str, base_dir: Option<&Path>) -> Result<()> {
    if is_remote(url) {
        return Ok(());
    }
    let Some(path) = resolve_local(url, base_dir) else {
        bail!("Unsupported video URL: {}", url);
    };

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    match extension.as_deref() {
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext) => {}
        _ => bail!("Unsupported video format: {}", path.display()),
    }

    let mut file = std::fs::File::open(&path)
        .with_context(|| format!("Video not found: {}", path.display()))?;
    let mut header = [0u8; 16];
    let read = file
        .read(&mut header)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if read == 0 {
        bail!("Video file is empty: {}", path.display());
    }
    Ok(())
}

/// Probe the source of a playback surface on a background thread and
/// report the outcome as a signal for that surface.
pub fn spawn_video_probe(key: SurfaceKey, base_dir: Option<PathBuf>, sender: Sender<PlaybackSignal>) {
    std::thread::spawn(move || {
        let signal = match probe_video(&key.url, base_dir.as_deref()) {
            Ok(()) => PlaybackSignal::LoadStarted(key),
            Err(e) => PlaybackSignal::Error {
                key,
                message: format!("{:#}", e),
            },
        };
        let _ = sender.send(signal);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-media-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_local() {
        let base = Path::new("/srv/site");
        assert_eq!(
            resolve_local("media/a.png", Some(base)),
            Some(PathBuf::from("/srv/site/media/a.png"))
        );
        assert_eq!(
            resolve_local("/abs/a.png", Some(base)),
            Some(PathBuf::from("/abs/a.png"))
        );
        assert_eq!(
            resolve_local("file:///abs/b.png", None),
            Some(PathBuf::from("/abs/b.png"))
        );
        assert_eq!(resolve_local("https://example.com/a.png", Some(base)), None);
        assert_eq!(resolve_local("data:image/png;base64,AAAA", None), None);
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/a.mp4"));
        assert!(is_remote("HTTP://example.com/a.mp4"));
        assert!(!is_remote("media/a.mp4"));
    }

    #[test]
    fn test_probe_remote_video_is_accepted() {
        assert!(probe_video("https://cdn.example.com/clip.mp4", None).is_ok());
    }

    #[test]
    fn test_probe_local_video() {
        let dir = scratch_dir("probe");
        std::fs::write(dir.join("clip.mp4"), b"\0\0\0\x18ftypmp42").unwrap();
        std::fs::write(dir.join("empty.webm"), b"").unwrap();
        std::fs::write(dir.join("notes.txt"), b"hello").unwrap();

        assert!(probe_video("clip.mp4", Some(&dir)).is_ok());
        assert!(probe_video("missing.mp4", Some(&dir)).is_err());
        assert!(probe_video("empty.webm", Some(&dir)).is_err());
        assert!(probe_video("notes.txt", Some(&dir)).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_spawn_video_probe_reports_error_for_key() {
        let (sender, receiver) = channel();
        let key = SurfaceKey {
            project_index: 0,
            media_index: 2,
            url: "/nonexistent/folio/clip.mp4".to_string(),
            reload_token: 3,
        };

        spawn_video_probe(key.clone(), None, sender);
        match receiver.recv().unwrap() {
            PlaybackSignal::Error { key: got, message } => {
                assert_eq!(got, key);
                assert!(message.contains("not found"));
            }
            other => panic!("expected error signal, got {:?}", other),
        }
    }

    #[test]
    fn test_load_image_roundtrip_small_png() {
        let dir = scratch_dir("image");
        let path = dir.join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.pixels.len(), 3 * 2 * 4);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_spawn_image_load_remote_fails_softly() {
        let (sender, receiver) = channel();
        spawn_image_load("https://example.com/a.png".to_string(), 4, None, sender);
        let loaded = receiver.recv().unwrap();
        assert_eq!(loaded.url, "https://example.com/a.png");
        assert_eq!(loaded.generation, 4);
        assert!(loaded.result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_escapes_path() {
        assert_eq!(
            file_url(Path::new("/srv/my clips/demo#1.mp4")).unwrap(),
            "file:///srv/my%20clips/demo%231.mp4"
        );
        assert_eq!(
            file_url(Path::new("/srv/100% done?.webm")).unwrap(),
            "file:///srv/100%25%20done%3F.webm"
        );
    }

    #[test]
    fn test_file_url_relative_is_absolute() {
        let url = file_url(Path::new("media/clip.mp4")).unwrap();
        assert!(url.starts_with("file:///"), "{url}");
        assert!(url.ends_with("/media/clip.mp4"), "{url}");
    }

    #[cfg(unix)]
    #[test]
    fn test_player_source() {
        let base = Path::new("/srv/my site");
        assert_eq!(
            player_source("media/demo #2.mp4", Some(base)).unwrap(),
            "file:///srv/my%20site/media/demo%20%232.mp4"
        );
        assert_eq!(
            player_source(" https://cdn.example.com/a.mp4 ", Some(base)).unwrap(),
            "https://cdn.example.com/a.mp4"
        );
        assert!(player_source("ftp://example.com/a.mp4", None).is_err());
    }

    #[test]
    fn test_write_player_page() {
        let path = write_player_page("https://cdn.example.com/a.mp4", false).unwrap();
        let page = std::fs::read_to_string(&path).unwrap();
        assert!(page.contains("<video src=\"https://cdn.example.com/a.mp4\" controls playsinline"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_player_page_mute_attributes() {
        let muted = player_page("file:///srv/clip.mp4", true);
        assert!(muted.contains("<video src=\"file:///srv/clip.mp4\" controls autoplay muted"));

        let loud = player_page("file:///srv/clip.mp4", false);
        assert!(!loud.contains("muted"));
        assert!(!loud.contains("autoplay"));
    }

    #[test]
    fn test_player_page_escapes_source() {
        let page = player_page("https://cdn.example.com/a.mp4?x=1&y=\"2\"", true);
        assert!(page.contains("src=\"https://cdn.example.com/a.mp4?x=1&amp;y=&quot;2&quot;\""));
    }
}
