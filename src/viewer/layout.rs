// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Render description of the viewer modal.

use super::playback::SurfaceKey;
use crate::models::media::{EmbedProvider, MediaKind};

/// What occupies the media area of the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// The project has no media; show the "coming soon" placeholder.
    Empty,
    /// Static image. Load failures fall back to a placeholder texture.
    Image { url: String },
    /// Provider-hosted player at its canonical embed URL.
    Embed {
        url: String,
        provider: Option<EmbedProvider>,
    },
    /// Native playback surface for a directly playable file.
    Video {
        key: SurfaceKey,
        error: Option<String>,
        /// Offer "skip to next" in the error view
        can_skip: bool,
        /// Play without sound
        muted: bool,
    },
}

/// Everything the modal needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerLayout {
    pub project_name: String,
    pub project_index: usize,
    pub project_count: usize,
    pub media_index: usize,
    pub media_count: usize,
    pub surface: Surface,
    pub show_media_nav: bool,
    pub show_project_nav: bool,
    pub show_thumbnails: bool,
    pub show_project_selector: bool,
    /// Kind of each media item, in list order
    pub thumbnails: Vec<MediaKind>,
}
