// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media viewer state machine.
//!
//! A [`MediaViewer`] exists only while the modal is open. It tracks which
//! project and which media item are shown, owns the playback state of the
//! displayed video and the selector drag gesture, and reports project
//! changes and closing to its owner through a [`ViewerListener`].

use super::gesture::DragGesture;
use super::layout::{Surface, ViewerLayout};
use super::playback::{PlaybackSignal, PlaybackState, SurfaceKey};
use crate::models::media::{self, MediaItem, MediaKind};
use crate::models::portfolio::Project;
use std::sync::Arc;

/// Notifications from the viewer to its owner.
pub trait ViewerListener {
    /// The viewer was closed.
    fn on_close(&mut self);
    /// The active project changed to `index`.
    fn on_project_change(&mut self, index: usize);
}

/// Recorded listener notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Closed,
    ProjectChanged(usize),
}

impl ViewerListener for Vec<ViewerEvent> {
    fn on_close(&mut self) {
        self.push(ViewerEvent::Closed);
    }

    fn on_project_change(&mut self, index: usize) {
        self.push(ViewerEvent::ProjectChanged(index));
    }
}

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// A key press with the modifier state the viewer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: NavKey,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: NavKey) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: NavKey) -> Self {
        Self { key, shift: true }
    }
}

/// Modal viewer over a list of projects and their media.
#[derive(Debug)]
pub struct MediaViewer {
    projects: Arc<[Project]>,
    is_open: bool,
    project_index: usize,
    media_index: usize,
    reload_token: u64,
    /// Direct videos start muted; kept across media and project changes
    muted: bool,
    playback: PlaybackState,
    gesture: DragGesture,
}

impl MediaViewer {
    /// Open the viewer on `project_index`.
    ///
    /// Returns `None` when the index is out of range.
    pub fn open(projects: Arc<[Project]>, project_index: usize) -> Option<Self> {
        if project_index >= projects.len() {
            log::warn!(
                "Ignoring request to open project {} of {}",
                project_index,
                projects.len()
            );
            return None;
        }

        log::info!("Opened media viewer on '{}'", projects[project_index].name);

        Some(Self {
            projects,
            is_open: true,
            project_index,
            media_index: 0,
            reload_token: 0,
            muted: true,
            playback: PlaybackState::default(),
            gesture: DragGesture::Idle,
        })
    }

    /// Close the viewer.
    pub fn close(&mut self, listener: &mut impl ViewerListener) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.playback.unmount();
        self.gesture = DragGesture::Idle;
        log::info!("Closed media viewer");
        listener.on_close();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn project_index(&self) -> usize {
        self.project_index
    }

    pub fn media_index(&self) -> usize {
        self.media_index
    }

    pub fn reload_token(&self) -> u64 {
        self.reload_token
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the mute setting used when a direct video is played.
    pub fn toggle_mute(&mut self) {
        if !self.is_open {
            return;
        }
        self.muted = !self.muted;
        log::debug!("Video sound {}", if self.muted { "off" } else { "on" });
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn current_project(&self) -> &Project {
        &self.projects[self.project_index]
    }

    /// Media list of the current project.
    pub fn media(&self) -> Vec<MediaItem> {
        self.current_project().media_items()
    }

    pub fn media_count(&self) -> usize {
        self.current_project().media_count()
    }

    /// Currently displayed media item, `None` when the project has no media.
    pub fn current_media(&self) -> Option<MediaItem> {
        self.media().into_iter().nth(self.media_index)
    }

    /// Switch to project `index`.
    ///
    /// `-1` wraps to the last project and `project_count` wraps to the
    /// first. Any other out-of-range index, or the current index, is ignored.
    pub fn set_project_index(&mut self, index: isize, listener: &mut impl ViewerListener) {
        let count = self.projects.len();
        let target = if index == -1 {
            count - 1
        } else if index == count as isize {
            0
        } else if (0..count as isize).contains(&index) {
            index as usize
        } else {
            log::debug!("Ignoring project index {} of {}", index, count);
            return;
        };

        if target == self.project_index {
            return;
        }

        self.project_index = target;
        self.media_index = 0;
        self.playback.clear_error();
        log::debug!("Switched to project {} '{}'", target, self.current_project().name);
        listener.on_project_change(target);
    }

    pub fn next_project(&mut self, listener: &mut impl ViewerListener) {
        self.set_project_index(self.project_index as isize + 1, listener);
    }

    pub fn previous_project(&mut self, listener: &mut impl ViewerListener) {
        self.set_project_index(self.project_index as isize - 1, listener);
    }

    /// Advance to the next media item, wrapping to the first.
    pub fn next_media(&mut self) {
        let count = self.media_count();
        if count == 0 {
            return;
        }
        self.show_media((self.media_index + 1) % count);
    }

    /// Go back to the previous media item, wrapping to the last.
    pub fn previous_media(&mut self) {
        let count = self.media_count();
        if count == 0 {
            return;
        }
        self.show_media((self.media_index + count - 1) % count);
    }

    /// Jump to media item `index`; out-of-range requests are ignored.
    pub fn select_media(&mut self, index: usize) {
        if index >= self.media_count() {
            log::debug!("Ignoring media index {} of {}", index, self.media_count());
            return;
        }
        self.show_media(index);
    }

    fn show_media(&mut self, index: usize) {
        if index != self.media_index {
            self.media_index = index;
            self.playback.clear_error();
            log::debug!("Showing media {} of project {}", index, self.project_index);
        }
    }

    /// Key of the playback surface for the current item, if it is a direct
    /// video.
    pub fn surface_key(&self) -> Option<SurfaceKey> {
        let item = self.current_media()?;
        match item.kind {
            MediaKind::Video => Some(SurfaceKey {
                project_index: self.project_index,
                media_index: self.media_index,
                url: item.url,
                reload_token: self.reload_token,
            }),
            MediaKind::Image | MediaKind::Embed => None,
        }
    }

    /// Mount the playback surface for the current item.
    ///
    /// Returns the key when a new instance was mounted and a load attempt
    /// should start for it.
    pub fn mount_surface(&mut self) -> Option<SurfaceKey> {
        if !self.is_open {
            return None;
        }
        match self.surface_key() {
            Some(key) => self.playback.mount(&key).then_some(key),
            None => {
                self.playback.unmount();
                None
            }
        }
    }

    /// Apply a load or error signal from the media subsystem.
    pub fn apply_signal(&mut self, signal: PlaybackSignal) {
        if self.surface_key().as_ref() != Some(signal.key()) {
            log::debug!("Discarding stale playback signal for {:?}", signal.key());
            return;
        }
        if let PlaybackSignal::Error { message, .. } = &signal {
            log::warn!("Video playback failed: {}", message);
        }
        self.playback.apply(signal);
    }

    /// Error of the currently displayed video, if it failed.
    pub fn playback_error(&self) -> Option<&str> {
        let key = self.surface_key()?;
        self.playback.error_for(&key)
    }

    /// Clear the playback error and force a fresh load attempt.
    pub fn retry(&mut self) {
        self.playback.clear_error();
        self.reload_token += 1;
        log::debug!("Retrying playback, reload token {}", self.reload_token);
    }

    /// Leave a failed video for the next media item.
    pub fn skip_to_next(&mut self) {
        if self.media_count() > 1 {
            self.next_media();
        }
    }

    /// React to a key press. Returns whether the key was handled.
    ///
    /// Inert while the viewer is closed.
    pub fn handle_key(&mut self, press: KeyPress, listener: &mut impl ViewerListener) -> bool {
        if !self.is_open {
            return false;
        }
        match (press.key, press.shift) {
            (NavKey::Escape, _) => self.close(listener),
            (NavKey::ArrowLeft, false) => self.previous_media(),
            (NavKey::ArrowRight, false) => self.next_media(),
            (NavKey::ArrowLeft, true) => self.previous_project(listener),
            (NavKey::ArrowRight, true) => self.next_project(listener),
        }
        true
    }

    pub fn gesture_mut(&mut self) -> &mut DragGesture {
        &mut self.gesture
    }

    /// Describe what the modal should show for the current state.
    pub fn layout(&self) -> ViewerLayout {
        let items = self.media();
        let media_count = items.len();
        let project_count = self.project_count();

        let surface = match items.get(self.media_index) {
            None => Surface::Empty,
            Some(item) => match item.kind {
                MediaKind::Image => Surface::Image {
                    url: item.url.clone(),
                },
                MediaKind::Embed => Surface::Embed {
                    url: media::embed_url(&item.url),
                    provider: media::embed_provider(&item.url),
                },
                MediaKind::Video => {
                    let key = SurfaceKey {
                        project_index: self.project_index,
                        media_index: self.media_index,
                        url: item.url.clone(),
                        reload_token: self.reload_token,
                    };
                    let error = self.playback.error_for(&key).map(str::to_string);
                    Surface::Video {
                        key,
                        error,
                        can_skip: media_count > 1,
                        muted: self.muted,
                    }
                }
            },
        };

        ViewerLayout {
            project_name: self.current_project().name.clone(),
            project_index: self.project_index,
            project_count,
            media_index: self.media_index,
            media_count,
            surface,
            show_media_nav: media_count > 1,
            show_project_nav: project_count > 1,
            show_thumbnails: media_count > 1,
            show_project_selector: project_count > 1,
            thumbnails: items.iter().map(|item| item.kind).collect(),
        }
    }
}
