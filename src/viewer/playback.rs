// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-instance playback state for direct video surfaces.
//!
//! Every mounted playback surface has a [`SurfaceKey`]. Load and error
//! signals carry the key of the surface that produced them, and error state
//! is stored next to the key it belongs to, so a signal from a surface that
//! has since been replaced can never touch the current one.

/// Identity of one mounted playback surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceKey {
    pub project_index: usize,
    pub media_index: usize,
    pub url: String,
    pub reload_token: u64,
}

/// Asynchronous signal reported by the media subsystem for a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSignal {
    /// The source started loading; clears any prior error.
    LoadStarted(SurfaceKey),
    /// The source failed to load or play.
    Error { key: SurfaceKey, message: String },
}

impl PlaybackSignal {
    /// Key of the surface that emitted the signal.
    pub fn key(&self) -> &SurfaceKey {
        match self {
            PlaybackSignal::LoadStarted(key) => key,
            PlaybackSignal::Error { key, .. } => key,
        }
    }
}

/// Mounted surface and its error, if any.
#[derive(Debug, Default)]
pub struct PlaybackState {
    mounted: Option<SurfaceKey>,
    error: Option<(SurfaceKey, String)>,
}

impl PlaybackState {
    /// Mount the surface for `key`.
    ///
    /// Returns `true` when this is a new instance that needs a fresh load
    /// attempt, `false` when the same instance is already mounted.
    pub fn mount(&mut self, key: &SurfaceKey) -> bool {
        if self.mounted.as_ref() == Some(key) {
            return false;
        }
        self.mounted = Some(key.clone());
        if self.error.as_ref().is_some_and(|(k, _)| k != key) {
            self.error = None;
        }
        true
    }

    /// Drop the mounted surface, e.g. when an image or embed is displayed.
    pub fn unmount(&mut self) {
        self.mounted = None;
        self.error = None;
    }

    /// Apply a signal if it belongs to the mounted instance.
    ///
    /// Returns whether the signal was applied.
    pub fn apply(&mut self, signal: PlaybackSignal) -> bool {
        if self.mounted.as_ref() != Some(signal.key()) {
            return false;
        }
        match signal {
            PlaybackSignal::LoadStarted(_) => self.error = None,
            PlaybackSignal::Error { key, message } => self.error = Some((key, message)),
        }
        true
    }

    /// Error recorded for `key`, if that instance failed.
    pub fn error_for(&self, key: &SurfaceKey) -> Option<&str> {
        match &self.error {
            Some((k, message)) if k == key => Some(message.as_str()),
            _ => None,
        }
    }

    /// Forget the current error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(media_index: usize, reload_token: u64) -> SurfaceKey {
        SurfaceKey {
            project_index: 0,
            media_index,
            url: "clip.mp4".to_string(),
            reload_token,
        }
    }

    #[test]
    fn test_mount_is_idempotent_per_key() {
        let mut state = PlaybackState::default();
        assert!(state.mount(&key(0, 0)));
        assert!(!state.mount(&key(0, 0)));
        assert!(state.mount(&key(0, 1)));
    }

    #[test]
    fn test_error_then_load_started() {
        let mut state = PlaybackState::default();
        let k = key(0, 0);
        state.mount(&k);

        assert!(state.apply(PlaybackSignal::Error {
            key: k.clone(),
            message: "decode failed".into(),
        }));
        assert_eq!(state.error_for(&k), Some("decode failed"));

        assert!(state.apply(PlaybackSignal::LoadStarted(k.clone())));
        assert_eq!(state.error_for(&k), None);
    }

    #[test]
    fn test_stale_signal_is_ignored() {
        let mut state = PlaybackState::default();
        let old = key(0, 0);
        let new = key(1, 0);
        state.mount(&old);
        state.mount(&new);

        let applied = state.apply(PlaybackSignal::Error {
            key: old.clone(),
            message: "late".into(),
        });
        assert!(!applied);
        assert_eq!(state.error_for(&new), None);
        assert_eq!(state.error_for(&old), None);
    }

    #[test]
    fn test_remount_clears_foreign_error() {
        let mut state = PlaybackState::default();
        let first = key(0, 0);
        state.mount(&first);
        state.apply(PlaybackSignal::Error {
            key: first.clone(),
            message: "missing".into(),
        });

        let second = key(0, 1);
        state.mount(&second);
        assert_eq!(state.error_for(&second), None);
        assert_eq!(state.error_for(&first), None);
    }

    #[test]
    fn test_signal_without_mount_is_ignored() {
        let mut state = PlaybackState::default();
        assert!(!state.apply(PlaybackSignal::LoadStarted(key(0, 0))));
    }
}
