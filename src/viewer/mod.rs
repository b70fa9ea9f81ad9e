// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project media viewer.
//!
//! The viewer is a modal that browses a list of projects and, for each one,
//! cycles through its images, videos and embedded videos. The state machine
//! in this module is independent of egui; `ui::viewer` draws it.

pub mod gesture;
pub mod layout;
pub mod playback;
pub mod state;

pub use gesture::{DragGesture, PointerButton};
pub use layout::{Surface, ViewerLayout};
pub use playback::{PlaybackSignal, SurfaceKey};
pub use state::{KeyPress, MediaViewer, NavKey, ViewerListener};
