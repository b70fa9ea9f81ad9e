// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides aspect-preserving fitting of media into the space
//! available in the viewer.

/// Scale `(width, height)` to the largest size that fits inside
/// `(max_width, max_height)` while keeping the aspect ratio.
pub fn fit_within(width: u32, height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    if width == 0 || height == 0 || max_width <= 0.0 || max_height <= 0.0 {
        return (0.0, 0.0);
    }

    let aspect = width as f32 / height as f32;
    let available_aspect = max_width / max_height;

    if aspect > available_aspect {
        // Wider than the space - fit to width
        (max_width, max_width / aspect)
    } else {
        // Taller than the space - fit to height
        (max_height * aspect, max_height)
    }
}

/// Offset that centers a `(width, height)` box inside `(outer_width, outer_height)`.
pub fn center_offset(width: f32, height: f32, outer_width: f32, outer_height: f32) -> (f32, f32) {
    ((outer_width - width).max(0.0) / 2.0, (outer_height - height).max(0.0) / 2.0)
}
