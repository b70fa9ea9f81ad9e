// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Folio application.

pub mod page;
pub mod textures;
pub mod theme;
pub mod viewer;
