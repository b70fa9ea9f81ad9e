// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content data structures.

pub mod media;
pub mod portfolio;
