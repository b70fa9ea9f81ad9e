// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - a single-window personal portfolio
//!
//! Shows a profile, project showcase, experience timeline, skills and
//! contact details, with a modal viewer for browsing each project's
//! images and videos.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;
mod viewer;

use anyhow::Result;
use app::FolioApp;
use clap::Parser;
use config::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 640.0])
            .with_title("Folio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(|_cc| Ok(Box::new(FolioApp::new(args)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
