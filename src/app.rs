// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. It owns the portfolio content, keeps the page's
//! current project in sync with the media viewer, and routes background
//! loading results and keyboard input to the viewer while it is open.

use crate::config::Args;
use crate::io::{media, serialization};
use crate::models::portfolio::{Portfolio, Project};
use crate::ui::page::{self, PageAction, Section};
use crate::ui::textures::TextureCache;
use crate::ui::theme::ThemeMode;
use crate::ui::viewer::{self as viewer_ui, ViewerAction};
use crate::viewer::{KeyPress, MediaViewer, NavKey, PlaybackSignal, ViewerListener};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

/// Page-side state the media viewer reports to.
struct Showcase {
    /// Project highlighted on the page and opened by default
    current_project: usize,
}

impl ViewerListener for Showcase {
    fn on_close(&mut self) {
        log::debug!("Viewer closed on project {}", self.current_project);
    }

    fn on_project_change(&mut self, index: usize) {
        self.current_project = index;
    }
}

/// Result of background content loading.
struct LoadedContent {
    portfolio: Portfolio,
    content_dir: Option<PathBuf>,
}

/// Main application state.
pub struct FolioApp {
    /// Profile, experience, skills and contact (projects live in `projects`)
    portfolio: Portfolio,

    /// Projects shared read-only with the viewer
    projects: Arc<[Project]>,

    /// Directory relative media paths resolve against
    content_dir: Option<PathBuf>,

    showcase: Showcase,

    /// Open media viewer, if any
    viewer: Option<MediaViewer>,

    /// Decoded project images
    textures: TextureCache,

    /// Channel for video probe results
    probe_sender: Sender<PlaybackSignal>,
    probe_receiver: Receiver<PlaybackSignal>,

    /// Receiver for background content loading
    content_loader: Option<Receiver<Result<LoadedContent, String>>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Project to open the viewer on once content is available
    pending_open: Option<usize>,

    /// Section the page should scroll to this frame
    scroll_target: Option<Section>,

    /// Theme picked in the navigation bar and the one last applied
    theme: ThemeMode,
    applied_theme: Option<ThemeMode>,
}

impl FolioApp {
    /// Create the application from command line arguments.
    pub fn new(args: Args) -> Self {
        let (probe_sender, probe_receiver) = channel();
        let mut app = Self {
            portfolio: Portfolio::default(),
            projects: Arc::from(Vec::new()),
            content_dir: None,
            showcase: Showcase { current_project: 0 },
            viewer: None,
            textures: TextureCache::new(),
            probe_sender,
            probe_receiver,
            content_loader: None,
            loading_message: None,
            pending_open: args.project,
            scroll_target: None,
            theme: ThemeMode::default(),
            applied_theme: None,
        };

        match args.content {
            Some(path) => app.load_content_file(path),
            None => app.load_demo_content(),
        }
        app
    }

    /// Replace the displayed content.
    fn set_content(&mut self, mut portfolio: Portfolio, content_dir: Option<PathBuf>) {
        self.projects = Arc::from(std::mem::take(&mut portfolio.projects));
        self.portfolio = portfolio;
        self.textures.set_base_dir(content_dir.clone());
        self.content_dir = content_dir;
        self.viewer = None;
        self.showcase.current_project = 0;

        log::info!(
            "Showing portfolio of {} with {} projects",
            self.portfolio.profile.name,
            self.projects.len()
        );

        if let Some(index) = self.pending_open.take() {
            self.open_viewer(index);
        }
    }

    fn load_demo_content(&mut self) {
        match serialization::demo_portfolio() {
            Ok(portfolio) => self.set_content(portfolio, None),
            Err(e) => log::error!("{:#}", e),
        }
    }

    /// Load a content file (asynchronously).
    fn load_content_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.content_loader = Some(receiver);
        self.loading_message = Some(format!("Loading {}...", path.display()));

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = serialization::load_portfolio(&path)
                .map(|portfolio| LoadedContent {
                    portfolio,
                    content_dir: path.parent().map(Path::to_path_buf),
                })
                .map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Open the media viewer on `index`; out-of-range indices are ignored.
    fn open_viewer(&mut self, index: usize) {
        if let Some(viewer) = MediaViewer::open(self.projects.clone(), index) {
            self.showcase.current_project = index;
            self.viewer = Some(viewer);
        }
    }

    /// Route key presses to the open viewer.
    fn handle_viewer_keys(&mut self, presses: Vec<KeyPress>) {
        if let Some(viewer) = self.viewer.as_mut().filter(|v| v.is_open()) {
            for press in presses {
                viewer.handle_key(press, &mut self.showcase);
            }
        }
        self.drop_closed_viewer();
    }

    /// Discard the viewer's state once it has closed.
    fn drop_closed_viewer(&mut self) {
        if self.viewer.as_ref().is_some_and(|v| !v.is_open()) {
            self.viewer = None;
        }
    }
}

/// Translate this frame's key events into viewer key presses.
fn viewer_key_presses(ctx: &egui::Context) -> Vec<KeyPress> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => {
                    let key = match key {
                        egui::Key::Escape => NavKey::Escape,
                        egui::Key::ArrowLeft => NavKey::ArrowLeft,
                        egui::Key::ArrowRight => NavKey::ArrowRight,
                        _ => return None,
                    };
                    Some(KeyPress {
                        key,
                        shift: modifiers.shift,
                    })
                }
                _ => None,
            })
            .collect()
    })
}

/// Apply a modal interaction to the viewer.
fn apply_viewer_action(
    viewer: &mut MediaViewer,
    action: ViewerAction,
    showcase: &mut Showcase,
    content_dir: Option<&Path>,
    ctx: &egui::Context,
) {
    match action {
        ViewerAction::Close => viewer.close(showcase),
        ViewerAction::PreviousProject => viewer.previous_project(showcase),
        ViewerAction::NextProject => viewer.next_project(showcase),
        ViewerAction::SelectProject(index) => viewer.set_project_index(index as isize, showcase),
        ViewerAction::PreviousMedia => viewer.previous_media(),
        ViewerAction::NextMedia => viewer.next_media(),
        ViewerAction::SelectMedia(index) => viewer.select_media(index),
        ViewerAction::Retry => viewer.retry(),
        ViewerAction::SkipToNext => viewer.skip_to_next(),
        ViewerAction::ToggleMute => viewer.toggle_mute(),
        ViewerAction::PlayVideo { url, muted } => {
            let target = media::player_source(&url, content_dir)
                .and_then(|source| media::write_player_page(&source, muted))
                .and_then(|page| media::file_url(&page));
            match target {
                Ok(target) => {
                    log::info!("Playing {} ({})", url, if muted { "muted" } else { "with sound" });
                    ctx.open_url(egui::OpenUrl::new_tab(target));
                }
                Err(e) => log::warn!("Cannot hand {} to a player: {:#}", url, e),
            }
        }
        ViewerAction::OpenEmbed(url) => {
            log::info!("Opening embedded player {}", url);
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }
        ViewerAction::None => {}
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed content loading
        if let Some(ref receiver) = self.content_loader {
            if let Ok(result) = receiver.try_recv() {
                self.content_loader = None;
                self.loading_message = None;

                match result {
                    Ok(loaded) => self.set_content(loaded.portfolio, loaded.content_dir),
                    Err(e) => log::error!("Failed to load content: {}", e),
                }
            }
        }

        self.textures.poll(ctx);

        // Signals for a viewer that has since closed are dropped here
        while let Ok(signal) = self.probe_receiver.try_recv() {
            if let Some(viewer) = self.viewer.as_mut() {
                viewer.apply_signal(signal);
            }
        }

        // Keyboard shortcuts only reach the viewer while it is open
        if self.viewer.is_some() {
            self.handle_viewer_keys(viewer_key_presses(ctx));
        }

        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(self.theme.visuals());
            self.applied_theme = Some(self.theme);
            log::debug!("Applied {:?} theme", self.theme);
        }

        // Request repaint while loading (to update spinners)
        if self.loading_message.is_some() || self.textures.is_loading() {
            ctx.request_repaint();
        } else if self.viewer.is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Content...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Portfolio", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_content_file(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Show Demo Content").clicked() {
                        self.load_demo_content();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Sticky navigation bar
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            page::nav_bar(
                ui,
                &self.portfolio.profile.name,
                &mut self.scroll_target,
                &mut self.theme,
            );
        });

        let viewer_open = self.viewer.is_some();
        let page_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Show loading overlay if loading
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    PageAction::None
                } else {
                    ui.add_enabled_ui(!viewer_open, |ui| {
                        page::show(
                            ui,
                            &self.portfolio,
                            &self.projects,
                            self.showcase.current_project,
                            &mut self.scroll_target,
                        )
                    })
                    .inner
                }
            })
            .inner;

        if let PageAction::OpenProject(index) = page_action {
            self.open_viewer(index);
        }

        // Media viewer modal
        if let Some(viewer) = self.viewer.as_mut() {
            if let Some(key) = viewer.mount_surface() {
                log::debug!("Mounting playback surface for {}", key.url);
                media::spawn_video_probe(key, self.content_dir.clone(), self.probe_sender.clone());
            }

            let layout = viewer.layout();
            let action = viewer_ui::show(
                ctx,
                &layout,
                &self.projects,
                viewer.gesture_mut(),
                &mut self.textures,
            );
            apply_viewer_action(
                viewer,
                action,
                &mut self.showcase,
                self.content_dir.as_deref(),
                ctx,
            );
        }

        self.drop_closed_viewer();
    }
}
