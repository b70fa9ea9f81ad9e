// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media viewer modal.
//!
//! Draws a [`ViewerLayout`] as a centered window: project header, media
//! surface with previous/next controls, thumbnail strip and the draggable
//! project selector. User input is returned as a [`ViewerAction`]; only the
//! selector drag gesture is updated in place.

use super::textures::{ImageSlot, TextureCache};
use crate::models::media::MediaKind;
use crate::models::portfolio::Project;
use crate::util::geometry;
use crate::viewer::{DragGesture, PointerButton, Surface, ViewerLayout};

/// Height of the media area.
const MEDIA_HEIGHT: f32 = 420.0;

/// Result of viewer interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    None,
    Close,
    PreviousProject,
    NextProject,
    SelectProject(usize),
    PreviousMedia,
    NextMedia,
    SelectMedia(usize),
    Retry,
    SkipToNext,
    ToggleMute,
    /// Hand a direct video to the system player
    PlayVideo { url: String, muted: bool },
    /// Open a provider player in the browser
    OpenEmbed(String),
}

/// Display the viewer modal.
pub fn show(
    ctx: &egui::Context,
    layout: &ViewerLayout,
    projects: &[Project],
    gesture: &mut DragGesture,
    textures: &mut TextureCache,
) -> ViewerAction {
    let mut action = ViewerAction::None;
    let mut open = true;

    // Dim the page behind the modal
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("viewer_backdrop"),
    ))
    .rect_filled(ctx.screen_rect(), 0.0, egui::Color32::from_black_alpha(160));

    egui::Window::new(layout.project_name.as_str())
        .id(egui::Id::new("media_viewer"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(860.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            header(ui, layout, &mut action);
            ui.separator();

            media_area(ui, layout, textures, &mut action);

            if layout.show_thumbnails {
                ui.add_space(6.0);
                thumbnails(ui, layout, &mut action);
            }

            if layout.show_project_selector {
                ui.separator();
                if let Some(index) = project_selector(ui, projects, layout.project_index, gesture) {
                    action = ViewerAction::SelectProject(index);
                }
            }
        });

    if !open {
        action = ViewerAction::Close;
    }
    action
}

fn header(ui: &mut egui::Ui, layout: &ViewerLayout, action: &mut ViewerAction) {
    ui.horizontal(|ui| {
        if layout.show_project_nav && ui.button("⏮ Previous project").clicked() {
            *action = ViewerAction::PreviousProject;
        }

        ui.label(
            egui::RichText::new(format!(
                "Project {} of {}",
                layout.project_index + 1,
                layout.project_count
            ))
            .weak(),
        );

        if layout.show_project_nav && ui.button("Next project ⏭").clicked() {
            *action = ViewerAction::NextProject;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if layout.media_count > 0 {
                ui.label(format!("{} / {}", layout.media_index + 1, layout.media_count));
            }
        });
    });
}

fn media_area(
    ui: &mut egui::Ui,
    layout: &ViewerLayout,
    textures: &mut TextureCache,
    action: &mut ViewerAction,
) {
    ui.horizontal(|ui| {
        let nav_width = if layout.show_media_nav { 36.0 } else { 0.0 };

        if layout.show_media_nav && ui.add_sized([28.0, MEDIA_HEIGHT], egui::Button::new("⏴")).clicked() {
            *action = ViewerAction::PreviousMedia;
        }

        let size = egui::vec2(ui.available_width() - nav_width, MEDIA_HEIGHT);
        ui.allocate_ui(size, |ui| {
            ui.set_min_size(size);
            surface(ui, &layout.surface, size, textures, action);
        });

        if layout.show_media_nav && ui.add_sized([28.0, MEDIA_HEIGHT], egui::Button::new("⏵")).clicked() {
            *action = ViewerAction::NextMedia;
        }
    });
}

fn surface(
    ui: &mut egui::Ui,
    surface: &Surface,
    size: egui::Vec2,
    textures: &mut TextureCache,
    action: &mut ViewerAction,
) {
    match surface {
        Surface::Empty => {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("🖼 Media coming soon")
                        .size(20.0)
                        .color(egui::Color32::from_gray(160)),
                );
            });
        }
        Surface::Image { url } => {
            let placeholder = textures.placeholder(ui.ctx());
            match textures.get(url) {
                ImageSlot::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
                ImageSlot::Ready { texture, size: image_size } => {
                    paint_texture(ui, texture, *image_size, size);
                }
                ImageSlot::Failed => {
                    let [w, h] = placeholder.size();
                    paint_texture(ui, &placeholder, (w as u32, h as u32), size);
                }
            }
        }
        Surface::Embed { url, provider } => {
            ui.vertical_centered(|ui| {
                ui.add_space(size.y / 3.0);
                let name = provider.map(|p| p.label()).unwrap_or("External");
                ui.heading(format!("{} video", name));
                ui.label(egui::RichText::new(url).monospace().weak());
                ui.add_space(10.0);
                if ui.button("▶ Open player").clicked() {
                    *action = ViewerAction::OpenEmbed(url.clone());
                }
            });
        }
        Surface::Video {
            key,
            error,
            can_skip,
            muted,
        } => {
            ui.vertical_centered(|ui| {
                ui.add_space(size.y / 3.0);
                match error {
                    Some(message) => {
                        ui.label(
                            egui::RichText::new("⚠ This video could not be played")
                                .size(18.0)
                                .color(egui::Color32::from_rgb(230, 160, 60)),
                        );
                        ui.label(egui::RichText::new(message).weak());
                        ui.add_space(10.0);
                        ui.horizontal(|ui| {
                            if ui.button("⟳ Retry").clicked() {
                                *action = ViewerAction::Retry;
                            }
                            if *can_skip && ui.button("Skip to next ⏵").clicked() {
                                *action = ViewerAction::SkipToNext;
                            }
                        });
                    }
                    None => {
                        let name = key.url.rsplit('/').next().unwrap_or(key.url.as_str());
                        ui.heading(format!("🎞 {}", name));
                        ui.add_space(10.0);
                        ui.horizontal(|ui| {
                            if ui.button("▶ Play").clicked() {
                                *action = ViewerAction::PlayVideo {
                                    url: key.url.clone(),
                                    muted: *muted,
                                };
                            }
                            let icon = if *muted { "🔇 Muted" } else { "🔊 Sound on" };
                            if ui.selectable_label(!*muted, icon).clicked() {
                                *action = ViewerAction::ToggleMute;
                            }
                        });
                    }
                }
            });
        }
    }
}

/// Paint a texture scaled to fit and centered in an area of `size`.
fn paint_texture(ui: &mut egui::Ui, texture: &egui::TextureHandle, image_size: (u32, u32), size: egui::Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let (width, height) = geometry::fit_within(image_size.0, image_size.1, size.x, size.y);
    let (x_offset, y_offset) = geometry::center_offset(width, height, size.x, size.y);

    let image_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(x_offset, y_offset),
        egui::vec2(width, height),
    );
    ui.painter().image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn thumbnails(ui: &mut egui::Ui, layout: &ViewerLayout, action: &mut ViewerAction) {
    ui.horizontal_wrapped(|ui| {
        for (index, kind) in layout.thumbnails.iter().enumerate() {
            let icon = match kind {
                MediaKind::Image => "🖼",
                MediaKind::Video => "🎞",
                MediaKind::Embed => "▶",
            };
            let selected = index == layout.media_index;
            if ui.selectable_label(selected, format!("{} {}", icon, index + 1)).clicked() {
                *action = ViewerAction::SelectMedia(index);
            }
        }
    });
}

/// Horizontally scrollable strip of project chips with drag-to-scroll.
///
/// Returns the chip the user picked, unless the click ended a drag.
fn project_selector(
    ui: &mut egui::Ui,
    projects: &[Project],
    current: usize,
    gesture: &mut DragGesture,
) -> Option<usize> {
    let (hover_pos, primary_pressed, secondary_pressed, middle_pressed, released) = ui.input(|i| {
        (
            i.pointer.hover_pos(),
            i.pointer.primary_pressed(),
            i.pointer.secondary_pressed(),
            i.pointer.button_pressed(egui::PointerButton::Middle),
            i.pointer.any_released(),
        )
    });

    let mut area = egui::ScrollArea::horizontal()
        .id_source("project_selector")
        .drag_to_scroll(false);
    if let Some(pos) = hover_pos {
        if let Some(offset) = gesture.pointer_move(pos.x) {
            area = area.horizontal_scroll_offset(offset);
        }
    }

    let mut clicked = None;
    let output = area.show(ui, |ui| {
        ui.horizontal(|ui| {
            for (index, project) in projects.iter().enumerate() {
                if ui.selectable_label(index == current, &project.name).clicked() {
                    clicked = Some(index);
                }
            }
        });
    });

    let strip = output.inner_rect;
    let offset = output.state.offset.x;
    match hover_pos {
        Some(pos) if strip.contains(pos) => {
            let button = if primary_pressed {
                Some(PointerButton::Primary)
            } else if secondary_pressed {
                Some(PointerButton::Secondary)
            } else if middle_pressed {
                Some(PointerButton::Middle)
            } else {
                None
            };
            if let Some(button) = button {
                gesture.pointer_down(button, pos.x, offset);
            }
        }
        _ => {
            if gesture.is_dragging() {
                gesture.pointer_leave();
            }
        }
    }

    let selected = clicked.filter(|_| gesture.accept_click());
    if released {
        gesture.pointer_up();
    }

    if gesture.is_dragging() {
        ui.ctx().request_repaint();
    }
    selected
}
