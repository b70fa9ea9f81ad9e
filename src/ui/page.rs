// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio page.
//!
//! This module draws the scrollable page (hero, projects, experience,
//! skills, contact), the sticky navigation bar that jumps between its
//! sections and the floating "back to top" button.

use super::theme::ThemeMode;
use crate::models::portfolio::{Link, Portfolio, Project};

/// Scroll distance after which the "back to top" button appears.
const BACK_TO_TOP_OFFSET: f32 = 300.0;

/// Result of page interaction.
pub enum PageAction {
    None,
    OpenProject(usize),
}

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Projects,
    Experience,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Display the navigation bar.
///
/// Sets `scroll_target` when a section (or the name, for the top) is
/// picked, and flips `theme` from the switch on the right.
pub fn nav_bar(ui: &mut egui::Ui, name: &str, scroll_target: &mut Option<Section>, theme: &mut ThemeMode) {
    ui.horizontal(|ui| {
        let title = egui::Label::new(egui::RichText::new(name).strong()).sense(egui::Sense::click());
        if ui.add(title).on_hover_text("Back to top").clicked() {
            *scroll_target = Some(Section::Hero);
        }
        ui.separator();
        for section in Section::ALL {
            if ui.button(section.label()).clicked() {
                *scroll_target = Some(section);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(theme.switch_label()).on_hover_text("Switch theme").clicked() {
                *theme = theme.toggled();
            }
        });
    });
}

/// Whether the page has scrolled far enough to offer "back to top".
pub fn show_back_to_top(scroll_offset: f32) -> bool {
    scroll_offset > BACK_TO_TOP_OFFSET
}

/// Display the page.
///
/// `current_project` is highlighted; it follows the media viewer's
/// project changes.
pub fn show(
    ui: &mut egui::Ui,
    portfolio: &Portfolio,
    projects: &[Project],
    current_project: usize,
    scroll_target: &mut Option<Section>,
) -> PageAction {
    let mut action = PageAction::None;
    let target = scroll_target.take();

    let output = egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.set_max_width(ui.available_width().min(960.0));

            section_heading(ui, Section::Hero, target, None);
            hero(ui, portfolio);

            section_heading(ui, Section::Projects, target, Some("Projects"));
            for (index, project) in projects.iter().enumerate() {
                if project_card(ui, project, index == current_project) {
                    action = PageAction::OpenProject(index);
                }
                ui.add_space(8.0);
            }

            section_heading(ui, Section::Experience, target, Some("Experience"));
            for entry in &portfolio.experience {
                ui.horizontal(|ui| {
                    ui.strong(format!("{} · {}", entry.role, entry.company));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&entry.period).weak());
                    });
                });
                for highlight in &entry.highlights {
                    ui.label(format!("• {}", highlight));
                }
                ui.add_space(8.0);
            }

            section_heading(ui, Section::Skills, target, Some("Skills"));
            egui::Grid::new("skills_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for group in &portfolio.skills {
                        ui.strong(&group.category);
                        ui.label(group.items.join(", "));
                        ui.end_row();
                    }
                });

            section_heading(ui, Section::Contact, target, Some("Contact"));
            if let Some(email) = &portfolio.contact.email {
                ui.hyperlink_to(format!("✉ {}", email), format!("mailto:{}", email));
            }
            links(ui, &portfolio.contact.links);
            ui.add_space(40.0);
        });

    // Hidden while the page is disabled behind the media viewer
    if ui.is_enabled() && show_back_to_top(output.state.offset.y) {
        egui::Area::new(egui::Id::new("back_to_top"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ui.ctx(), |ui| {
                if ui.button("⬆ Back to top").clicked() {
                    *scroll_target = Some(Section::Hero);
                }
            });
    }

    action
}

/// Section anchor: scrolls into view when it is the navigation target.
fn section_heading(ui: &mut egui::Ui, section: Section, target: Option<Section>, title: Option<&str>) {
    ui.add_space(16.0);
    let response = match title {
        Some(title) => ui.heading(title),
        None => ui.allocate_response(egui::vec2(0.0, 0.0), egui::Sense::hover()),
    };
    if target == Some(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
    }
    if title.is_some() {
        ui.separator();
    }
}

fn hero(ui: &mut egui::Ui, portfolio: &Portfolio) {
    let profile = &portfolio.profile;
    ui.label(
        egui::RichText::new(&profile.name)
            .size(36.0)
            .strong(),
    );
    if !profile.headline.is_empty() {
        ui.label(
            egui::RichText::new(&profile.headline)
                .size(18.0)
                .color(ui.visuals().weak_text_color()),
        );
    }
    if let Some(location) = &profile.location {
        ui.label(egui::RichText::new(format!("📍 {}", location)).weak());
    }
    if !profile.summary.is_empty() {
        ui.add_space(8.0);
        ui.label(&profile.summary);
    }
}

/// Draw one project card. Returns whether "View media" was clicked.
fn project_card(ui: &mut egui::Ui, project: &Project, highlighted: bool) -> bool {
    let mut frame = egui::Frame::group(ui.style());
    if highlighted {
        frame = frame.stroke(egui::Stroke::new(1.5, ui.visuals().selection.bg_fill));
    }

    frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let clicked = ui
                .horizontal(|ui| {
                    ui.heading(&project.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.button(format!("🖼 View media ({})", project.media_count()))
                            .clicked()
                    })
                    .inner
                })
                .inner;

            if !project.description.is_empty() {
                ui.label(&project.description);
            }
            if !project.tech.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for tag in &project.tech {
                        ui.label(egui::RichText::new(tag).monospace().weak());
                    }
                });
            }
            links(ui, &project.links);
            clicked
        })
        .inner
}

fn links(ui: &mut egui::Ui, links: &[Link]) {
    if links.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for link in links {
            ui.hyperlink_to(&link.label, &link.url);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!show_back_to_top(0.0));
        assert!(!show_back_to_top(300.0));
        assert!(show_back_to_top(301.0));
    }

    #[test]
    fn test_sections_start_at_hero() {
        assert_eq!(Section::ALL[0], Section::Hero);
        assert_eq!(Section::Hero.label(), "About");
    }
}
