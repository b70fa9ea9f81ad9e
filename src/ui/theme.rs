// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dark and light appearance.

/// Appearance picked from the navigation bar. Starts dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Label of the switch, naming the mode it switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀ Light",
            ThemeMode::Light => "🌙 Dark",
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::default().visuals().dark_mode);
    }

    #[test]
    fn test_toggle_flips_visuals() {
        let light = ThemeMode::Dark.toggled();
        assert_eq!(light, ThemeMode::Light);
        assert!(!light.is_dark());
        assert!(!light.visuals().dark_mode);
        assert_eq!(light.toggled(), ThemeMode::Dark);
    }
}
