// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content model.
//!
//! This module defines the author-supplied document rendered by the page:
//! profile, projects, experience, skills and contact details.

use super::media::{self, MediaItem};
use serde::{Deserialize, Serialize};

/// Complete portfolio document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub contact: Contact,
}

/// Hero banner content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A showcased project and its media.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

impl Project {
    /// Create a project with the given name and media URLs.
    pub fn new(name: impl Into<String>, images: Vec<String>, videos: Vec<String>) -> Self {
        Self {
            name: name.into(),
            images,
            videos,
            ..Default::default()
        }
    }

    /// Ordered media list: images first, then videos.
    pub fn media_items(&self) -> Vec<MediaItem> {
        media::media_items(&self.images, &self.videos)
    }

    /// Number of media items without building the list.
    pub fn media_count(&self) -> usize {
        self.images.len() + self.videos.len()
    }
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A category of skills.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Contact footer content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::MediaKind;

    #[test]
    fn test_project_media_count_matches_items() {
        let project = Project::new(
            "Demo",
            vec!["one.png".into()],
            vec!["two.mp4".into(), "https://vimeo.com/1234".into()],
        );

        assert_eq!(project.media_count(), 3);
        let items = project.media_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].kind, MediaKind::Embed);
    }
}
