// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content deserialization.
//!
//! This module handles importing the portfolio document from YAML and
//! JSON files, and provides the bundled demo document.

use crate::models::portfolio::Portfolio;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Demo content used when no content file is given.
const DEMO_CONTENT: &str = include_str!("../../content/portfolio.yaml");

/// Parse portfolio content from a YAML string.
pub fn parse_yaml(yaml: &str) -> Result<Portfolio> {
    let data = serde_yaml::from_str(yaml)?;
    Ok(data)
}

/// Parse portfolio content from a JSON string.
pub fn parse_json(json: &str) -> Result<Portfolio> {
    let data = serde_json::from_str(json)?;
    Ok(data)
}

/// Import portfolio content from a file, choosing the format by extension.
pub fn load_portfolio(path: &Path) -> Result<Portfolio> {
    let extension = path.extension().and_then(|s| s.to_str());
    let parse: fn(&str) -> Result<Portfolio> = match extension {
        Some("yaml") | Some("yml") => parse_yaml,
        Some("json") => parse_json,
        _ => bail!("Unsupported content file extension: {:?}", extension),
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// The bundled demo portfolio.
pub fn demo_portfolio() -> Result<Portfolio> {
    parse_yaml(DEMO_CONTENT).context("Bundled demo content is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_defaults() {
        let yaml = r#"
profile:
  name: Ada
projects:
  - name: Engine
    images: [engine.png]
  - name: Notes
"#;
        let portfolio = parse_yaml(yaml).unwrap();
        assert_eq!(portfolio.profile.name, "Ada");
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.projects[0].images, vec!["engine.png"]);
        assert!(portfolio.projects[1].images.is_empty());
        assert!(portfolio.projects[1].videos.is_empty());
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.contact.email.is_none());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "profile": { "name": "Ada", "headline": "Engineer" },
            "projects": [
                { "name": "Engine", "videos": ["https://youtu.be/dQw4w9WgXcQ"] }
            ],
            "skills": [ { "category": "Languages", "items": ["Rust"] } ],
            "contact": { "email": "ada@example.com" }
        }"#;
        let portfolio = parse_json(json).unwrap();
        assert_eq!(portfolio.profile.headline, "Engineer");
        assert_eq!(portfolio.projects[0].media_count(), 1);
        assert_eq!(portfolio.skills[0].items, vec!["Rust"]);
        assert_eq!(portfolio.contact.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_missing_profile_name_is_rejected() {
        assert!(parse_yaml("profile: {}\n").is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_portfolio(Path::new("portfolio.toml")).unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn test_missing_file() {
        assert!(load_portfolio(Path::new("/nonexistent/folio/portfolio.yaml")).is_err());
    }

    #[test]
    fn test_demo_content_parses() {
        let portfolio = demo_portfolio().unwrap();
        assert!(!portfolio.profile.name.is_empty());
        assert!(portfolio.projects.len() > 1);
        assert!(portfolio.projects.iter().any(|p| p.media_count() == 0));
    }
}
