//! Icon packs: extra icon definitions loaded from TOML

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::IconDefinition;
use crate::error::ParseError;

/// Errors that can occur when loading an icon pack
#[derive(Error, Debug)]
pub enum IconPackError {
    #[error("Failed to read icon pack file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon pack TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid markup for icon '{icon}': {}", format_errors(.errors))]
    Markup {
        icon: String,
        markup: String,
        errors: Vec<ParseError>,
    },
}

fn format_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl IconPackError {
    /// Pretty-print markup errors with source context; other errors use Display
    pub fn report(&self, filename: &str) -> String {
        match self {
            IconPackError::Markup {
                icon,
                markup,
                errors,
            } => errors
                .iter()
                .map(|e| e.format(markup, &format!("{}#{}", filename, icon)))
                .collect::<Vec<_>>()
                .join("\n"),
            other => other.to_string(),
        }
    }
}

/// A named set of icon definitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconPack {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icons: Vec<IconDefinition>,
}

/// TOML structure for deserializing icon packs
#[derive(Deserialize)]
struct TomlIconPack {
    metadata: Option<TomlMetadata>,
    icons: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl IconPack {
    /// Load an icon pack from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, IconPackError> {
        let content = std::fs::read_to_string(path)?;
        let pack = Self::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            icons = pack.icons.len(),
            "loaded icon pack"
        );
        Ok(pack)
    }

    /// Load an icon pack from a TOML string
    ///
    /// ```toml
    /// [metadata]
    /// name = "brand"
    ///
    /// [icons]
    /// logo = '<circle cx="12" cy="12" r="10"/>'
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, IconPackError> {
        let parsed: TomlIconPack = toml::from_str(content)?;

        let mut icons = Vec::with_capacity(parsed.icons.len());
        for (name, markup) in parsed.icons {
            match IconDefinition::from_markup(name.clone(), &markup) {
                Ok(def) => icons.push(def),
                Err(errors) => {
                    return Err(IconPackError::Markup {
                        icon: name,
                        markup,
                        errors,
                    })
                }
            }
        }

        Ok(IconPack {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            icons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pack_with_metadata() {
        let toml_str = r#"
[metadata]
name = "brand"
description = "Brand marks"

[icons]
logo = '<circle cx="12" cy="12" r="10"/><path d="M8 12h8"/>'
dot = '<circle cx="12" cy="12" r="1"/>'
"#;
        let pack = IconPack::from_str(toml_str).expect("Should parse");
        assert_eq!(pack.name, Some("brand".to_string()));
        assert_eq!(pack.description, Some("Brand marks".to_string()));
        // Sorted by name
        let names: Vec<_> = pack.icons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["dot", "logo"]);
        assert_eq!(pack.icons[1].shapes.len(), 2);
    }

    #[test]
    fn test_parse_pack_without_metadata() {
        let pack = IconPack::from_str("[icons]\nline = '<line x1=\"2\" y1=\"2\" x2=\"22\" y2=\"22\"/>'\n")
            .expect("Should parse");
        assert_eq!(pack.name, None);
        assert_eq!(pack.icons.len(), 1);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = IconPack::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(IconPackError::ParseError(_))));
    }

    #[test]
    fn test_invalid_markup_names_icon() {
        let result = IconPack::from_str("[icons]\nbroken = '<g><path d=\"M0 0\"/>'\n");
        match result {
            Err(err @ IconPackError::Markup { .. }) => {
                assert!(err.to_string().contains("broken"));
                assert!(err.report("pack.toml").contains("pack.toml#broken"));
            }
            other => panic!("Expected markup error, got {:?}", other),
        }
    }
}
