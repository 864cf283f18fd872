//! Name-keyed table of icon definitions

use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;

use super::builtin::ICONS;
use super::{IconDefinition, IconPack};

static BUILTIN: OnceLock<IconCatalog> = OnceLock::new();

/// Errors that can occur when registering icons
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// Duplicate icon definition
    #[error("duplicate icon definition: {name}")]
    Duplicate { name: String },
}

/// Registry of icon definitions
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    icons: BTreeMap<String, IconDefinition>,
}

impl IconCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in icon set, parsed on first use
    pub fn builtin() -> &'static IconCatalog {
        BUILTIN.get_or_init(|| {
            let mut catalog = IconCatalog::new();
            for (name, markup) in ICONS {
                let def = IconDefinition::from_markup(*name, markup)
                    .expect("built-in icon markup should be valid");
                catalog.icons.insert(def.name.clone(), def);
            }
            tracing::debug!(icons = catalog.len(), "loaded built-in icon catalog");
            catalog
        })
    }

    /// Register an icon definition
    pub fn register(&mut self, def: IconDefinition) -> Result<(), CatalogError> {
        if self.icons.contains_key(&def.name) {
            return Err(CatalogError::Duplicate {
                name: def.name.clone(),
            });
        }
        self.icons.insert(def.name.clone(), def);
        Ok(())
    }

    /// Add every icon from a pack, replacing same-named icons
    pub fn merge(&mut self, pack: IconPack) {
        let pack_name = pack.name.clone().unwrap_or_default();
        for def in pack.icons {
            if self.icons.contains_key(&def.name) {
                tracing::debug!(icon = %def.name, pack = %pack_name, "icon overridden by pack");
            }
            self.icons.insert(def.name.clone(), def);
        }
    }

    /// Get an icon by name
    pub fn get(&self, name: &str) -> Option<&IconDefinition> {
        self.icons.get(name)
    }

    /// Check if an icon exists
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// All icon names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(|s| s.as_str())
    }

    /// All icon definitions, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &IconDefinition> {
        self.icons.values()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{ShapeDescriptor, Tag};

    fn dot(name: &str) -> IconDefinition {
        IconDefinition::new(
            name,
            vec![ShapeDescriptor::new(Tag::Circle).with_attr("r", 1)],
        )
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = IconCatalog::builtin();
        assert!(catalog.len() >= 50);
        assert!(catalog.contains("x"));
        assert_eq!(catalog.get("x").map(|d| d.shapes.len()), Some(2));
        assert!(catalog.get("no-such-icon").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let names: Vec<_> = IconCatalog::builtin().names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_register_duplicate() {
        let mut catalog = IconCatalog::new();
        catalog.register(dot("dot")).expect("first registration");
        assert_eq!(
            catalog.register(dot("dot")),
            Err(CatalogError::Duplicate {
                name: "dot".to_string()
            })
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_merge_overrides() {
        let mut catalog = IconCatalog::builtin().clone();
        let before = catalog.len();
        let replacement = dot("x");
        catalog.merge(IconPack {
            name: Some("custom".to_string()),
            description: None,
            icons: vec![replacement.clone(), dot("brand-dot")],
        });
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.get("x"), Some(&replacement));
    }
}
