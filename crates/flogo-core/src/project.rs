use crate::error::Result;
use crate::paths;
use crate::types::{null_as_default, ItemType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

// ---------------------------------------------------------------------------
// ItemDescriptor
// ---------------------------------------------------------------------------

/// One installed activity, model or trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Path", default)]
    pub path: String,
    #[serde(
        alias = "Version",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    /// Set when the item was copied into the project source tree.
    #[serde(alias = "Local", default, skip_serializing_if = "std::ops::Not::not")]
    pub local: bool,
}

impl ItemDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version: None,
            local: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectDescriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Activities", default, deserialize_with = "null_as_default")]
    pub activities: Vec<ItemDescriptor>,
    #[serde(alias = "Models", default, deserialize_with = "null_as_default")]
    pub models: Vec<ItemDescriptor>,
    #[serde(alias = "Triggers", default, deserialize_with = "null_as_default")]
    pub triggers: Vec<ItemDescriptor>,
    /// Fields this tool does not manage (version, description, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
            models: Vec::new(),
            triggers: Vec::new(),
            extra: Map::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        crate::io::read_json(&paths::project_descriptor_path(root))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_json(&paths::project_descriptor_path(root), self)
    }

    // -----------------------------------------------------------------------
    // Item lists
    // -----------------------------------------------------------------------

    pub fn items(&self, item_type: ItemType) -> &[ItemDescriptor] {
        match item_type {
            ItemType::Activity => &self.activities,
            ItemType::Model => &self.models,
            ItemType::Trigger => &self.triggers,
        }
    }

    fn items_mut(&mut self, item_type: ItemType) -> &mut Vec<ItemDescriptor> {
        match item_type {
            ItemType::Activity => &mut self.activities,
            ItemType::Model => &mut self.models,
            ItemType::Trigger => &mut self.triggers,
        }
    }

    pub fn contains(&self, item_type: ItemType, name: &str) -> bool {
        self.items(item_type).iter().any(|i| i.name == name)
    }

    /// Append `item` at the end of its type list. Uniqueness is checked by
    /// the resolver before this is called.
    pub fn push(&mut self, item_type: ItemType, item: ItemDescriptor) {
        self.items_mut(item_type).push(item);
    }
}
