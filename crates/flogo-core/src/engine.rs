//! Engine runtime configuration (`bin/config.json`) and the merge of
//! trigger-declared settings into it.

use crate::error::Result;
use crate::types::{null_as_default, scalar_to_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Trigger's own descriptor (trigger.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Value", default, deserialize_with = "scalar_to_string")]
    pub value: String,
}

/// Read-only view of the settings a trigger author declares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerProjectDescriptor {
    #[serde(alias = "Name", default)]
    pub name: String,
    #[serde(alias = "Settings", default, deserialize_with = "null_as_default")]
    pub settings: Vec<Setting>,
}

impl TriggerProjectDescriptor {
    pub fn load(path: &Path) -> Result<Self> {
        crate::io::read_json(path)
    }
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Settings", default, deserialize_with = "null_as_default")]
    pub settings: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TriggerConfig {
    pub fn from_declared(name: impl Into<String>, declared: &TriggerProjectDescriptor) -> Self {
        let settings = declared
            .settings
            .iter()
            .map(|s| (s.name.clone(), s.value.clone()))
            .collect();
        Self {
            name: name.into(),
            settings,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(alias = "Triggers", default, deserialize_with = "null_as_default")]
    pub triggers: Vec<TriggerConfig>,
    /// Everything else the engine reads (log level, actions, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        crate::io::read_json(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        crate::io::write_json(path, self)
    }

    pub fn trigger(&self, name: &str) -> Option<&TriggerConfig> {
        self.triggers.iter().find(|t| t.name == name)
    }

    pub fn contains_trigger(&self, name: &str) -> bool {
        self.trigger(name).is_some()
    }

    /// Append a runtime entry for `name` built from the declared settings.
    /// Returns `false` and leaves the config untouched if an entry with that
    /// name already exists, so hand-edited settings are never overwritten.
    pub fn add_trigger_if_absent(&mut self, name: &str, declared: &TriggerProjectDescriptor) -> bool {
        if self.contains_trigger(name) {
            return false;
        }
        self.triggers.push(TriggerConfig::from_declared(name, declared));
        true
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Load both configs and compute the merged engine config without writing.
/// Returns `None` when the trigger is already configured.
pub fn plan_trigger_config(
    engine_config_path: &Path,
    item_config_path: &Path,
    item_name: &str,
) -> Result<Option<EngineConfig>> {
    let mut engine = EngineConfig::load(engine_config_path)?;
    let declared = TriggerProjectDescriptor::load(item_config_path)?;

    if engine.add_trigger_if_absent(item_name, &declared) {
        tracing::debug!(
            trigger = item_name,
            settings = declared.settings.len(),
            "adding trigger to engine config"
        );
        Ok(Some(engine))
    } else {
        tracing::info!(
            trigger = item_name,
            "trigger already present in engine config, settings left unchanged"
        );
        Ok(None)
    }
}

/// Merge the settings declared at `item_config_path` into the engine config
/// at `engine_config_path`. Writes only when an entry was added; returns
/// whether it did.
pub fn merge_trigger_config(
    engine_config_path: &Path,
    item_config_path: &Path,
    item_name: &str,
) -> Result<bool> {
    match plan_trigger_config(engine_config_path, item_config_path, item_name)? {
        Some(engine) => {
            engine.save(engine_config_path)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
