use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Activity,
    Model,
    Trigger,
}

impl ItemType {
    pub fn all() -> &'static [ItemType] {
        &[ItemType::Activity, ItemType::Model, ItemType::Trigger]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Activity => "activity",
            ItemType::Model => "model",
            ItemType::Trigger => "trigger",
        }
    }

    /// Name of the list holding this item type, also used as the directory
    /// name under the project source tree.
    pub fn plural(self) -> &'static str {
        match self {
            ItemType::Activity => "activities",
            ItemType::Model => "models",
            ItemType::Trigger => "triggers",
        }
    }

    /// The descriptor file every item package of this type carries.
    pub fn descriptor_file(self) -> &'static str {
        match self {
            ItemType::Activity => "activity.json",
            ItemType::Model => "model.json",
            ItemType::Trigger => "trigger.json",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = crate::error::FlogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "activity" => Ok(ItemType::Activity),
            "model" => Ok(ItemType::Model),
            "trigger" => Ok(ItemType::Trigger),
            _ => Err(crate::error::FlogoError::UnknownItemType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Descriptors written by older tooling carry `null` for empty lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any JSON scalar and keep its textual form; `null` becomes "".
pub(crate) fn scalar_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a scalar setting value, got {other}"
        ))),
    }
}
