use crate::engine::{self, EngineConfig};
use crate::error::Result;
use crate::paths;
use crate::project::{ItemDescriptor, ProjectDescriptor};
use crate::resolver;
use crate::types::ItemType;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a successful install changed.
#[derive(Debug, Clone, Serialize)]
pub struct InstallOutcome {
    pub item_type: ItemType,
    pub item: ItemDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copied_to: Option<PathBuf>,
    pub engine_config_updated: bool,
}

/// Add the item at `item_path` to `descriptor` and persist the result.
///
/// Every check and parse runs before anything is written. On error neither
/// `descriptor` nor any file under `root` has been modified. On success the
/// writes happen in order: staged source copy, engine config (triggers only,
/// and only when a new entry was added), project descriptor.
pub fn install_item(
    root: &Path,
    descriptor: &mut ProjectDescriptor,
    item_type: ItemType,
    item_path: &str,
    copy_to_source: bool,
) -> Result<InstallOutcome> {
    let resolution = resolver::resolve(
        root,
        &descriptor.name,
        item_type,
        item_path,
        descriptor.items(item_type),
        copy_to_source,
    )?;

    let mut updated = descriptor.clone();
    updated.push(item_type, resolution.item.clone());

    let engine_update: Option<(PathBuf, EngineConfig)> = match item_type {
        ItemType::Activity | ItemType::Model => None,
        ItemType::Trigger => {
            let engine_path = paths::engine_config_path(root);
            engine::plan_trigger_config(&engine_path, &resolution.config_path, &resolution.item.name)?
                .map(|cfg| (engine_path, cfg))
        }
    };

    let copied_to = resolution.commit()?;
    let engine_config_updated = match &engine_update {
        Some((path, cfg)) => {
            cfg.save(path)?;
            true
        }
        None => false,
    };
    updated.save(root)?;
    *descriptor = updated;

    tracing::info!(
        item_type = %item_type,
        name = %resolution.item.name,
        engine_config_updated,
        "item installed"
    );

    Ok(InstallOutcome {
        item_type,
        item: resolution.item,
        copied_to,
        engine_config_updated,
    })
}

/// Load the project at `root` and install one item into it.
pub fn add(
    root: &Path,
    item_type: ItemType,
    item_path: &str,
    copy_to_source: bool,
) -> Result<InstallOutcome> {
    let mut descriptor = ProjectDescriptor::load(root)?;
    install_item(root, &mut descriptor, item_type, item_path, copy_to_source)
}
