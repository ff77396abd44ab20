use crate::error::{FlogoError, Result};
use crate::paths;
use crate::project::ItemDescriptor;
use crate::types::ItemType;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// Where an item package comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    /// A path on the local filesystem.
    Local(PathBuf),
    /// A remote import path, expected to be vendored under `vendor/src`.
    Remote(String),
}

impl ItemSource {
    pub fn parse(locator: &str) -> Self {
        if let Some(rest) = locator.strip_prefix(paths::FILE_SCHEME) {
            return ItemSource::Local(PathBuf::from(rest));
        }
        let local = Path::new(locator);
        if local.exists() {
            ItemSource::Local(local.to_path_buf())
        } else {
            ItemSource::Remote(locator.trim_end_matches('/').to_string())
        }
    }

    fn dir(&self, root: &Path) -> PathBuf {
        match self {
            ItemSource::Local(path) => path.clone(),
            ItemSource::Remote(locator) => paths::vendor_item_dir(root, locator),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Fields read from an item's own descriptor file. Anything beyond these is
/// opaque here.
#[derive(Debug, Deserialize)]
struct ItemMetadata {
    #[serde(alias = "Name", default)]
    name: String,
    #[serde(alias = "Version", default)]
    version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCopy {
    from: PathBuf,
    to: PathBuf,
}

/// A validated item, ready to be recorded in the project descriptor.
///
/// A requested copy into the source tree is staged, not performed; call
/// [`Resolution::commit`] once every other step of the install succeeded.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub item: ItemDescriptor,
    /// The item's own descriptor file (`trigger.json` etc.).
    pub config_path: PathBuf,
    pending_copy: Option<PendingCopy>,
}

impl Resolution {
    /// Destination of the staged copy, if any.
    pub fn copy_destination(&self) -> Option<&Path> {
        self.pending_copy.as_ref().map(|c| c.to.as_path())
    }

    /// Perform the staged copy. Returns the destination when one happened.
    pub fn commit(&self) -> Result<Option<PathBuf>> {
        let Some(copy) = &self.pending_copy else {
            return Ok(None);
        };
        tracing::debug!(from = %copy.from.display(), to = %copy.to.display(), "copying item to source");
        crate::io::copy_dir(&copy.from, &copy.to)?;
        Ok(Some(copy.to.clone()))
    }
}

/// Validate the item at `item_path` and describe it.
///
/// Fails with `NotFound` when the locator does not lead to an item package
/// of `item_type`, and with `DuplicateName` when `existing` already holds an
/// item of the same name. Nothing is written.
pub fn resolve(
    root: &Path,
    project_name: &str,
    item_type: ItemType,
    item_path: &str,
    existing: &[ItemDescriptor],
    copy_to_source: bool,
) -> Result<Resolution> {
    let source = ItemSource::parse(item_path);
    let dir = source.dir(root);
    if !dir.exists() {
        return Err(FlogoError::NotFound(dir));
    }
    if !dir.is_dir() {
        return Err(FlogoError::NotAnItemDirectory(dir));
    }

    let config_path = dir.join(item_type.descriptor_file());
    let meta: ItemMetadata = crate::io::read_json(&config_path)?;
    if meta.name.trim().is_empty() {
        return Err(FlogoError::corrupt(&config_path, "item has no name"));
    }

    if existing.iter().any(|i| i.name == meta.name) {
        return Err(FlogoError::DuplicateName {
            item_type,
            name: meta.name,
        });
    }

    let (path, local, pending_copy) = match &source {
        ItemSource::Local(from) => {
            let from = crate::io::canonical_lenient(from)?;
            let root = crate::io::canonical_lenient(root)?;
            let pending_copy = if copy_to_source {
                stage_copy(&root, project_name, item_type, &meta.name, &from)?
            } else {
                None
            };
            let local = copy_to_source;
            let path = match from.strip_prefix(&root) {
                Ok(rel) => rel.to_string_lossy().into_owned(),
                Err(_) => from.to_string_lossy().into_owned(),
            };
            (path, local, pending_copy)
        }
        ItemSource::Remote(locator) => {
            if copy_to_source {
                tracing::warn!(locator = %locator, "--src only applies to local items, ignoring");
            }
            (locator.clone(), false, None)
        }
    };

    let item = ItemDescriptor {
        name: meta.name,
        path,
        version: meta.version.filter(|v| !v.is_empty()),
        local,
    };

    Ok(Resolution {
        item,
        config_path,
        pending_copy,
    })
}

/// Plan the copy of `from` (canonical) into the project source tree.
///
/// Returns `None` when the item already lives at its destination.
fn stage_copy(
    root: &Path,
    project_name: &str,
    item_type: ItemType,
    name: &str,
    from: &Path,
) -> Result<Option<PendingCopy>> {
    paths::validate_project_name(project_name)?;
    paths::validate_item_name(name)?;

    let to = crate::io::canonical_lenient(&paths::source_item_dir(
        root,
        project_name,
        item_type,
        name,
    ))?;
    if to == from {
        tracing::debug!(dir = %to.display(), "item already in source tree, nothing to copy");
        return Ok(None);
    }
    if to.starts_with(from) {
        return Err(FlogoError::CopyIntoSelf {
            from: from.to_path_buf(),
            to,
        });
    }
    Ok(Some(PendingCopy {
        from: from.to_path_buf(),
        to,
    }))
}
