use crate::error::{FlogoError, Result};
use crate::types::ItemType;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

pub const PROJECT_FILE: &str = "flogo.json";
pub const BIN_DIR: &str = "bin";
pub const ENGINE_CONFIG_FILE: &str = "config.json";
pub const SRC_DIR: &str = "src";
pub const VENDOR_SRC_DIR: &str = "vendor/src";

/// Locator prefix marking an explicitly local item.
pub const FILE_SCHEME: &str = "file://";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn project_descriptor_path(root: &Path) -> PathBuf {
    root.join(PROJECT_FILE)
}

pub fn bin_file_path(root: &Path, file: &str) -> PathBuf {
    root.join(BIN_DIR).join(file)
}

pub fn engine_config_path(root: &Path) -> PathBuf {
    bin_file_path(root, ENGINE_CONFIG_FILE)
}

pub fn vendor_item_dir(root: &Path, locator: &str) -> PathBuf {
    root.join(VENDOR_SRC_DIR).join(locator)
}

/// Where `--src` places a copied item: `src/<project>/<type list>/<name>`.
pub fn source_item_dir(root: &Path, project: &str, item_type: ItemType, name: &str) -> PathBuf {
    root.join(SRC_DIR)
        .join(project)
        .join(item_type.plural())
        .join(name)
}

// ---------------------------------------------------------------------------
// Directory name validation
// ---------------------------------------------------------------------------

/// Longest project or item name accepted as a directory under `src/`.
pub const MAX_DIR_NAME_LEN: usize = 128;

static DIR_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn dir_name_re() -> &'static Regex {
    DIR_NAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._\-]*$").unwrap())
}

/// A single, non-traversing path component.
fn is_safe_dir_name(name: &str) -> bool {
    name.len() <= MAX_DIR_NAME_LEN && dir_name_re().is_match(name)
}

/// Item names become `src/<project>/<list>/<name>` when copied to source.
pub fn validate_item_name(name: &str) -> Result<()> {
    if !is_safe_dir_name(name) {
        return Err(FlogoError::InvalidItemName(name.to_string()));
    }
    Ok(())
}

pub fn validate_project_name(name: &str) -> Result<()> {
    if !is_safe_dir_name(name) {
        return Err(FlogoError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}
