use crate::output::print_json;
use anyhow::Context;
use flogo_core::{install, types::ItemType};
use std::path::Path;

pub fn run(root: &Path, item_type: &str, item_path: &str, src: bool, json: bool) -> anyhow::Result<()> {
    let item_type: ItemType = item_type.parse()?;

    let outcome = install::add(root, item_type, item_path, src)
        .with_context(|| format!("cannot add {item_type} '{item_path}'"))?;

    if json {
        print_json(&outcome)?;
    } else {
        println!("Added {item_type} '{}'", outcome.item.name);
        if let Some(dest) = &outcome.copied_to {
            println!("  copied to {}", dest.display());
        }
        if outcome.engine_config_updated {
            println!("  engine config updated with trigger settings");
        } else if item_type == ItemType::Trigger {
            println!("  engine config already has settings for this trigger, left unchanged");
        }
    }

    Ok(())
}
