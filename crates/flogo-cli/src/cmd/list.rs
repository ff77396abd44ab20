use crate::output::{print_json, print_table};
use anyhow::Context;
use flogo_core::{project::ProjectDescriptor, types::ItemType};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "type")]
    item_type: ItemType,
    name: &'a str,
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    local: bool,
}

pub fn run(root: &Path, item_type: Option<&str>, json: bool) -> anyhow::Result<()> {
    let types: Vec<ItemType> = match item_type {
        Some(t) => vec![t.parse()?],
        None => ItemType::all().to_vec(),
    };

    let descriptor = ProjectDescriptor::load(root).context("failed to load project descriptor")?;

    let rows: Vec<Row> = types
        .iter()
        .flat_map(|&t| {
            descriptor.items(t).iter().map(move |i| Row {
                item_type: t,
                name: &i.name,
                path: &i.path,
                version: i.version.as_deref(),
                local: i.local,
            })
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No items installed in '{}'.", descriptor.name);
        return Ok(());
    }

    print_table(
        &["TYPE", "NAME", "VERSION", "PATH"],
        rows.iter()
            .map(|r| {
                vec![
                    r.item_type.to_string(),
                    r.name.to_string(),
                    r.version.unwrap_or("-").to_string(),
                    if r.local {
                        format!("{} (src)", r.path)
                    } else {
                        r.path.to_string()
                    },
                ]
            })
            .collect(),
    );
    Ok(())
}
