//! EOData - Endless Online server data reader
//!
//! Decodes every data file named in `eodata.txt` and logs a summary.
//! Pass a dataset name (items, npcs, spells, classes, drops, shops, skills)
//! to print that dataset as JSON on stdout.

use anyhow::{bail, Context, Result};
use eodata_config::{read_drops, read_shops, read_skills, DataPaths};
use eodata_pub::{PubData, PubKind};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DATASETS: [&str; 7] = ["items", "npcs", "spells", "classes", "drops", "shops", "skills"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("EOData starting up...");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let paths = match DataPaths::load_default() {
        Ok(paths) => {
            info!("✓ Configuration loaded");
            paths
        }
        Err(e) => {
            warn!("Failed to load eodata.txt: {}", e);
            warn!("   Using default data paths");
            DataPaths::default()
        }
    };
    paths.display();

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match std::env::args().nth(1) {
        Some(dataset) => print_dataset(&paths, &dataset),
        None => {
            summarize(&paths);
            Ok(())
        }
    }
}

fn pub_source(paths: &DataPaths, kind: PubKind) -> &Path {
    match kind {
        PubKind::Item => &paths.eif,
        PubKind::Npc => &paths.enf,
        PubKind::Spell => &paths.esf,
        PubKind::Class => &paths.ecf,
    }
}

/// Decode every source and log how many entries each holds
fn summarize(paths: &DataPaths) {
    for kind in PubKind::ALL {
        let path = pub_source(paths, kind);
        match PubData::load(kind, path) {
            Ok(data) => info!("✓ {} {:?} records from {}", data.len(), kind, path.display()),
            Err(e) => warn!("{} unreadable: {}", kind.tag(), e),
        }
    }

    match read_drops(&paths.drops) {
        Ok(drops) => info!("✓ drops for {} NPCs", drops.len()),
        Err(e) => warn!("drops unreadable: {}", e),
    }
    match read_shops(&paths.shops) {
        Ok(shops) => info!("✓ {} shops", shops.len()),
        Err(e) => warn!("shops unreadable: {}", e),
    }
    match read_skills(&paths.skills) {
        Ok(skills) => info!("✓ {} skill masters", skills.len()),
        Err(e) => warn!("skills unreadable: {}", e),
    }
}

fn print_dataset(paths: &DataPaths, dataset: &str) -> Result<()> {
    let kind = match dataset {
        "items" => Some(PubKind::Item),
        "npcs" => Some(PubKind::Npc),
        "spells" => Some(PubKind::Spell),
        "classes" => Some(PubKind::Class),
        _ => None,
    };

    let json = match (kind, dataset) {
        (Some(kind), _) => {
            let path = pub_source(paths, kind);
            let data = PubData::load(kind, path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::to_string_pretty(&data)?
        }
        (None, "drops") => serde_json::to_string_pretty(
            &read_drops(&paths.drops).with_context(|| format!("reading {}", paths.drops.display()))?,
        )?,
        (None, "shops") => serde_json::to_string_pretty(
            &read_shops(&paths.shops).with_context(|| format!("reading {}", paths.shops.display()))?,
        )?,
        (None, "skills") => serde_json::to_string_pretty(
            &read_skills(&paths.skills)
                .with_context(|| format!("reading {}", paths.skills.display()))?,
        )?,
        _ => bail!("unknown dataset {:?}, expected one of {}", dataset, DATASETS.join(", ")),
    };

    println!("{}", json);
    Ok(())
}
