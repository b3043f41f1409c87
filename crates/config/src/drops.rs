//! NPC drop tables (drops.ini)
//!
//! # Format
//! ```text
//! <npc id>=<item id>,<min>,<max>,<chance>,<item id>,<min>,<max>,<chance>,...
//! ```

use crate::error::Result;
use crate::ini::DelimitedConfig;
use crate::tables::{parse_entity, parse_token, tokens, VERSION_KEY};
use eodata_core::EntityId;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Tokens per drop
pub const DROP_WIDTH: usize = 4;

/// One possible drop of an NPC
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropEntry {
    /// Item id
    pub id: u32,
    pub min_amount: u32,
    pub max_amount: u32,
    /// Probability (percent as written in the file)
    pub chance: f64,
}

/// NPC id -> drops
pub type DropTable = BTreeMap<EntityId, Vec<DropEntry>>;

/// Load drops.ini
pub fn read_drops<P: AsRef<Path>>(path: P) -> Result<DropTable> {
    let path = path.as_ref();
    let table = parse_drops(&DelimitedConfig::load_file(path)?)?;
    debug!("Loaded drops for {} NPCs from {:?}", table.len(), path);
    Ok(table)
}

/// Build the drop table from parsed pairs
///
/// A repeated NPC id replaces the earlier list.
pub fn parse_drops(config: &DelimitedConfig) -> Result<DropTable> {
    let mut table = DropTable::new();

    for (key, value) in config.iter() {
        if key == VERSION_KEY {
            continue;
        }

        let npc = parse_entity(key, key)?;
        let drops = tokens(value)
            .chunks_exact(DROP_WIDTH)
            .map(|group| -> Result<DropEntry> {
                Ok(DropEntry {
                    id: parse_token(key, group[0])?,
                    min_amount: parse_token(key, group[1])?,
                    max_amount: parse_token(key, group[2])?,
                    chance: parse_token(key, group[3])?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        table.insert(npc, drops);
    }

    Ok(table)
}
