//! Character text fields
//!
//! Character rows keep equipment and item lists as comma-terminated text:
//! - paperdoll: `boots,accessory,...,bracer_2,` (15 item ids)
//! - inventory, bank and spells: `id,amount,id,amount,`

use crate::error::{ConfigError, Result};
use crate::tables::{parse_token, tokens};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of equipment slots
pub const PAPERDOLL_SLOTS: usize = 15;

/// Item id worn in each equipment slot (0 = empty)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paperdoll {
    pub boots: u32,
    pub accessory: u32,
    pub gloves: u32,
    pub belt: u32,
    pub armor: u32,
    pub necklace: u32,
    pub hat: u32,
    pub shield: u32,
    pub weapon: u32,
    pub ring_1: u32,
    pub ring_2: u32,
    pub armlet_1: u32,
    pub armlet_2: u32,
    pub bracer_1: u32,
    pub bracer_2: u32,
}

/// Drop the trailing terminator character
fn strip_terminator(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next_back();
    chars.as_str()
}

/// Decode a paperdoll field
pub fn parse_paperdoll(text: &str) -> Result<Paperdoll> {
    let slots = tokens(strip_terminator(text));
    if slots.len() < PAPERDOLL_SLOTS {
        return Err(ConfigError::MalformedToken {
            key: "paperdoll".into(),
            message: format!("expected {} slots, got {}", PAPERDOLL_SLOTS, slots.len()),
        });
    }

    let slot = |i: usize| parse_token::<u32>("paperdoll", slots[i]);
    Ok(Paperdoll {
        boots: slot(0)?,
        accessory: slot(1)?,
        gloves: slot(2)?,
        belt: slot(3)?,
        armor: slot(4)?,
        necklace: slot(5)?,
        hat: slot(6)?,
        shield: slot(7)?,
        weapon: slot(8)?,
        ring_1: slot(9)?,
        ring_2: slot(10)?,
        armlet_1: slot(11)?,
        armlet_2: slot(12)?,
        bracer_1: slot(13)?,
        bracer_2: slot(14)?,
    })
}

/// Decode an `id,amount,` list (inventory, bank, spells)
///
/// An empty field is an empty map. A repeated id keeps its last amount.
pub fn parse_item_pairs(field: &str, text: &str) -> Result<BTreeMap<u32, u32>> {
    if text.is_empty() {
        return Ok(BTreeMap::new());
    }

    tokens(strip_terminator(text))
        .chunks_exact(2)
        .map(|pair| -> Result<(u32, u32)> {
            Ok((parse_token(field, pair[0])?, parse_token(field, pair[1])?))
        })
        .collect()
}
