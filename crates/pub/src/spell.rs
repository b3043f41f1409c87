//! Spell records (ESF)

use crate::container::{decode_enum, PubRecord};
use eodata_core::{RecordId, Result};
use eodata_protocol::ByteCursor;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpellType {
    Heal = 0,
    Damage = 1,
    Bard = 2,
}

impl SpellType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Heal),
            1 => Some(Self::Damage),
            2 => Some(Self::Bard),
            _ => None,
        }
    }
}

/// Who a spell may be cast on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpellTargetRestrict {
    NPC = 0,
    Friendly = 1,
    Opponent = 2,
}

impl SpellTargetRestrict {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::NPC),
            1 => Some(Self::Friendly),
            2 => Some(Self::Opponent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpellTargetType {
    Normal = 0,
    #[serde(rename = "Self")]
    SelfTarget = 1,
    Unknown = 2,
    Group = 3,
}

impl SpellTargetType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Normal),
            1 => Some(Self::SelfTarget),
            2 => Some(Self::Unknown),
            3 => Some(Self::Group),
            _ => None,
        }
    }
}

/// One entry of a spells file
///
/// # Record Layout
/// ```text
/// {CHAR name len}{CHAR shout len}{name}{shout}
/// {SHORT icon}{SHORT graphic}{SHORT tp}{SHORT sp}{CHAR cast time}{2 unused}
/// {THREE type}{CHAR element}{SHORT element power}{CHAR target restrict}{CHAR target type}
/// {4 unused}{SHORT min dmg}{SHORT max dmg}{SHORT accuracy}{5 unused}{SHORT heal}{15 unused}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spell {
    pub id: RecordId,
    pub name: String,
    /// Text spoken by the caster
    pub shout: String,
    pub icon: u32,
    pub graphic: u32,
    pub mana: u32,
    pub stamina: u32,
    pub cast_time: u32,
    #[serde(rename = "type")]
    pub spell_type: SpellType,
    pub element: u32,
    pub element_power: u32,
    pub target_restrict: SpellTargetRestrict,
    pub target_type: SpellTargetType,
    pub min_damage: u32,
    pub max_damage: u32,
    pub accuracy: u32,
    pub heal: u32,
}

impl PubRecord for Spell {
    const FILE_TAG: &'static str = "ESF";

    fn read_record(id: RecordId, cursor: &mut ByteCursor) -> Result<Self> {
        let name_len = cursor.read_char()? as usize;
        let shout_len = cursor.read_char()? as usize;
        let name = cursor.read_fixed_string(name_len)?;
        let shout = cursor.read_fixed_string(shout_len)?;

        let icon = cursor.read_short()?;
        let graphic = cursor.read_short()?;
        let mana = cursor.read_short()?;
        let stamina = cursor.read_short()?;
        let cast_time = cursor.read_char()?;
        cursor.skip(2)?;

        let spell_type = decode_enum("spell type", cursor.read_three()?, SpellType::from_u32)?;
        let element = cursor.read_char()?;
        let element_power = cursor.read_short()?;
        let target_restrict = decode_enum(
            "spell target restrict",
            cursor.read_char()?,
            SpellTargetRestrict::from_u32,
        )?;
        let target_type = decode_enum(
            "spell target type",
            cursor.read_char()?,
            SpellTargetType::from_u32,
        )?;
        cursor.skip(4)?;

        let min_damage = cursor.read_short()?;
        let max_damage = cursor.read_short()?;
        let accuracy = cursor.read_short()?;
        cursor.skip(5)?;
        let heal = cursor.read_short()?;
        cursor.skip(15)?;

        Ok(Self {
            id,
            name,
            shout,
            icon,
            graphic,
            mana,
            stamina,
            cast_time,
            spell_type,
            element,
            element_power,
            target_restrict,
            target_type,
            min_damage,
            max_damage,
            accuracy,
            heal,
        })
    }
}
