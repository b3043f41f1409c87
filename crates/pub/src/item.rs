//! Item records (EIF)

use crate::container::{decode_enum, PubRecord};
use eodata_core::{RecordId, Result};
use eodata_protocol::ByteCursor;
use serde::Serialize;

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemType {
    Static = 0,
    Money = 2,
    Heal = 3,
    Teleport = 4,
    Spell = 5,
    EXPReward = 6,
    StatReward = 7,
    SkillReward = 8,
    Key = 9,
    Weapon = 10,
    Shield = 11,
    Armor = 12,
    Hat = 13,
    Boots = 14,
    Gloves = 15,
    Accessory = 16,
    Belt = 17,
    Necklace = 18,
    Ring = 19,
    Armlet = 20,
    Bracer = 21,
    Beer = 22,
    EffectPotion = 23,
    HairDye = 24,
    CureCurse = 25,
}

impl ItemType {
    /// Ordinal 1 is unused by the format
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Static),
            2 => Some(Self::Money),
            3 => Some(Self::Heal),
            4 => Some(Self::Teleport),
            5 => Some(Self::Spell),
            6 => Some(Self::EXPReward),
            7 => Some(Self::StatReward),
            8 => Some(Self::SkillReward),
            9 => Some(Self::Key),
            10 => Some(Self::Weapon),
            11 => Some(Self::Shield),
            12 => Some(Self::Armor),
            13 => Some(Self::Hat),
            14 => Some(Self::Boots),
            15 => Some(Self::Gloves),
            16 => Some(Self::Accessory),
            17 => Some(Self::Belt),
            18 => Some(Self::Necklace),
            19 => Some(Self::Ring),
            20 => Some(Self::Armlet),
            21 => Some(Self::Bracer),
            22 => Some(Self::Beer),
            23 => Some(Self::EffectPotion),
            24 => Some(Self::HairDye),
            25 => Some(Self::CureCurse),
            _ => None,
        }
    }

    /// Whether the item is worn in a paperdoll slot
    pub fn is_equipment(&self) -> bool {
        (Self::Weapon as u32..=Self::Bracer as u32).contains(&(*self as u32))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemSubtype {
    Normal = 0,
    Range = 1,
    Arrows = 2,
    Wings = 3,
    TwoHanded = 4,
}

impl ItemSubtype {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Normal),
            1 => Some(Self::Range),
            2 => Some(Self::Arrows),
            3 => Some(Self::Wings),
            4 => Some(Self::TwoHanded),
            _ => None,
        }
    }
}

/// Item rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemSpecial {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Rarest = 3,
    Lore = 4,
    Cursed = 5,
    Unknown1 = 6,
    Unknown2 = 7,
}

impl ItemSpecial {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Common),
            1 => Some(Self::Uncommon),
            2 => Some(Self::Rare),
            3 => Some(Self::Rarest),
            4 => Some(Self::Lore),
            5 => Some(Self::Cursed),
            6 => Some(Self::Unknown1),
            7 => Some(Self::Unknown2),
            _ => None,
        }
    }
}

/// Inventory footprint (columns x rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemSize {
    Size1x1 = 0,
    Size1x2 = 1,
    Size1x3 = 2,
    Size1x4 = 3,
    Size2x1 = 4,
    Size2x2 = 5,
    Size2x3 = 6,
    Size2x4 = 7,
}

impl ItemSize {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Size1x1),
            1 => Some(Self::Size1x2),
            2 => Some(Self::Size1x3),
            3 => Some(Self::Size1x4),
            4 => Some(Self::Size2x1),
            5 => Some(Self::Size2x2),
            6 => Some(Self::Size2x3),
            7 => Some(Self::Size2x4),
            _ => None,
        }
    }

    /// Width and height in inventory cells
    pub fn dimensions(&self) -> (u8, u8) {
        let ordinal = *self as u8;
        (ordinal / 4 + 1, ordinal % 4 + 1)
    }
}

/// One entry of an items file
///
/// # Record Layout
/// ```text
/// {CHAR len}{name}{SHORT graphic}{CHAR type}{CHAR subtype}{CHAR special}
/// {SHORT hp}{SHORT tp}{SHORT min dmg}{SHORT max dmg}{SHORT accuracy}{SHORT evade}{SHORT armor}
/// {1 unused}{CHAR str}{CHAR int}{CHAR wis}{CHAR agi}{CHAR con}{CHAR cha}{6 unused}
/// {THREE spec1}{CHAR spec2}{CHAR spec3}
/// {SHORT level req}{SHORT class req}{SHORT str..cha req x6}
/// {CHAR element}{CHAR element power}{CHAR weight}{1 unused}{CHAR size}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    pub graphic: u32,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub subtype: ItemSubtype,
    pub special: ItemSpecial,
    pub health: u32,
    pub mana: u32,
    pub min_damage: u32,
    pub max_damage: u32,
    pub accuracy: u32,
    pub evade: u32,
    pub armor: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub agility: u32,
    pub constitution: u32,
    pub charisma: u32,
    /// Type-dependent: spell id, heal amount, teleport map, dye color...
    pub spec1: u32,
    pub spec2: u32,
    pub spec3: u32,
    pub level_requirement: u32,
    pub class_requirement: u32,
    pub strength_requirement: u32,
    pub intelligence_requirement: u32,
    pub wisdom_requirement: u32,
    pub agility_requirement: u32,
    pub constitution_requirement: u32,
    pub charisma_requirement: u32,
    pub element: u32,
    pub element_power: u32,
    pub weight: u32,
    pub size: ItemSize,
}

impl PubRecord for Item {
    const FILE_TAG: &'static str = "EIF";

    fn read_record(id: RecordId, cursor: &mut ByteCursor) -> Result<Self> {
        let name = cursor.read_prefixed_string()?;
        let graphic = cursor.read_short()?;
        let item_type = decode_enum("item type", cursor.read_char()?, ItemType::from_u32)?;
        let subtype = decode_enum("item subtype", cursor.read_char()?, ItemSubtype::from_u32)?;
        let special = decode_enum("item special", cursor.read_char()?, ItemSpecial::from_u32)?;

        let health = cursor.read_short()?;
        let mana = cursor.read_short()?;
        let min_damage = cursor.read_short()?;
        let max_damage = cursor.read_short()?;
        let accuracy = cursor.read_short()?;
        let evade = cursor.read_short()?;
        let armor = cursor.read_short()?;
        cursor.skip(1)?;

        let strength = cursor.read_char()?;
        let intelligence = cursor.read_char()?;
        let wisdom = cursor.read_char()?;
        let agility = cursor.read_char()?;
        let constitution = cursor.read_char()?;
        let charisma = cursor.read_char()?;
        cursor.skip(6)?;

        let spec1 = cursor.read_three()?;
        let spec2 = cursor.read_char()?;
        let spec3 = cursor.read_char()?;

        let level_requirement = cursor.read_short()?;
        let class_requirement = cursor.read_short()?;
        let strength_requirement = cursor.read_short()?;
        let intelligence_requirement = cursor.read_short()?;
        let wisdom_requirement = cursor.read_short()?;
        let agility_requirement = cursor.read_short()?;
        let constitution_requirement = cursor.read_short()?;
        let charisma_requirement = cursor.read_short()?;

        let element = cursor.read_char()?;
        let element_power = cursor.read_char()?;
        let weight = cursor.read_char()?;
        cursor.skip(1)?;
        let size = decode_enum("item size", cursor.read_char()?, ItemSize::from_u32)?;

        Ok(Self {
            id,
            name,
            graphic,
            item_type,
            subtype,
            special,
            health,
            mana,
            min_damage,
            max_damage,
            accuracy,
            evade,
            armor,
            strength,
            intelligence,
            wisdom,
            agility,
            constitution,
            charisma,
            spec1,
            spec2,
            spec3,
            level_requirement,
            class_requirement,
            strength_requirement,
            intelligence_requirement,
            wisdom_requirement,
            agility_requirement,
            constitution_requirement,
            charisma_requirement,
            element,
            element_power,
            weight,
            size,
        })
    }
}
