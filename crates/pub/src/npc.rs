//! NPC records (ENF)

use crate::container::{decode_enum, PubRecord};
use eodata_core::{RecordId, Result};
use eodata_protocol::ByteCursor;
use serde::Serialize;

/// NPC behaviour
///
/// The `Unknown*` variants hold ordinals the format reserves without
/// documenting; anything past 20 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NpcType {
    NPC = 0,
    Passive = 1,
    Aggressive = 2,
    Pet = 3,
    Unknown1 = 4,
    Unknown2 = 5,
    Shop = 6,
    Inn = 7,
    Unknown3 = 8,
    Bank = 9,
    Barber = 10,
    Guild = 11,
    Priest = 12,
    Law = 13,
    Skills = 14,
    Quest = 15,
    Unknown4 = 16,
    Unknown5 = 17,
    Unknown6 = 18,
    Unknown7 = 19,
    Unknown8 = 20,
}

impl NpcType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::NPC),
            1 => Some(Self::Passive),
            2 => Some(Self::Aggressive),
            3 => Some(Self::Pet),
            4 => Some(Self::Unknown1),
            5 => Some(Self::Unknown2),
            6 => Some(Self::Shop),
            7 => Some(Self::Inn),
            8 => Some(Self::Unknown3),
            9 => Some(Self::Bank),
            10 => Some(Self::Barber),
            11 => Some(Self::Guild),
            12 => Some(Self::Priest),
            13 => Some(Self::Law),
            14 => Some(Self::Skills),
            15 => Some(Self::Quest),
            16 => Some(Self::Unknown4),
            17 => Some(Self::Unknown5),
            18 => Some(Self::Unknown6),
            19 => Some(Self::Unknown7),
            20 => Some(Self::Unknown8),
            _ => None,
        }
    }

    /// Whether players can fight this NPC
    pub fn is_attackable(&self) -> bool {
        matches!(self, Self::Passive | Self::Aggressive)
    }
}

/// One entry of an NPCs file
///
/// # Record Layout
/// ```text
/// {CHAR len}{name}{SHORT graphic}{1 unused}{SHORT boss}{SHORT child}{SHORT type}
/// {SHORT vendor}{THREE hp}{2 unused}{SHORT min dmg}{SHORT max dmg}
/// {SHORT accuracy}{SHORT evade}{SHORT armor}{5 unused}
/// {SHORT element weak}{SHORT element weak power}{1 unused}{THREE exp}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Npc {
    pub id: RecordId,
    pub name: String,
    pub graphic: u32,
    pub boss: bool,
    pub child: bool,
    #[serde(rename = "type")]
    pub npc_type: NpcType,
    /// Shop/skill master/inn number used by the text tables
    pub vendor: u32,
    pub health: u32,
    pub min_damage: u32,
    pub max_damage: u32,
    pub accuracy: u32,
    pub evade: u32,
    pub armor: u32,
    pub element_weak: u32,
    pub element_weak_power: u32,
    pub experience: u32,
}

impl PubRecord for Npc {
    const FILE_TAG: &'static str = "ENF";

    fn read_record(id: RecordId, cursor: &mut ByteCursor) -> Result<Self> {
        let name = cursor.read_prefixed_string()?;
        let graphic = cursor.read_short()?;
        cursor.skip(1)?;
        let boss = cursor.read_short()? > 0;
        let child = cursor.read_short()? > 0;
        let npc_type = decode_enum("npc type", cursor.read_short()?, NpcType::from_u32)?;
        let vendor = cursor.read_short()?;
        let health = cursor.read_three()?;
        cursor.skip(2)?;

        let min_damage = cursor.read_short()?;
        let max_damage = cursor.read_short()?;
        let accuracy = cursor.read_short()?;
        let evade = cursor.read_short()?;
        let armor = cursor.read_short()?;
        cursor.skip(5)?;

        let element_weak = cursor.read_short()?;
        let element_weak_power = cursor.read_short()?;
        cursor.skip(1)?;
        let experience = cursor.read_three()?;

        Ok(Self {
            id,
            name,
            graphic,
            boss,
            child,
            npc_type,
            vendor,
            health,
            min_damage,
            max_damage,
            accuracy,
            evade,
            armor,
            element_weak,
            element_weak_power,
            experience,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::read_pub_bytes;
    use crate::fixture::FixtureWriter;
    use eodata_core::DataError;

    fn write_npc(w: &mut FixtureWriter, name: &str, boss: u32, npc_type: u32) {
        w.name(name).short(21).skip(1).short(boss).short(0).short(npc_type).short(4);
        w.three(120_000).skip(2);
        w.short(8).short(14).short(30).short(12).short(9);
        w.skip(5);
        w.short(2).short(50).skip(1).three(1500);
    }

    #[test]
    fn test_npc_fields() {
        let mut w = FixtureWriter::new();
        w.header("ENF", 2);
        write_npc(&mut w, "Goat", 0, 1);
        write_npc(&mut w, "Apozen", 1, 2);
        let npcs: Vec<Npc> = read_pub_bytes(w.finish()).unwrap();

        assert_eq!(npcs.len(), 2);
        let goat = &npcs[0];
        assert_eq!(goat.id, RecordId::new(1));
        assert_eq!(goat.name, "Goat");
        assert_eq!(goat.graphic, 21);
        assert!(!goat.boss);
        assert!(!goat.child);
        assert_eq!(goat.npc_type, NpcType::Passive);
        assert_eq!(goat.vendor, 4);
        assert_eq!(goat.health, 120_000);
        assert_eq!((goat.min_damage, goat.max_damage), (8, 14));
        assert_eq!((goat.accuracy, goat.evade, goat.armor), (30, 12, 9));
        assert_eq!((goat.element_weak, goat.element_weak_power), (2, 50));
        assert_eq!(goat.experience, 1500);

        let boss = &npcs[1];
        assert_eq!(boss.id, RecordId::new(2));
        assert!(boss.boss);
        assert!(boss.npc_type.is_attackable());
    }

    #[test]
    fn test_reserved_type_ordinals() {
        assert_eq!(NpcType::from_u32(16), Some(NpcType::Unknown4));
        assert_eq!(NpcType::from_u32(20), Some(NpcType::Unknown8));
        assert_eq!(NpcType::from_u32(21), None);

        let mut w = FixtureWriter::new();
        w.header("ENF", 1);
        write_npc(&mut w, "Ghost", 0, 21);
        let err = read_pub_bytes::<Npc>(w.finish()).unwrap_err();
        assert!(matches!(err, DataError::InvalidEnumValue { field: "npc type", value: 21 }));
    }
}
