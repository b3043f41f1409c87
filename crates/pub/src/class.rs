//! Class records (ECF)

use crate::container::PubRecord;
use eodata_core::{RecordId, Result};
use eodata_protocol::ByteCursor;
use serde::Serialize;

/// One entry of a classes file
///
/// # Record Layout
/// ```text
/// {CHAR len}{name}{CHAR parent}{CHAR stat table}
/// {SHORT str}{SHORT int}{SHORT wis}{SHORT agi}{SHORT con}{SHORT cha}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub id: RecordId,
    pub name: String,
    /// Base class this one derives from
    pub parent: u32,
    pub stat_table: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub agility: u32,
    pub constitution: u32,
    pub charisma: u32,
}

impl PubRecord for Class {
    const FILE_TAG: &'static str = "ECF";

    fn read_record(id: RecordId, cursor: &mut ByteCursor) -> Result<Self> {
        Ok(Self {
            id,
            name: cursor.read_prefixed_string()?,
            parent: cursor.read_char()?,
            stat_table: cursor.read_char()?,
            strength: cursor.read_short()?,
            intelligence: cursor.read_short()?,
            wisdom: cursor.read_short()?,
            agility: cursor.read_short()?,
            constitution: cursor.read_short()?,
            charisma: cursor.read_short()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::read_pub_bytes;
    use crate::fixture::FixtureWriter;

    #[test]
    fn test_class_fields() {
        let mut w = FixtureWriter::new();
        w.header("ECF", 1);
        w.name("Warrior").char(1).char(2);
        w.short(3).short(0).short(0).short(1).short(2).short(300);
        let classes: Vec<Class> = read_pub_bytes(w.finish()).unwrap();

        assert_eq!(
            classes,
            vec![Class {
                id: RecordId::new(1),
                name: "Warrior".into(),
                parent: 1,
                stat_table: 2,
                strength: 3,
                intelligence: 0,
                wisdom: 0,
                agility: 1,
                constitution: 2,
                charisma: 300,
            }]
        );
    }
}
