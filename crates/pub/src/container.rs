//! Pub file container
//!
//! Validates the header shared by all pub files and decodes the records
//! that follow it.

use crate::{Class, Item, Npc, Spell};
use bytes::Bytes;
use eodata_core::{DataError, RecordId, Result};
use eodata_protocol::ByteCursor;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, trace};

/// Length of the type tag opening every pub file
pub const TAG_LEN: usize = 3;

/// A fixed-layout record stored in a pub file
///
/// Implementors consume exactly their on-disk layout from the cursor.
pub trait PubRecord: Sized {
    /// Tag expected at the start of files holding this record type
    const FILE_TAG: &'static str;

    /// Decode one record, assigning it `id`
    fn read_record(id: RecordId, cursor: &mut ByteCursor) -> Result<Self>;
}

/// Read a pub file from disk
///
/// The whole file is read up front and the handle released before decoding.
pub fn read_pub<R: PubRecord, P: AsRef<Path>>(path: P) -> Result<Vec<R>> {
    let path = path.as_ref();
    let mut cursor = ByteCursor::from_file(path)?;
    let records = decode_records::<R>(&mut cursor)?;
    debug!(
        "Loaded {} {} records from {:?}",
        records.len(),
        R::FILE_TAG,
        path
    );
    Ok(records)
}

/// Read a pub file from an in-memory buffer
pub fn read_pub_bytes<R: PubRecord>(data: impl Into<Bytes>) -> Result<Vec<R>> {
    let mut cursor = ByteCursor::new(data);
    decode_records::<R>(&mut cursor)
}

fn decode_records<R: PubRecord>(cursor: &mut ByteCursor) -> Result<Vec<R>> {
    let tag = cursor.read_bytes(TAG_LEN)?;
    if tag.as_ref() != R::FILE_TAG.as_bytes() {
        return Err(DataError::FormatMismatch {
            found: String::from_utf8_lossy(&tag).into_owned(),
            expected: R::FILE_TAG.to_string(),
        });
    }

    let _revision = cursor.read_int()?;
    let total = cursor.read_short()?;
    cursor.skip(1)?;

    // The declared total counts one more entry than is stored
    let count = total.saturating_sub(1);
    let mut records = Vec::with_capacity((count as usize).min(cursor.remaining()));

    for id in 1..=count {
        let record = R::read_record(RecordId::new(id), cursor)?;
        trace!("Decoded {} record {}", R::FILE_TAG, id);
        records.push(record);
    }

    Ok(records)
}

/// Map an on-disk ordinal onto a named enumeration variant
pub(crate) fn decode_enum<T>(
    field: &'static str,
    value: u32,
    convert: fn(u32) -> Option<T>,
) -> Result<T> {
    convert(value).ok_or(DataError::InvalidEnumValue { field, value })
}

/// Read an items (EIF) file
pub fn read_eif<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    read_pub(path)
}

/// Read an NPCs (ENF) file
pub fn read_enf<P: AsRef<Path>>(path: P) -> Result<Vec<Npc>> {
    read_pub(path)
}

/// Read a spells (ESF) file
pub fn read_esf<P: AsRef<Path>>(path: P) -> Result<Vec<Spell>> {
    read_pub(path)
}

/// Read a classes (ECF) file
pub fn read_ecf<P: AsRef<Path>>(path: P) -> Result<Vec<Class>> {
    read_pub(path)
}

/// The four pub file types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PubKind {
    Item,
    Npc,
    Spell,
    Class,
}

impl PubKind {
    pub const ALL: [PubKind; 4] = [PubKind::Item, PubKind::Npc, PubKind::Spell, PubKind::Class];

    /// File tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            PubKind::Item => Item::FILE_TAG,
            PubKind::Npc => Npc::FILE_TAG,
            PubKind::Spell => Spell::FILE_TAG,
            PubKind::Class => Class::FILE_TAG,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Guess the kind from a file extension such as `eif` (case-insensitive)
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_uppercase();
        Self::from_tag(&ext)
    }
}

/// A decoded pub file of any kind
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PubData {
    Items(Vec<Item>),
    Npcs(Vec<Npc>),
    Spells(Vec<Spell>),
    Classes(Vec<Class>),
}

impl PubData {
    /// Read `path` as a pub file of the given kind
    pub fn load<P: AsRef<Path>>(kind: PubKind, path: P) -> Result<Self> {
        Ok(match kind {
            PubKind::Item => PubData::Items(read_pub(path)?),
            PubKind::Npc => PubData::Npcs(read_pub(path)?),
            PubKind::Spell => PubData::Spells(read_pub(path)?),
            PubKind::Class => PubData::Classes(read_pub(path)?),
        })
    }

    pub fn kind(&self) -> PubKind {
        match self {
            PubData::Items(_) => PubKind::Item,
            PubData::Npcs(_) => PubKind::Npc,
            PubData::Spells(_) => PubKind::Spell,
            PubData::Classes(_) => PubKind::Class,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        match self {
            PubData::Items(records) => records.len(),
            PubData::Npcs(records) => records.len(),
            PubData::Spells(records) => records.len(),
            PubData::Classes(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureWriter;

    fn class_fixture(total: u32, names: &[&str]) -> Vec<u8> {
        let mut w = FixtureWriter::new();
        w.text("ECF").int(3).short(total).skip(1);
        for name in names {
            w.name(name).char(0).char(1).short(1).short(2).short(3).short(4).short(5).short(6);
        }
        w.finish()
    }

    #[test]
    fn test_ids_follow_file_order() {
        let data = class_fixture(3, &["Peasant", "Priest"]);
        let classes: Vec<Class> = read_pub_bytes(data).unwrap();

        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].id, RecordId::new(1));
        assert_eq!(classes[0].name, "Peasant");
        assert_eq!(classes[1].id, RecordId::new(2));
        assert_eq!(classes[1].name, "Priest");
    }

    #[test]
    fn test_tag_mismatch() {
        let data = class_fixture(3, &["Peasant", "Priest"]);
        let err = read_pub_bytes::<Item>(data).unwrap_err();

        match err {
            DataError::FormatMismatch { found, expected } => {
                assert_eq!(found, "ECF");
                assert_eq!(expected, "EIF");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_total_below_one_yields_no_records() {
        for total in [0, 1] {
            let data = class_fixture(total, &[]);
            let classes: Vec<Class> = read_pub_bytes(data).unwrap();
            assert!(classes.is_empty());
        }
    }

    #[test]
    fn test_truncated_record_fails_whole_file() {
        let mut data = class_fixture(3, &["Peasant", "Priest"]);
        data.truncate(data.len() - 4);

        let err = read_pub_bytes::<Class>(data).unwrap_err();
        assert!(matches!(err, DataError::TruncatedSource { .. }));
    }

    #[test]
    fn test_truncated_header() {
        let err = read_pub_bytes::<Class>(&b"EC"[..]).unwrap_err();
        assert!(matches!(err, DataError::TruncatedSource { offset: 0, need: 3, have: 2 }));
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(PubKind::from_tag("ESF"), Some(PubKind::Spell));
        assert_eq!(PubKind::from_tag("EXF"), None);
        assert_eq!(
            PubKind::from_extension(Path::new("data/pub/dtn001.enf")),
            Some(PubKind::Npc)
        );
        assert_eq!(PubKind::from_extension(Path::new("data/drops.ini")), None);
    }
}
