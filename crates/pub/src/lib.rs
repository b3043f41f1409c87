//! # EOData Pub Files
//!
//! This crate decodes Endless Online pub files: the binary tables of items,
//! NPCs, spells and classes shipped with a game server.
//!
//! ## Pub Format
//!
//! Every pub file shares one container layout:
//! - **Tag**: 3 ASCII bytes naming the record type (`EIF`, `ENF`, `ESF`, `ECF`)
//! - **Revision**: 4-byte number (not surfaced)
//! - **Total**: 2-byte number, one more than the record count
//! - **Reserved**: 1 byte
//! - **Records**: fixed-layout entries, back to back
//!
//! Records carry no id on disk; each is numbered by position starting at 1.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eodata_pub::{read_eif, ItemType};
//!
//! let items = read_eif("data/pub/dat001.eif")?;
//! for item in items.iter().filter(|i| i.item_type == ItemType::Weapon) {
//!     println!("{} {}", item.id, item.name);
//! }
//! # Ok::<(), eodata_core::DataError>(())
//! ```

pub mod container;
pub mod item;
pub mod npc;
pub mod spell;
pub mod class;

#[cfg(test)]
mod fixture;

pub use container::{
    read_ecf, read_eif, read_enf, read_esf, read_pub, read_pub_bytes, PubData, PubKind,
    PubRecord,
};
pub use item::{Item, ItemSize, ItemSpecial, ItemSubtype, ItemType};
pub use npc::{Npc, NpcType};
pub use spell::{Spell, SpellTargetRestrict, SpellTargetType, SpellType};
pub use class::Class;
pub use eodata_core::{DataError, RecordId, Result};
