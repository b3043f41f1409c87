//! EOData Text Tables
//!
//! Parsers for the plain-text data files an Endless Online server keeps
//! beside its pub files:
//! - **drops.ini**: items each NPC can drop ([`drops`])
//! - **shops.ini**: vendor names, trades and crafts ([`shops`])
//! - **skills.ini**: spells taught by skill masters ([`skills`])
//!
//! All three are `key=value` files read through [`DelimitedConfig`]. Values
//! are comma-separated tokens consumed in fixed-width groups.
//!
//! Also here: character text fields ([`character`]) and the locations of
//! every data file ([`DataPaths`]).
//!
//! ```rust,no_run
//! use eodata_config::{read_shops, ShopSection};
//! use eodata_core::EntityId;
//!
//! let shops = read_shops("data/shops.ini")?;
//! if let Some(ShopSection::Name(name)) = shops.get(&EntityId::new(1)).and_then(|s| s.get("name")) {
//!     println!("vendor 1 is {}", name);
//! }
//! # Ok::<(), eodata_config::ConfigError>(())
//! ```

pub mod character;
pub mod drops;
pub mod error;
pub mod ini;
pub mod paths;
pub mod shops;
pub mod skills;
pub mod tables;

pub use character::{parse_item_pairs, parse_paperdoll, Paperdoll};
pub use drops::{parse_drops, read_drops, DropEntry, DropTable};
pub use error::{ConfigError, Result};
pub use ini::DelimitedConfig;
pub use paths::DataPaths;
pub use shops::{parse_shops, read_shops, Craft, Ingredient, ShopSection, ShopTable, Trade};
pub use skills::{parse_skills, read_skills, Skill, SkillSection, SkillTable};
pub use tables::{GroupParser, GroupedTable, VERSION_KEY};
