//! Shop tables (shops.ini)
//!
//! # Format
//! ```text
//! version=1
//! <vendor id>.name=<display name>
//! <vendor id>.trade=<item id>,<buy>,<sell>,...
//! <vendor id>.craft=<item id>,<ing1 id>,<ing1 amount>,...,<ing4 id>,<ing4 amount>,...
//! ```

use crate::error::Result;
use crate::ini::DelimitedConfig;
use crate::tables::{parse_name, parse_token, read_grouped, tokens, GroupParser, GroupedTable};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Tokens per trade entry
pub const TRADE_WIDTH: usize = 3;
/// Tokens per craft entry: item id then 4 ingredient pairs
pub const CRAFT_WIDTH: usize = 9;

/// Item bought from or sold to a shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    pub id: u32,
    pub buy: u32,
    pub sell: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub id: u32,
    pub amount: u32,
}

/// Craftable item with its used ingredient slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Craft {
    pub id: u32,
    pub ingredients: Vec<Ingredient>,
}

/// Parsed value of one `vendor.group` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShopSection {
    Name(String),
    Trade(Vec<Trade>),
    Craft(Vec<Craft>),
}

/// Vendor id -> group name -> section
pub type ShopTable = GroupedTable<ShopSection>;

const SHOP_PARSERS: &[(&str, GroupParser<ShopSection>)] = &[
    ("name", parse_shop_name),
    ("trade", parse_trade),
    ("craft", parse_craft),
];

/// Load shops.ini
pub fn read_shops<P: AsRef<Path>>(path: P) -> Result<ShopTable> {
    let path = path.as_ref();
    let table = parse_shops(&DelimitedConfig::load_file(path)?)?;
    debug!("Loaded {} shops from {:?}", table.len(), path);
    Ok(table)
}

/// Build the shop table from parsed pairs
pub fn parse_shops(config: &DelimitedConfig) -> Result<ShopTable> {
    read_grouped(config, SHOP_PARSERS)
}

fn parse_shop_name(key: &str, value: &str) -> Result<ShopSection> {
    parse_name(key, value).map(ShopSection::Name)
}

fn parse_trade(key: &str, value: &str) -> Result<ShopSection> {
    tokens(value)
        .chunks_exact(TRADE_WIDTH)
        .map(|group| -> Result<Trade> {
            Ok(Trade {
                id: parse_token(key, group[0])?,
                buy: parse_token(key, group[1])?,
                sell: parse_token(key, group[2])?,
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(ShopSection::Trade)
}

fn parse_craft(key: &str, value: &str) -> Result<ShopSection> {
    tokens(value)
        .chunks_exact(CRAFT_WIDTH)
        .map(|group| -> Result<Craft> {
            let mut ingredients = Vec::new();
            for pair in group[1..].chunks_exact(2) {
                let id: u32 = parse_token(key, pair[0])?;
                // Unused slots hold id 0
                if id > 0 {
                    ingredients.push(Ingredient {
                        id,
                        amount: parse_token(key, pair[1])?,
                    });
                }
            }

            Ok(Craft {
                id: parse_token(key, group[0])?,
                ingredients,
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(ShopSection::Craft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use eodata_core::EntityId;

    fn shops(content: &str) -> Result<ShopTable> {
        parse_shops(&DelimitedConfig::parse(content)?)
    }

    #[test]
    fn test_parse_trade() {
        let table = shops("version=1\n10.trade=1,5,3,2,10,8\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table[&EntityId::new(10)]["trade"],
            ShopSection::Trade(vec![
                Trade { id: 1, buy: 5, sell: 3 },
                Trade { id: 2, buy: 10, sell: 8 },
            ])
        );
    }

    #[test]
    fn test_craft_drops_empty_slots() {
        let table = shops("3.craft=1,2,3,0,0,0,0,0,0").unwrap();
        assert_eq!(
            table[&EntityId::new(3)]["craft"],
            ShopSection::Craft(vec![Craft {
                id: 1,
                ingredients: vec![Ingredient { id: 2, amount: 3 }],
            }])
        );
    }

    #[test]
    fn test_groups_nest_under_vendor() {
        let content = "\
1.name=General Store
1.trade=1,5,3
1.craft=20,1,2,3,4,5,6,7,8
2.name=Armorer
";
        let table = shops(content).unwrap();
        assert_eq!(table.len(), 2);

        let store = &table[&EntityId::new(1)];
        assert_eq!(store["name"], ShopSection::Name("General Store".into()));
        match &store["craft"] {
            ShopSection::Craft(crafts) => assert_eq!(crafts[0].ingredients.len(), 4),
            other => panic!("unexpected section: {:?}", other),
        }
        assert_eq!(table[&EntityId::new(2)].len(), 1);
    }

    #[test]
    fn test_unknown_group() {
        let err = shops("1.stock=1,2,3").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownGroup { ref group, .. } if group == "stock"));
    }

    #[test]
    fn test_undotted_key() {
        let err = shops("1=1,2,3").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedKey { .. }));
    }

    #[test]
    fn test_serialized_shape() {
        let table = shops("1.name=Store\n1.trade=1,5,3\n").unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["1"]["name"], "Store");
        assert_eq!(json["1"]["trade"][0]["buy"], 5);
    }
}
