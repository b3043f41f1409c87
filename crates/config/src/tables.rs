//! Shared helpers for comma-separated data tables
//!
//! Values are flat token lists read in fixed-width groups. A trailing
//! partial group is dropped.
//!
//! Entity ids must be written in canonical decimal form. `05` is rejected
//! rather than merged into `5`.
//!
//! Numeric fields are unsigned. A negative token such as `-1` fails with
//! [`ConfigError::MalformedToken`]; drop chances are the only signed values.

use crate::error::{ConfigError, Result};
use crate::ini::DelimitedConfig;
use eodata_core::EntityId;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// Key carrying the file revision, never part of a table
pub const VERSION_KEY: &str = "version";

/// Parser for the value of one `entity.group` key
pub type GroupParser<V> = fn(key: &str, value: &str) -> Result<V>;

/// Entity id -> group name -> parsed value
pub type GroupedTable<V> = BTreeMap<EntityId, BTreeMap<String, V>>;

pub(crate) fn parse_entity(key: &str, text: &str) -> Result<EntityId> {
    let text = text.trim();
    match text.parse::<u32>() {
        Ok(id) if id.to_string() == text => Ok(EntityId::new(id)),
        _ => Err(ConfigError::MalformedKey { key: key.to_string() }),
    }
}

/// Split `entity.group` into its two parts
pub(crate) fn split_key(key: &str) -> Result<(EntityId, &str)> {
    let mut parts = key.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(entity), Some(group), None) => Ok((parse_entity(key, entity)?, group)),
        _ => Err(ConfigError::MalformedKey { key: key.to_string() }),
    }
}

pub(crate) fn parse_token<T>(key: &str, token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    token.trim().parse().map_err(|e| ConfigError::MalformedToken {
        key: key.to_string(),
        message: format!("{:?}: {}", token, e),
    })
}

pub(crate) fn tokens(value: &str) -> Vec<&str> {
    value.split(',').collect()
}

/// Build a table from `entity.group` keys, dispatching each group to its parser
pub(crate) fn read_grouped<V>(
    config: &DelimitedConfig,
    parsers: &[(&str, GroupParser<V>)],
) -> Result<GroupedTable<V>> {
    let mut table = GroupedTable::new();

    for (key, value) in config.iter() {
        if key == VERSION_KEY {
            continue;
        }

        let (entity, group) = split_key(key)?;
        let parser = parsers
            .iter()
            .find(|(name, _)| *name == group)
            .map(|(_, parser)| *parser)
            .ok_or_else(|| ConfigError::UnknownGroup {
                key: key.to_string(),
                group: group.to_string(),
            })?;

        table
            .entry(entity)
            .or_insert_with(BTreeMap::new)
            .insert(group.to_string(), parser(key, value)?);
    }

    Ok(table)
}

/// Parser for groups stored as plain text
pub(crate) fn parse_name(_key: &str, value: &str) -> Result<String> {
    Ok(value.to_string())
}
