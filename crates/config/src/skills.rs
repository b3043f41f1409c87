//! Skill master tables (skills.ini)
//!
//! # Format
//! ```text
//! version=1
//! <npc id>.name=<display name>
//! <npc id>.learn=<14 tokens per spell>,...
//! ```
//!
//! Learn group offsets:
//! - 0-3: spell id, cost, level, class
//! - 4-7: prerequisite spell ids (not read)
//! - 8-13: str, int, wis, agi, con, cha requirements

use crate::error::Result;
use crate::ini::DelimitedConfig;
use crate::tables::{parse_name, parse_token, read_grouped, tokens, GroupParser, GroupedTable};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Tokens per learnable spell
pub const SKILL_WIDTH: usize = 14;

/// Spell offered by a skill master
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    /// Spell id
    pub id: u32,
    pub cost: u32,
    pub level: u32,
    pub class: u32,
    pub str_req: u32,
    pub int_req: u32,
    pub wis_req: u32,
    pub agi_req: u32,
    pub con_req: u32,
    pub cha_req: u32,
    /// Always empty; offsets 4-7 are not read
    pub spell_req: Vec<u32>,
}

/// Parsed value of one `npc.group` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SkillSection {
    Name(String),
    Learn(Vec<Skill>),
}

/// NPC id -> group name -> section
pub type SkillTable = GroupedTable<SkillSection>;

const SKILL_PARSERS: &[(&str, GroupParser<SkillSection>)] = &[
    ("name", parse_master_name),
    ("learn", parse_learn),
];

/// Load skills.ini
pub fn read_skills<P: AsRef<Path>>(path: P) -> Result<SkillTable> {
    let path = path.as_ref();
    let table = parse_skills(&DelimitedConfig::load_file(path)?)?;
    debug!("Loaded {} skill masters from {:?}", table.len(), path);
    Ok(table)
}

/// Build the skill table from parsed pairs
pub fn parse_skills(config: &DelimitedConfig) -> Result<SkillTable> {
    read_grouped(config, SKILL_PARSERS)
}

fn parse_master_name(key: &str, value: &str) -> Result<SkillSection> {
    parse_name(key, value).map(SkillSection::Name)
}

fn parse_learn(key: &str, value: &str) -> Result<SkillSection> {
    tokens(value)
        .chunks_exact(SKILL_WIDTH)
        .map(|group| -> Result<Skill> {
            Ok(Skill {
                id: parse_token(key, group[0])?,
                cost: parse_token(key, group[1])?,
                level: parse_token(key, group[2])?,
                class: parse_token(key, group[3])?,
                str_req: parse_token(key, group[8])?,
                int_req: parse_token(key, group[9])?,
                wis_req: parse_token(key, group[10])?,
                agi_req: parse_token(key, group[11])?,
                con_req: parse_token(key, group[12])?,
                cha_req: parse_token(key, group[13])?,
                spell_req: Vec::new(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(SkillSection::Learn)
}
