//! Data source locations
//!
//! Loaded from `eodata.txt`:
//! ```text
//! # comments are skipped
//! datadir = /srv/eoserv/data
//! eif = /srv/eoserv/data/pub/custom.eif
//! ```

use crate::error::Result;
use crate::ini::DelimitedConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "eodata.txt";

/// Default data directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Paths to every decodable data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Classes pub (from "ecf" option)
    pub ecf: PathBuf,
    /// Items pub (from "eif" option)
    pub eif: PathBuf,
    /// Spells pub (from "esf" option)
    pub esf: PathBuf,
    /// NPCs pub (from "enf" option)
    pub enf: PathBuf,
    /// Drop table (from "drops" option)
    pub drops: PathBuf,
    /// Skill masters (from "skills" option)
    pub skills: PathBuf,
    /// Shops (from "shops" option)
    pub shops: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl DataPaths {
    /// Standard file names under `dir`
    pub fn with_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let pub_dir = dir.join("pub");
        Self {
            ecf: pub_dir.join("dat001.ecf"),
            eif: pub_dir.join("dat001.eif"),
            esf: pub_dir.join("dsl001.esf"),
            enf: pub_dir.join("dtn001.enf"),
            drops: dir.join("drops.ini"),
            skills: dir.join("skills.ini"),
            shops: dir.join("shops.ini"),
        }
    }

    /// Load paths from a config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = DelimitedConfig::load_file(path)?;
        Ok(Self::from_config(&config))
    }

    /// Load `eodata.txt` from the working directory, or defaults if absent
    pub fn load_default() -> Result<Self> {
        if !Path::new(DEFAULT_CONFIG_FILE).exists() {
            tracing::debug!("{} not found, using default paths", DEFAULT_CONFIG_FILE);
            return Ok(Self::default());
        }
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }

    /// Parse config file content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::from_config(&DelimitedConfig::parse(content)?))
    }

    fn from_config(config: &DelimitedConfig) -> Self {
        // datadir rebases the defaults before explicit paths apply
        let mut paths = match config.get("datadir") {
            Some(dir) => Self::with_data_dir(dir),
            None => Self::default(),
        };

        for (key, value) in config.iter() {
            paths.parse_option(key, value);
        }

        paths
    }

    fn parse_option(&mut self, key: &str, value: &str) {
        match key {
            "ecf" => self.ecf = value.into(),
            "eif" => self.eif = value.into(),
            "esf" => self.esf = value.into(),
            "enf" => self.enf = value.into(),
            "drops" => self.drops = value.into(),
            "skills" => self.skills = value.into(),
            "shops" => self.shops = value.into(),
            "datadir" => {}
            _ => {
                tracing::debug!("Unknown data path option: {} = {}", key, value);
            }
        }
    }

    /// Every path with its option name
    pub fn entries(&self) -> [(&'static str, &Path); 7] {
        [
            ("ecf", &self.ecf),
            ("eif", &self.eif),
            ("esf", &self.esf),
            ("enf", &self.enf),
            ("drops", &self.drops),
            ("skills", &self.skills),
            ("shops", &self.shops),
        ]
    }

    /// Log the resolved paths
    pub fn display(&self) {
        tracing::info!("Data sources:");
        for (name, path) in self.entries() {
            let state = if fs::metadata(path).is_ok() { "ok" } else { "missing" };
            tracing::info!("  {:<6} {} ({})", name, path.display(), state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = DataPaths::default();
        assert_eq!(paths.ecf, PathBuf::from("data/pub/dat001.ecf"));
        assert_eq!(paths.esf, PathBuf::from("data/pub/dsl001.esf"));
        assert_eq!(paths.enf, PathBuf::from("data/pub/dtn001.enf"));
        assert_eq!(paths.shops, PathBuf::from("data/shops.ini"));
    }

    #[test]
    fn test_parse_overrides() {
        let text = r#"
# server data
datadir = /srv/eo
eif = custom/items.eif
colour = blue
"#;
        let paths = DataPaths::parse(text).unwrap();
        assert_eq!(paths.eif, PathBuf::from("custom/items.eif"));
        assert_eq!(paths.ecf, PathBuf::from("/srv/eo/pub/dat001.ecf"));
        assert_eq!(paths.drops, PathBuf::from("/srv/eo/drops.ini"));
    }
}
