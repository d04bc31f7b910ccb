use anyhow::{Context, Result};
use releve_core::RuleSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_releve_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub statement: StatementSection,
    /// Extra rules, tried before the bank table
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatementSection {
    /// Default rule table, e.g. "cmso"
    pub bank: Option<String>,
    /// IANA timezone used to compute the reference date
    pub timezone: String,
    pub delimiter: char,
    /// Fail on the first bad row instead of skipping it
    pub strict: bool,
}

impl Default for StatementSection {
    fn default() -> Self {
        Self {
            bank: None,
            timezone: "Europe/Paris".to_string(),
            delimiter: ';',
            strict: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_releve_home()?.join("config.toml"))
}

/// `path` overrides `~/.releve/config.toml`; a missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
