//! App config loader (strict parsing + environment overlay).
//!
//! Resolution order: YAML file (if any), then environment variables, then
//! `validate()`. The file is optional; built-in defaults match the
//! docker-compose deployment.

pub mod schema;

use std::fs;
use std::path::Path;

use spacecapy_core::error::{Result, SpaceCapyError};

pub use schema::{AppConfig, Backend, MemorySection, MySqlSection, StorageSection, WebSection};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SPACECAPY_CONFIG";
/// Picked up from the working directory when `SPACECAPY_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "spacecapy.yaml";

/// Load config from the process environment.
pub fn load() -> Result<AppConfig> {
    let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => read_file(&path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => read_file(DEFAULT_CONFIG_FILE)?,
        Err(_) => AppConfig::default(),
    };
    apply_env(&mut cfg, |k| std::env::var(k).ok())?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let cfg = read_file(path)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn read_file(path: &str) -> Result<AppConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SpaceCapyError::Config(format!("read config failed ({path}): {e}")))?;
    parse(&s)
}

fn parse(s: &str) -> Result<AppConfig> {
    serde_yaml::from_str(s).map_err(|e| SpaceCapyError::Config(format!("invalid yaml: {e}")))
}

/// Overlay the deployment environment variables onto `cfg`.
///
/// `lookup` returns the raw value for a variable name, if set.
pub fn apply_env<F>(cfg: &mut AppConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let db = &mut cfg.storage.mysql;
    if let Some(v) = lookup("MYSQL_HOST") {
        db.host = v;
    }
    if let Some(v) = lookup("MYSQL_PORT") {
        db.port = parse_port("MYSQL_PORT", &v)?;
    }
    if let Some(v) = lookup("MYSQL_USER") {
        db.user = v;
    }
    if let Some(v) = lookup("MYSQL_PASSWORD") {
        db.password = v;
    }
    if let Some(v) = lookup("MYSQL_DATABASE") {
        db.database = v;
    }
    if let Some(v) = lookup("WEB_PORT") {
        cfg.web.port = parse_port("WEB_PORT", &v)?;
    }
    Ok(())
}

fn parse_port(var: &str, v: &str) -> Result<u16> {
    v.trim()
        .parse::<u16>()
        .map_err(|e| SpaceCapyError::Config(format!("{var} must be a port number, got {v:?}: {e}")))
}
