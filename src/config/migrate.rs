//! Config file upkeep: detect missing keys, rename legacy ones and write
//! defaults back.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys renamed since the first release: (old, new).
const RENAMED_KEYS: &[(&str, &str)] = &[
    ("area_table", "areas_table"),
    ("room_table", "rooms_table"),
    ("tz", "timezone"),
];

fn default_mapping() -> AppResult<Mapping> {
    let value =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default config is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {e}", path.display()))),
    }
}

/// Keys present in the defaults but missing from the file, plus legacy
/// keys still in use.
pub fn check_config(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut findings = Vec::new();
    for key in defaults.keys() {
        if !current.contains_key(key)
            && let Some(k) = key.as_str()
        {
            findings.push(format!("missing: {k}"));
        }
    }
    for (old, new) in RENAMED_KEYS {
        if current.contains_key(*old) {
            findings.push(format!("legacy: {old} (now {new})"));
        }
    }
    Ok(findings)
}

/// Rename legacy keys and add missing ones with their defaults.
/// Returns true when the file was rewritten.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut changed = false;

    for (old, new) in RENAMED_KEYS {
        if let Some(v) = current.remove(*old) {
            if !current.contains_key(*new) {
                current.insert(Value::String(new.to_string()), v);
            }
            changed = true;
        }
    }

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            current.insert(key, value);
            changed = true;
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(changed)
}
