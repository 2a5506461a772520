//! Configuration file upgrades: detect keys added by newer versions and
//! fill them with their defaults, leaving user values untouched.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn defaults_mapping(database: Option<&Value>) -> AppResult<Mapping> {
    let mut defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("default configuration is not a mapping".into())),
    };
    if let Some(db) = database {
        defaults.insert(Value::from("database"), db.clone());
    }
    Ok(defaults)
}

/// Merge missing keys of `defaults` into `target` (one nested level deep).
/// Returns the dotted names of every key that was added.
fn merge_missing(target: &mut Mapping, defaults: &Mapping, prefix: &str) -> Vec<String> {
    let mut added = Vec::new();

    for (key, default_value) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        match (target.get_mut(key), default_value) {
            (None, _) => {
                target.insert(key.clone(), default_value.clone());
                added.push(name);
            }
            (Some(Value::Mapping(inner)), Value::Mapping(inner_defaults)) => {
                added.extend(merge_missing(inner, inner_defaults, &name));
            }
            _ => {}
        }
    }

    added
}

/// List the keys missing from the configuration file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping(current.get("database"))?;
    Ok(merge_missing(&mut current, &defaults, ""))
}

/// Add every missing key with its default value and rewrite the file.
/// Returns the keys that were added (empty when nothing changed).
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping(current.get("database"))?;
    let added = merge_missing(&mut current, &defaults, "");

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, yaml)?;
    }

    Ok(added)
}
