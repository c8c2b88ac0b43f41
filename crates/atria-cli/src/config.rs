use std::path::{Path, PathBuf};

use atria_instruments::report::DEFAULT_TOP_SUBDOMAINS;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtriaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Built-in instrument to score with, or the id given to a custom catalog.
    #[serde(default = "default_instrument_id")]
    pub instrument_id: String,
    /// JSON catalog that replaces the built-in theme table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// How many subdomains to list per domain. Added in v1.
    pub top_subdomain_limit: usize,
}

impl Default for AtriaConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            instrument_id: default_instrument_id(),
            catalog_path: None,
            top_subdomain_limit: DEFAULT_TOP_SUBDOMAINS,
        }
    }
}

fn default_instrument_id() -> String {
    "strength360".to_string()
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("atria"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or the defaults if no file exists.
pub fn load_config(path: &Path) -> eyre::Result<AtriaConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AtriaConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AtriaConfig = serde_json::from_value(migrated)?;
    if config.top_subdomain_limit == 0 {
        return Err(eyre::eyre!("top_subdomain_limit must be at least 1"));
    }
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update atria."
        ));
    }

    // v0 → v1: add top_subdomain_limit
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("top_subdomain_limit")
            .or_insert(serde_json::Value::Number(DEFAULT_TOP_SUBDOMAINS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added top_subdomain_limit)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &AtriaConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
