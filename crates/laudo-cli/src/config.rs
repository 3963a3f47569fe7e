use std::path::{Path, PathBuf};

use laudo_auth::roles::DOCTOR_ROLE;
use laudo_narrative::ollama::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, OllamaConfig};
use laudo_storage::fs::write_atomic;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaudoConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Report history location. `None` = platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Header defaults used when a session leaves them blank.
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub doctor_crm: String,
    /// Role id used for authorization.
    #[serde(default = "default_role")]
    pub role: String,
    /// Added in v1.
    pub narrative: NarrativeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSettings {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

fn default_role() -> String {
    DOCTOR_ROLE.to_string()
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl NarrativeSettings {
    pub fn ollama(&self) -> OllamaConfig {
        OllamaConfig {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl Default for LaudoConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            doctor_name: String::new(),
            doctor_crm: String::new(),
            role: default_role(),
            narrative: NarrativeSettings::default(),
        }
    }
}

impl LaudoConfig {
    /// Directory holding the report history.
    pub fn resolved_data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join("laudo"))
            }
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("laudo").join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<LaudoConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(LaudoConfig::default());
        }
        Err(e) => return Err(eyre::eyre!("failed to read config at {}: {e}", path.display())),
    };

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(raw) => u32::try_from(raw)
            .map_err(|_| eyre::eyre!("config_version {raw} in {} is out of range", path.display()))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: LaudoConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update laudo."
        ));
    }

    // v0 → v1: add narrative settings (disabled)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("narrative")
            .or_insert(serde_json::to_value(NarrativeSettings::default())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added narrative)");
    }

    Ok(json)
}

pub fn save_config(config: &LaudoConfig, path: &Path) -> eyre::Result<()> {
    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    write_atomic(path, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
