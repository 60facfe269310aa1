use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use odonto_core::store_keys::DEFAULT_APP_ID;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the config directory (used by tests and shared machines).
pub const CONFIG_DIR_ENV: &str = "ODONTO_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    pub bucket: String,
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Caller identity of the configured credentials; stamped on every
    /// record this examiner submits.
    pub created_by: String,
    /// Shared grouping id. Added in v1; defaults to `created_by`.
    #[serde(default)]
    pub session_id: String,
    pub created_at: jiff::Timestamp,
    pub credentials: CredentialSource,
}

fn default_app_id() -> String {
    DEFAULT_APP_ID.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub region: String,
    pub bucket: String,
    pub app_id: String,
    pub created_by: String,
    pub session_id: String,
    pub created_at: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("id.odonto.survey"))
}

pub fn load_config() -> eyre::Result<SurveyConfig> {
    load_config_from(&config_dir()?)
}

pub fn load_config_from(dir: &Path) -> eyre::Result<SurveyConfig> {
    let path = dir.join("config.json");
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: SurveyConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update odonto."
        ));
    }

    // v0 → v1: add session_id, defaulting to the examiner's own identity
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let created_by = obj
            .get("created_by")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        obj.entry("session_id")
            .or_insert(serde_json::Value::String(created_by));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added session_id)");
    }

    Ok(json)
}

/// Session id of the config saved in `dir`, if any. An unreadable config
/// is reported and treated as absent so `configure` can replace it.
pub fn existing_session_id_in(dir: &Path) -> Option<String> {
    if !dir.join("config.json").exists() {
        return None;
    }
    match load_config_from(dir) {
        Ok(config) if !config.session_id.is_empty() => Some(config.session_id),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "existing config unreadable, session id not carried over"
            );
            None
        }
    }
}

pub fn save_config(config: &SurveyConfig) -> eyre::Result<()> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &SurveyConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(config: &SurveyConfig) -> ConfigInfo {
    let (credential_type, profile_name, access_key_hint) = match &config.credentials {
        CredentialSource::Inline {
            access_key_id,
            session_token,
            ..
        } => {
            let cred_type = if session_token.is_some() {
                "temporary".to_string()
            } else {
                "inline".to_string()
            };
            (cred_type, None, Some(redact_access_key(access_key_id)))
        }
        CredentialSource::Profile { profile_name } => {
            ("profile".to_string(), Some(profile_name.clone()), None)
        }
        CredentialSource::DefaultChain => ("default_chain".to_string(), None, None),
    };

    ConfigInfo {
        region: config.region.clone(),
        bucket: config.bucket.clone(),
        app_id: config.app_id.clone(),
        created_by: config.created_by.clone(),
        session_id: config.session_id.clone(),
        created_at: config.created_at.to_string(),
        credential_type,
        profile_name,
        access_key_hint,
    }
}

fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 {
        return "****".to_string();
    }
    match (key.get(..4), key.get(key.len() - 4..)) {
        (Some(prefix), Some(suffix)) => format!("{prefix}...{suffix}"),
        _ => "****".to_string(),
    }
}
