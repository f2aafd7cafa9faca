use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use oralcare_export::capture::ExportOptions;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_EXPORT_TIMEOUT_SECS: u64 = 10;

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_export_timeout_secs() -> u64 {
    DEFAULT_EXPORT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OralcareConfig {
    /// Schema version. A hand-written file without one is read as current.
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// PNG stamped onto every exported report.
    pub watermark_path: PathBuf,
    /// Where exported reports are written.
    pub output_dir: PathBuf,
    /// Upper bound on loading the watermark.
    #[serde(default = "default_export_timeout_secs")]
    pub export_timeout_secs: u64,
}

impl OralcareConfig {
    /// Watermark next to the config file, reports into the working directory.
    pub fn defaults_in(dir: &Path) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            watermark_path: dir.join("watermark.png"),
            output_dir: PathBuf::from("."),
            export_timeout_secs: DEFAULT_EXPORT_TIMEOUT_SECS,
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        let mut options = ExportOptions::new(&self.watermark_path);
        options.watermark_timeout = Duration::from_secs(self.export_timeout_secs);
        options
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.oralcare.cli"))
}

/// Load the config from the platform config directory, writing defaults
/// on first run.
pub fn load_or_init() -> eyre::Result<OralcareConfig> {
    let dir = config_dir()?;
    let path = dir.join("config.json");
    if path.exists() {
        return load_config_from(&path);
    }

    let config = OralcareConfig::defaults_in(&dir);
    save_config_to(&config, &dir)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> eyre::Result<OralcareConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> eyre::Result<OralcareConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .map_or(CURRENT_VERSION, |v| v as u32);

    let migrated = migrate(json, on_disk_version)?;
    let config: OralcareConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update oralcare."
        ));
    }

    // Future migrations go here, one `if from_version < N` block per bump.

    Ok(json)
}

pub fn save_config_to(config: &OralcareConfig, dir: &Path) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
