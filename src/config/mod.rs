use bevy::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration read from disk.
///
/// The file is optional and never written back; every field falls back to a
/// default when missing.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AppConfigData {
    /// Directory the file dialog opens in before any file has been selected
    #[serde(default)]
    pub initial_directory: Option<PathBuf>,

    /// Width of the window manager's side border, in physical pixels
    #[serde(default)]
    pub frame_width: i32,

    /// Height of the window manager's title bar, in physical pixels
    #[serde(default)]
    pub titlebar_height: i32,

    /// Whether "Settings >> Center" starts checked
    #[serde(default)]
    pub center_on_start: bool,
}

/// Runtime configuration resource
#[derive(Resource, Debug)]
pub struct AppConfig {
    /// The loaded configuration data
    pub data: AppConfigData,
    /// Path the configuration was read from
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from the given path
fn load_config(config_path: &Path) -> LoadConfigResult {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", config_path);
                LoadConfigResult {
                    data,
                    reset_reason: None,
                }
            }
            Err(e) => LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
            },
        },
        Err(e) => LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: Some(format!("Could not read configuration file: {}", e)),
        },
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(mut config: ResMut<AppConfig>) {
    let result = load_config(&config.config_path);
    if let Some(reason) = result.reset_reason {
        warn!("{}; using defaults", reason);
    }
    config.data = result.data;
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded));
    }
}
