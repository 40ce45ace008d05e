//! Where the application looks for its config, writes its logs, and starts
//! the file dialog.
//!
//! Under `cargo run` everything stays in the working directory. Installed
//! builds use the platform locations from [`dirs`]:
//! - config: `~/.config/image-preview/` on Linux, the data directory elsewhere
//! - logs: `{data_dir}/image-preview/logs/`

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "image-preview";

/// True under `cargo run` or in debug builds
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Platform base directory joined with the application's own folder,
/// or the working directory in dev mode
fn app_dir(base: fn() -> Option<PathBuf>) -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }
    base().map(|dir| dir.join(APP_DIR_NAME))
}

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        app_dir(dirs::config_dir)
    }

    #[cfg(not(target_os = "linux"))]
    {
        app_dir(dirs::data_dir)
    }
}

/// `config.json` inside [`config_dir`]
pub fn config_file() -> PathBuf {
    config_dir()
        .unwrap_or_default()
        .join("config.json")
}

pub fn logs_dir() -> PathBuf {
    app_dir(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}

/// The user's Pictures folder, falling back to home
pub fn default_image_dir() -> Option<PathBuf> {
    dirs::picture_dir().or_else(dirs::home_dir)
}

/// Directory the Open dialog starts in: the folder of the last selected
/// file, then the configured folder, then [`default_image_dir`].
pub fn initial_dialog_dir(last: Option<PathBuf>, configured: Option<&Path>) -> Option<PathBuf> {
    last.or_else(|| configured.map(Path::to_path_buf))
        .or_else(default_image_dir)
}
