//! Centralized constants used across the application.
//!
//! Window sizes, status strip defaults and file dialog settings live here so
//! the controller, the UI and the windowing layer agree on them.

/// Title of the main window before any file has been opened
pub const WINDOW_TITLE: &str = "Preview Image";

/// Smallest window size preset, also the minimum window size
pub const SMALL_WINDOW_SIZE: (u32, u32) = (320, 240);

/// Medium window size preset, also the startup window size
pub const MEDIUM_WINDOW_SIZE: (u32, u32) = (640, 480);

/// Largest window size preset, also the maximum window size
pub const LARGE_WINDOW_SIZE: (u32, u32) = (1280, 720);

/// Status strip message shown at startup
pub const INITIAL_STATUS_MESSAGE: &str = "Load an image file";

/// Status strip info shown at startup
pub const INITIAL_STATUS_INFO: &str = "File >> Open (Ctrl+O)";

/// Title of the file selection dialog
pub const OPEN_DIALOG_TITLE: &str = "Browse File";

/// Extensions offered by the "JPEG Files" dialog filter
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
