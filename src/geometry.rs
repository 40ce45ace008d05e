//! Window placement arithmetic.
//!
//! Everything here works in physical pixels on plain integers so it can be
//! tested without a window. The windowing layer gathers the measurements.

use std::fmt;

/// Raw measurements of a window and the screen it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMetrics {
    /// Screen size as `(width, height)`
    pub screen_size: (i32, i32),
    /// Outer top-left corner of the window as `(x, y)`
    pub window_origin: (i32, i32),
    /// Client area size as `(width, height)`
    pub window_size: (i32, i32),
    /// Side border width added by the window manager
    pub frame_width: i32,
    /// Title bar height added by the window manager
    pub titlebar_height: i32,
}

/// A window placement: size plus top-left position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl WindowGeometry {
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Formats as `{width}x{height}+{x}+{y}`, the X11 geometry notation.
impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Compute the window's current placement and the placement that would
/// center it on the screen.
///
/// The centered position accounts for the decorations the window manager
/// draws around the client area: two side borders horizontally, and one
/// border plus the title bar vertically. Halving uses floor division.
pub fn compute_geometries(metrics: &WindowMetrics) -> (WindowGeometry, WindowGeometry) {
    let (screen_width, screen_height) = metrics.screen_size;
    let (window_width, window_height) = metrics.window_size;
    let (x, y) = metrics.window_origin;

    let current = WindowGeometry {
        width: window_width,
        height: window_height,
        x,
        y,
    };

    let decorated_width = window_width + 2 * metrics.frame_width;
    let decorated_height = window_height + metrics.frame_width + metrics.titlebar_height;
    let centered = WindowGeometry {
        width: window_width,
        height: window_height,
        x: screen_width.div_euclid(2) - decorated_width.div_euclid(2),
        y: screen_height.div_euclid(2) - decorated_height.div_euclid(2),
    };

    (current, centered)
}
