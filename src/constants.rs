//! Shared crate-wide constants.

use std::time::Duration;

/// Height of the top bar in rows. Maximized windows start directly below it.
pub const TOP_BAR_HEIGHT: u16 = 1;

/// Height of the dock in rows (icon row plus running-indicator row).
pub const DOCK_HEIGHT: u16 = 2;

/// Default size assigned to a window the first time its id is opened.
pub const DEFAULT_WINDOW_WIDTH: u16 = 72;
pub const DEFAULT_WINDOW_HEIGHT: u16 = 18;

/// Floor enforced by the resize gesture on wide viewports. Below this a
/// window cannot show its header plus a useful content area.
pub const MIN_WINDOW_WIDTH: u16 = 40;
pub const MIN_WINDOW_HEIGHT: u16 = 10;

/// Viewports narrower than this render every window at the maximized
/// rectangle and disable drag/resize gestures. The window's own
/// maximized flag is not touched.
pub const NARROW_VIEWPORT_COLS: u16 = 80;

/// Starting value of the z-index counter. The counter only ever
/// increases; the first opened window receives `Z_INDEX_BASE + 1`.
pub const Z_INDEX_BASE: u64 = 100;

/// Dock icon animation choreography: bounce, then zoom, then fire the
/// toggle, then settle back to idle.
pub const ICON_BOUNCE_DURATION: Duration = Duration::from_millis(220);
pub const ICON_ZOOM_DURATION: Duration = Duration::from_millis(420);
pub const ICON_SETTLE_DURATION: Duration = Duration::from_millis(100);

/// Two header presses within this window count as a double press and
/// toggle maximize.
pub const DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(500);

/// How long the boot splash stays up before the desktop appears.
pub const BOOT_SPLASH_DURATION: Duration = Duration::from_millis(1400);
