//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Drag threshold in logical pixels.
///
/// If the pointer moves more than this distance from the initial press
/// position before the long press fires, the press is treated as a scroll
/// and the pending drag is disarmed. Once armed, the same threshold is the
/// deadzone that must be exceeded before the floating proxy appears.
///
/// 8.0 matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// How long the pointer must stay pressed (within the slop) before a press
/// is recognised as a drag start. Matches the platform default long-press
/// duration of half a second.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Interval between autoscroll ticks while the pointer sits in an edge band.
pub const AUTOSCROLL_TICK_MS: u64 = 10;

/// Distance from the top/bottom of the visible list within which dragging
/// triggers autoscroll.
pub const AUTOSCROLL_EDGE_THRESHOLD: f32 = 60.0;

/// Maximum scroll distance applied per autoscroll tick, scaled by the
/// autoscroll magnitude.
pub const MAX_AUTOSCROLL_PER_TICK: f32 = 16.0;
