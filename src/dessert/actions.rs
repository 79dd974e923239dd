//! Semantic action IDs for Dessert Clicker click targets.
//!
//! Each constant represents a distinct clickable action in the UI.
//! These IDs are registered during render and dispatched via `InputEvent::Click`.

// ── Counter ─────────────────────────────────────────────────────
pub const SELL_DESSERT: u16 = 0;

// ── App bar ─────────────────────────────────────────────────────
pub const TOGGLE_THEME: u16 = 10;
pub const SHARE_SUMMARY: u16 = 11;
