//! Input handling: coordinate conversion, click targets, and event types.
//!
//! Keyboard, mouse and touch all end up as an `InputEvent`. Screen taps are
//! resolved to semantic action IDs through the targets registered during the
//! last render.

use ratzilla::ratatui::layout::Rect;

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID.
    Click(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push(ClickTarget { rect, action_id });
        }
    }

    /// Register targets for a row of buttons laid out left to right from `x`.
    ///
    /// Each entry in `buttons` is `(display_width, action_id)`. Buttons are
    /// separated by `gap` columns; each button's target absorbs half of the
    /// gap on either side so adjacent targets touch without overlapping.
    pub fn register_button_targets(
        &mut self,
        buttons: &[(u16, u16)],
        gap: u16,
        x: u16,
        y: u16,
        height: u16,
    ) {
        let mut label_start = x;
        for (i, &(width, action_id)) in buttons.iter().enumerate() {
            let lead = if i == 0 { 0 } else { gap - gap / 2 };
            let trail = if i + 1 == buttons.len() { 0 } else { gap / 2 };
            self.add_click_target(
                Rect::new(label_start - lead, y, lead + width + trail, height),
                action_id,
            );
            label_start += width + gap;
        }
    }

    /// Hit-test a terminal cell against all registered targets.
    /// Later registrations win where targets overlap (they are drawn on top).
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should drop the side log panel.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 80
}

/// Convert a pixel Y coordinate (relative to the grid's top edge) to a row.
///
/// Returns `None` if the click is outside the grid or inputs are invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}

/// Convert a pixel X coordinate (relative to the grid's left edge) to a column.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}

fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    if cell >= cells {
        None
    } else {
        Some(cell)
    }
}
