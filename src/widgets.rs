//! Reusable clickable UI components.
//!
//! Each component renders itself and registers its own click targets, so the
//! visual output and the tap regions cannot drift apart.

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── ButtonBar ──────────────────────────────────────────────────

/// A right-aligned row of bracketed buttons, e.g. `[T] Dark  [S] Share`.
///
/// Targets are computed from the rendered label widths, so the tap region
/// follows the label even when it changes (`Dark` vs `Light`).
///
/// # Example
/// ```ignore
/// ButtonBar::new(2)
///     .button('t', "Dark", style, TOGGLE_THEME)
///     .button('s', "Share", style, SHARE_SUMMARY)
///     .render(f, area, &mut cs);
/// ```
pub struct ButtonBar {
    buttons: Vec<(String, Style, u16)>,
    gap: u16,
}

impl ButtonBar {
    pub fn new(gap: u16) -> Self {
        Self {
            buttons: Vec::new(),
            gap,
        }
    }

    pub fn button(mut self, key: char, label: &str, style: Style, action_id: u16) -> Self {
        let text = format!("[{}] {}", key.to_ascii_uppercase(), label);
        self.buttons.push((text, style, action_id));
        self
    }

    /// Display width of each button label, paired with its action ID.
    fn widths(&self) -> Vec<(u16, u16)> {
        self.buttons
            .iter()
            .map(|(text, _, id)| (Line::from(text.as_str()).width() as u16, *id))
            .collect()
    }

    /// Total width including gaps.
    pub fn width(&self) -> u16 {
        let labels: u16 = self.widths().iter().map(|(w, _)| *w).sum();
        labels + self.gap * self.buttons.len().saturating_sub(1) as u16
    }

    /// Keep the leading buttons that fit in `width` columns; drop the rest.
    fn fit_to(mut self, width: u16) -> Self {
        while self.width() > width {
            self.buttons.pop();
        }
        self
    }

    /// Register one target per button, flush right within `area`.
    fn register_targets(&self, area: Rect, cs: &mut ClickState) {
        let start_x = area.x + area.width - self.width().min(area.width);
        cs.register_button_targets(&self.widths(), self.gap, start_x, area.y, area.height.max(1));
    }

    /// Render flush right within `area` and register click targets.
    /// Buttons that do not fit are left out entirely.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let bar = self.fit_to(area.width);
        bar.register_targets(area, cs);

        let gap = " ".repeat(bar.gap as usize);
        let mut spans: Vec<Span> = Vec::new();
        for (i, (text, style, _)) in bar.buttons.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            spans.push(Span::styled(text, style));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            area,
        );
    }
}

/// Register the whole of `area` as one click target (e.g. the dessert panel).
pub fn register_area(cs: &mut ClickState, area: Rect, action_id: u16) {
    cs.add_click_target(area, action_id);
}
