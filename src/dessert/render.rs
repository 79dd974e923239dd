//! Dessert Clicker rendering: app bar, dessert counter, level gauge, totals.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::theme::{Palette, Theme};
use crate::widgets::{register_area, ButtonBar};

use super::actions::*;
use super::catalog::Art;
use super::logic::format_number;
use super::state::DessertState;

/// Sparkle frames drawn around the dessert while the tap flash is active.
const SPARKLE: &[&str] = &["✦   ✧   ✦", "✧   ✦   ✧"];

/// Five-row artwork per dessert.
fn art_lines(art: Art) -> &'static [&'static str] {
    match art {
        Art::Cupcake => &[
            "   .-~~~-.   ",
            "  (~~~~~~~)  ",
            "  \\|||||||/  ",
            "   \\|||||/   ",
            "    `---'    ",
        ],
        Art::Donut => &[
            "   .-\"\"\"-.   ",
            "  / .---. \\  ",
            " | (     ) | ",
            "  \\ '---' /  ",
            "   '-...-'   ",
        ],
        Art::Eclair => &[
            "             ",
            "  .~~~~~~~.  ",
            " (=========) ",
            "  '-------'  ",
            "             ",
        ],
        Art::Froyo => &[
            "     (@)     ",
            "   (@@@@@)   ",
            "  (@@@@@@@)  ",
            "   \\#####/   ",
            "    \\###/    ",
        ],
        Art::Gingerbread => &[
            "     (o)     ",
            "   --( )--   ",
            "     (*)     ",
            "    /   \\    ",
            "   /     \\   ",
        ],
        Art::Honeycomb => &[
            "  __    __   ",
            " /  \\__/  \\  ",
            " \\__/  \\__/  ",
            " /  \\__/  \\  ",
            " \\__/  \\__/  ",
        ],
        Art::IceCreamSandwich => &[
            "  _________  ",
            " |#########| ",
            " |:::::::::| ",
            " |#########| ",
            "  ~~~~~~~~~  ",
        ],
        Art::JellyBean => &[
            "    .--.     ",
            "   (    )    ",
            "    )  (     ",
            "   (    )    ",
            "    '--'     ",
        ],
        Art::KitKat => &[
            "  _________  ",
            " | | | | | | ",
            " | | | | | | ",
            " |_|_|_|_|_| ",
            "             ",
        ],
        Art::Lollipop => &[
            "    .---.    ",
            "   ( @ @ )   ",
            "    '---'    ",
            "      |      ",
            "      |      ",
        ],
        Art::Marshmallow => &[
            "   .-----.   ",
            "  |       |  ",
            "  |       |  ",
            "  '-------'  ",
            "             ",
        ],
        Art::Nougat => &[
            "  _________  ",
            " |o .  o . | ",
            " | . o  . o| ",
            " |_________| ",
            "             ",
        ],
        Art::Oreo => &[
            "  .-------.  ",
            " (#########) ",
            " (=========) ",
            " (#########) ",
            "  '-------'  ",
        ],
    }
}

pub fn render(
    state: &DessertState,
    theme: &Theme,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let palette = theme.palette();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10)])
        .split(area);

    render_app_bar(theme, f, rows[0], click_state);

    // Side log panel only when there is room for it
    let (main_area, log_area) = if is_narrow_layout(rows[1].width) {
        (rows[1], None)
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        (cols[0], Some(cols[1]))
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // dessert counter
            Constraint::Length(4), // level
            Constraint::Length(4), // totals
            Constraint::Length(1), // status / toast
        ])
        .split(main_area);

    render_dessert(state, palette, f, chunks[0], click_state);
    render_level(state, palette, f, chunks[1]);
    render_totals(state, palette, f, chunks[2]);
    render_status(state, palette, f, chunks[3]);

    if let Some(log_area) = log_area {
        render_log(state, palette, f, log_area);
    }
}

fn render_app_bar(
    theme: &Theme,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let palette = theme.palette();
    let bar_style = Style::default().fg(palette.on_primary).bg(palette.primary);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.muted).bg(palette.primary))
        .style(bar_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Dessert Clicker",
        bar_style.add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, inner);

    let button_style = bar_style.add_modifier(Modifier::BOLD);
    let mut cs = click_state.borrow_mut();
    ButtonBar::new(2)
        .button('t', theme.toggle_label(), button_style, TOGGLE_THEME)
        .button('s', "Share", button_style, SHARE_SUMMARY)
        .render(f, Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), inner.height), &mut cs);
}

fn render_dessert(
    state: &DessertState,
    palette: &Palette,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let item = state.active_item();
    let pressed = state.click_flash > 0;

    let art_style = if pressed {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let mut lines: Vec<Line> = Vec::new();
    if pressed {
        let sparkle = SPARKLE[(state.anim_frame as usize) % SPARKLE.len()];
        lines.push(Line::from(Span::styled(sparkle, Style::default().fg(palette.accent))));
    } else {
        lines.push(Line::from(""));
    }
    for row in art_lines(item.art) {
        lines.push(Line::from(Span::styled(*row, art_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            item.name,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ${}", format_number(u64::from(item.price))),
            Style::default().fg(palette.accent),
        ),
    ]));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title(" Tap to sell "),
        );
    f.render_widget(widget, area);

    // The whole counter is the sell button
    let mut cs = click_state.borrow_mut();
    register_area(&mut cs, area, SELL_DESSERT);
}

fn render_level(state: &DessertState, palette: &Palette, f: &mut Frame, area: Rect) {
    let p = &state.progression;
    let border = if state.level_flash > 0 {
        palette.highlight
    } else {
        palette.muted
    };
    let title = if state.level_flash > 0 {
        format!(" ★ Level {} ★ ", p.level())
    } else {
        format!(" Level {} ", p.level())
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(Span::styled(
                    title,
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(palette.gauge).bg(palette.background))
        .ratio(p.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", p.progress() * 100.0));
    f.render_widget(gauge, area);
}

fn render_totals(state: &DessertState, palette: &Palette, f: &mut Frame, area: Rect) {
    let p = &state.progression;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().bg(palette.secondary));
    let width = block.inner(area).width as usize;

    let row = |label: &str, value: String| -> Line<'static> {
        let pad = width.saturating_sub(label.chars().count() + value.chars().count());
        Line::from(vec![
            Span::styled(label.to_string(), Style::default().fg(palette.text)),
            Span::raw(" ".repeat(pad)),
            Span::styled(
                value,
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        row("Desserts sold", format_number(p.total_sold())),
        row("Total revenue", format!("${}", format_number(p.total_revenue()))),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(state: &DessertState, palette: &Palette, f: &mut Frame, area: Rect) {
    let line = match (&state.toast, state.next_unlock()) {
        (Some(toast), _) => Line::from(Span::styled(
            format!(" {} ", toast.text),
            Style::default()
                .fg(palette.on_primary)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        (None, Some(next)) => {
            let remaining = next.threshold.saturating_sub(state.progression.total_sold());
            Line::from(Span::styled(
                format!("{} unlocks in {} more sales", next.name, format_number(remaining)),
                Style::default().fg(palette.muted),
            ))
        }
        (None, None) => Line::from(Span::styled(
            "Every dessert unlocked!",
            Style::default().fg(palette.muted),
        )),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_log(state: &DessertState, palette: &Palette, f: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible);

    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title(" Bakery log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dessert::catalog::Catalog;

    #[test]
    fn every_dessert_has_five_rows_of_art() {
        for item in Catalog::desserts().iter() {
            assert_eq!(art_lines(item.art).len(), 5, "{}", item.name);
        }
    }

    #[test]
    fn art_rows_share_a_width() {
        for item in Catalog::desserts().iter() {
            let widths: Vec<usize> = art_lines(item.art)
                .iter()
                .map(|row| Line::from(*row).width())
                .collect();
            assert!(
                widths.iter().all(|w| *w == widths[0]),
                "{} has ragged rows: {:?}",
                item.name,
                widths
            );
        }
    }
}
