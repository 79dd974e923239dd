mod app;
mod dessert;
mod input;
mod theme;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use tachyonfx::{fx, Duration, Effect, Interpolation};

use app::App;
use dessert::share::WebShare;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use time::{TickClock, TICKS_PER_SEC};

/// Length of the level-up fade, in ms.
const LEVEL_UP_FX_MS: u32 = 600;

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;

    web_sys::console::log_1(
        &format!(
            "click: pixel=({}, {}), cell=({}, {}), targets={}",
            mouse_x,
            mouse_y,
            col,
            row,
            cs.targets.len()
        )
        .into(),
    );

    Some((col, row))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(action_id) = action {
                app.borrow_mut()
                    .handle_input(&InputEvent::Click(action_id), &WebShare);
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                app.borrow_mut().handle_input(&InputEvent::Key(c), &WebShare);
            }
        }
    });

    let clock = RefCell::new(TickClock::new(TICKS_PER_SEC));
    let level_fx: RefCell<Option<Effect>> = RefCell::new(None);

    terminal.draw_web(move |f| {
        let (ticks, frame_ms) = {
            let mut clock = clock.borrow_mut();
            let ticks = clock.advance(now_ms());
            (ticks, clock.last_frame_ms())
        };

        let mut app = app.borrow_mut();
        app.tick(ticks);
        if app.take_level_up() {
            let color = app.theme.palette().highlight;
            *level_fx.borrow_mut() = Some(fx::fade_from_fg(
                color,
                (LEVEL_UP_FX_MS, Interpolation::QuadOut),
            ));
        }

        // Update terminal dimensions and clear click targets
        let area = f.area();
        {
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = area.width;
            cs.terminal_rows = area.height;
            cs.clear_targets();
        }

        app.render(f, &click_state);

        let mut slot = level_fx.borrow_mut();
        if let Some(effect) = slot.as_mut() {
            effect.process(Duration::from_millis(frame_ms.into()), f.buffer_mut(), area);
            if effect.done() {
                *slot = None;
            }
        }
    });

    Ok(())
}
