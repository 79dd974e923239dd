//! Dessert Clicker: tap the dessert, sell it, unlock the next one.

pub mod actions;
pub mod catalog;
pub mod logic;
pub mod progression;
pub mod render;
pub mod save;
pub mod share;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::theme::Theme;

use actions::*;
use share::ShareRequest;
use state::DessertState;

/// Side effects the game asks the shell to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellCommand {
    ToggleTheme,
    Share(ShareRequest),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputOutcome {
    Ignored,
    /// Handled entirely inside the game.
    Consumed,
    Command(ShellCommand),
}

pub struct DessertGame {
    pub state: DessertState,
}

impl DessertGame {
    pub fn new() -> Self {
        Self {
            state: DessertState::new(),
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> InputOutcome {
        let action = match event {
            InputEvent::Key(c) => match c.to_ascii_lowercase() {
                'c' | ' ' => SELL_DESSERT,
                't' => TOGGLE_THEME,
                's' => SHARE_SUMMARY,
                _ => return InputOutcome::Ignored,
            },
            InputEvent::Click(id) => *id,
        };
        self.handle_action(action)
    }

    fn handle_action(&mut self, action_id: u16) -> InputOutcome {
        match action_id {
            SELL_DESSERT => {
                logic::click(&mut self.state);
                InputOutcome::Consumed
            }
            TOGGLE_THEME => InputOutcome::Command(ShellCommand::ToggleTheme),
            SHARE_SUMMARY => {
                let p = &self.state.progression;
                InputOutcome::Command(ShellCommand::Share(ShareRequest::summary(
                    p.total_sold(),
                    p.total_revenue(),
                )))
            }
            _ => InputOutcome::Ignored,
        }
    }

    /// Surface a non-blocking notice to the player.
    pub fn notify(&mut self, text: &str) {
        logic::show_toast(&mut self.state, text);
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    pub fn render(
        &self,
        theme: &Theme,
        f: &mut Frame,
        area: Rect,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        render::render(&self.state, theme, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_c_sells_a_dessert() {
        let mut game = DessertGame::new();
        assert_eq!(game.handle_input(&InputEvent::Key('c')), InputOutcome::Consumed);
        assert_eq!(game.state.progression.total_sold(), 1);
        assert_eq!(game.state.progression.total_revenue(), 5);
    }

    #[test]
    fn space_and_uppercase_also_sell() {
        let mut game = DessertGame::new();
        game.handle_input(&InputEvent::Key(' '));
        game.handle_input(&InputEvent::Key('C'));
        assert_eq!(game.state.progression.total_sold(), 2);
    }

    #[test]
    fn click_on_counter_sells() {
        let mut game = DessertGame::new();
        game.handle_input(&InputEvent::Click(SELL_DESSERT));
        assert_eq!(game.state.progression.total_sold(), 1);
    }

    #[test]
    fn theme_toggle_is_a_shell_command() {
        let mut game = DessertGame::new();
        assert_eq!(
            game.handle_input(&InputEvent::Click(TOGGLE_THEME)),
            InputOutcome::Command(ShellCommand::ToggleTheme)
        );
        assert_eq!(
            game.handle_input(&InputEvent::Key('t')),
            InputOutcome::Command(ShellCommand::ToggleTheme)
        );
    }

    #[test]
    fn share_carries_current_totals() {
        let mut game = DessertGame::new();
        for _ in 0..3 {
            game.handle_input(&InputEvent::Key('c'));
        }
        match game.handle_input(&InputEvent::Key('s')) {
            InputOutcome::Command(ShellCommand::Share(req)) => {
                assert_eq!(req.text, share::format_summary(3, 15));
                assert_eq!(req.mime, "text/plain");
            }
            other => panic!("expected share command, got {:?}", other),
        }
    }

    #[test]
    fn unknown_input_is_ignored() {
        let mut game = DessertGame::new();
        assert_eq!(game.handle_input(&InputEvent::Key('x')), InputOutcome::Ignored);
        assert_eq!(game.handle_input(&InputEvent::Click(999)), InputOutcome::Ignored);
        assert_eq!(game.state.progression.total_sold(), 0);
    }

    #[test]
    fn notify_shows_toast() {
        let mut game = DessertGame::new();
        game.notify("Sharing not available");
        assert_eq!(game.state.toast.as_ref().unwrap().text, "Sharing not available");
        game.tick(1_000);
        assert!(game.state.toast.is_none());
    }
}
