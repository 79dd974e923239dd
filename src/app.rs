//! Application shell: owns the theme flag and runs the game's shell commands.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::Frame;

use crate::dessert::share::{ShareTarget, SHARING_NOT_AVAILABLE};
use crate::dessert::{DessertGame, InputOutcome, ShellCommand};
use crate::input::{ClickState, InputEvent};
use crate::theme::Theme;

pub struct App {
    pub game: DessertGame,
    pub theme: Theme,
}

impl App {
    pub fn new() -> Self {
        let app = Self {
            game: DessertGame::new(),
            theme: Theme::default(),
        };
        #[cfg(target_arch = "wasm32")]
        let app = app.restored();
        app
    }

    /// Pick up the tab's session snapshot, if there is one.
    #[cfg(target_arch = "wasm32")]
    fn restored(mut self) -> Self {
        if let Some(dark) = crate::dessert::save::load_session(&mut self.game.state) {
            self.theme.dark = dark;
            self.game.state.add_log("Picked up where you left off.", false);
        }
        self
    }

    /// Dispatch one input event. Returns true if anything handled it.
    pub fn handle_input(&mut self, event: &InputEvent, share_target: &dyn ShareTarget) -> bool {
        let consumed = match self.game.handle_input(event) {
            InputOutcome::Ignored => false,
            InputOutcome::Consumed => true,
            InputOutcome::Command(command) => {
                self.run(command, share_target);
                true
            }
        };
        if consumed {
            #[cfg(target_arch = "wasm32")]
            crate::dessert::save::save_session(&self.game.state, self.theme.dark);
        }
        consumed
    }

    fn run(&mut self, command: ShellCommand, share_target: &dyn ShareTarget) {
        match command {
            ShellCommand::ToggleTheme => self.theme.toggle(),
            ShellCommand::Share(request) => {
                if let Err(e) = share_target.share(&request) {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("share failed: {e}").into());
                    #[cfg(not(target_arch = "wasm32"))]
                    let _ = e;
                    self.game.notify(SHARING_NOT_AVAILABLE);
                }
            }
        }
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        self.game.tick(delta_ticks);
    }

    /// True once per level-up; the caller starts its effect when it sees it.
    pub fn take_level_up(&mut self) -> bool {
        std::mem::take(&mut self.game.state.level_up_pending)
    }

    pub fn render(&self, f: &mut Frame, click_state: &Rc<RefCell<ClickState>>) {
        let area = f.area();
        self.game.render(&self.theme, f, area, click_state);
    }
}
