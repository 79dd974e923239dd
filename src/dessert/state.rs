/// Dessert Clicker session state: progression counters plus UI-only timers.

use super::catalog::{Catalog, CatalogItem};
use super::progression::ProgressionState;

/// Ticks the dessert stays in its "pressed" frame after a tap (10 ticks/sec).
pub const CLICK_FLASH_TICKS: u32 = 2;
/// Ticks the level panel stays highlighted after a level-up.
pub const LEVEL_FLASH_TICKS: u32 = 15;
/// Lifetime of a toast notice (about the length of a long Android toast).
pub const TOAST_TICKS: u32 = 35;
/// Log entries kept for the log panel.
pub const LOG_CAPACITY: usize = 50;

/// Log entry for the bakery log panel.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// A short-lived, non-blocking notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub text: String,
    pub ticks_left: u32,
}

pub struct DessertState {
    pub catalog: Catalog,
    pub progression: ProgressionState,
    pub log: Vec<LogEntry>,
    /// Animation frame counter (incremented every tick).
    pub anim_frame: u32,
    /// Ticks remaining of the pressed-dessert frame.
    pub click_flash: u32,
    /// Ticks remaining of the level-up highlight.
    pub level_flash: u32,
    /// Set on level-up, cleared once the shell has started its effect.
    pub level_up_pending: bool,
    pub toast: Option<Toast>,
}

impl DessertState {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::desserts())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut state = Self {
            catalog,
            progression: ProgressionState::new(),
            log: Vec::new(),
            anim_frame: 0,
            click_flash: 0,
            level_flash: 0,
            level_up_pending: false,
            toast: None,
        };
        let first = state.catalog.first().name;
        state.add_log(&format!("The bakery opens. Today's special: {}.", first), true);
        state
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }

    pub fn active_item(&self) -> &CatalogItem {
        self.progression.active_item(&self.catalog)
    }

    /// The next dessert to unlock, if any remain.
    pub fn next_unlock(&self) -> Option<&CatalogItem> {
        self.catalog.get(self.progression.active_index() + 1)
    }
}
