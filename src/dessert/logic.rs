//! Dessert Clicker session logic: pure functions over `DessertState`.

use super::progression::advance_on_click;
use super::state::{DessertState, Toast, CLICK_FLASH_TICKS, LEVEL_FLASH_TICKS, TOAST_TICKS};

/// Sell the dessert on the counter and record what changed.
pub fn click(state: &mut DessertState) {
    let outcome = advance_on_click(&state.progression, &state.catalog);
    state.progression = outcome.state;
    state.click_flash = CLICK_FLASH_TICKS;

    if let Some(index) = outcome.unlocked {
        if let Some(item) = state.catalog.get(index) {
            let text = format!("New dessert: {} (${} each)!", item.name, item.price);
            state.add_log(&text, true);
        }
    }
    if outcome.leveled_up {
        state.level_flash = LEVEL_FLASH_TICKS;
        state.level_up_pending = true;
        let text = format!("Level up! Now level {}.", state.progression.level());
        state.add_log(&text, true);
    }
}

/// Advance timers by `delta_ticks` ticks (at 10 ticks/sec).
pub fn tick(state: &mut DessertState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);
    state.click_flash = state.click_flash.saturating_sub(delta_ticks);
    state.level_flash = state.level_flash.saturating_sub(delta_ticks);

    if let Some(toast) = &mut state.toast {
        toast.ticks_left = toast.ticks_left.saturating_sub(delta_ticks);
    }
    if state.toast.as_ref().is_some_and(|t| t.ticks_left == 0) {
        state.toast = None;
    }
}

/// Show a notice over the status line. A newer toast replaces the old one.
pub fn show_toast(state: &mut DessertState, text: &str) {
    state.toast = Some(Toast {
        text: text.to_string(),
        ticks_left: TOAST_TICKS,
    });
    state.add_log(text, false);
}

/// Format an integer with thousands separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_format_number_commas_at_correct_positions(n in any::<u64>()) {
            let s = format_number(n);
            let stripped: String = s.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, n.to_string());
            for group in s.split(',').skip(1) {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
