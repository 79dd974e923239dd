//! Session retention for Dessert Clicker.
//!
//! Counters and the theme flag are kept in `sessionStorage`, so a reload or
//! layout change within the same tab resumes where the player left off.
//! Closing the tab discards them.
//!
//! ## Versioning
//!
//! - `SAVE_VERSION`: current format. Bump it when a field is added.
//! - `MIN_COMPATIBLE_VERSION`: oldest format that can still be read. Bump it
//!   only when an existing field changes meaning or is removed.
//!
//! Older data at or above `MIN_COMPATIBLE_VERSION` loads with defaults for
//! missing fields.

#[cfg(any(target_arch = "wasm32", test))]
use serde::{Deserialize, Serialize};
#[cfg(any(target_arch = "wasm32", test))]
use thiserror::Error;

#[cfg(any(target_arch = "wasm32", test))]
use super::progression::ProgressionState;
#[cfg(any(target_arch = "wasm32", test))]
use super::state::DessertState;

#[cfg(any(target_arch = "wasm32", test))]
const SAVE_VERSION: u32 = 1;

#[cfg(any(target_arch = "wasm32", test))]
const MIN_COMPATIBLE_VERSION: u32 = 1;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "dessert_clicker_session";

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("malformed session data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("session version {saved} is older than the minimum {min}")]
    TooOld { saved: u32, min: u32 },
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    session: SessionSave,
}

/// Everything retained across a reload. Tap flashes and toasts are not kept.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SessionSave {
    pub total_sold: u64,
    pub total_revenue: u64,
    pub level: u32,
    pub progress: f64,
    pub dark_mode: bool,
}

#[cfg(any(target_arch = "wasm32", test))]
pub fn extract_save(state: &DessertState, dark_mode: bool) -> SessionSave {
    let p = &state.progression;
    SessionSave {
        total_sold: p.total_sold(),
        total_revenue: p.total_revenue(),
        level: p.level(),
        progress: p.progress(),
        dark_mode,
    }
}

/// Restore counters into `state`. The active dessert is re-derived, never loaded.
#[cfg(any(target_arch = "wasm32", test))]
pub fn apply_save(state: &mut DessertState, save: &SessionSave) {
    state.progression = ProgressionState::restore(
        &state.catalog,
        save.total_sold,
        save.total_revenue,
        save.level,
        save.progress,
    );
}

#[cfg(any(target_arch = "wasm32", test))]
pub fn encode(save: &SessionSave) -> Result<String, SaveError> {
    let data = SaveData {
        version: SAVE_VERSION,
        session: save.clone(),
    };
    Ok(serde_json::to_string(&data)?)
}

#[cfg(any(target_arch = "wasm32", test))]
pub fn decode(json: &str) -> Result<SessionSave, SaveError> {
    let data: SaveData = serde_json::from_str(json)?;
    if data.version < MIN_COMPATIBLE_VERSION {
        return Err(SaveError::TooOld {
            saved: data.version,
            min: MIN_COMPATIBLE_VERSION,
        });
    }
    Ok(data.session)
}

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Write the session to `sessionStorage`. Failures are logged and ignored.
#[cfg(target_arch = "wasm32")]
pub fn save_session(state: &DessertState, dark_mode: bool) {
    let json = match encode(&extract_save(state, dark_mode)) {
        Ok(j) => j,
        Err(e) => {
            web_sys::console::warn_1(&format!("Dessert Clicker: failed to encode session: {e}").into());
            return;
        }
    };

    if let Some(storage) = get_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
            web_sys::console::warn_1(
                &format!("Dessert Clicker: failed to write sessionStorage: {e:?}").into(),
            );
        }
    }
}

/// Restore a retained session into `state`.
/// Returns the saved theme flag, or `None` when there was nothing usable.
#[cfg(target_arch = "wasm32")]
pub fn load_session(state: &mut DessertState) -> Option<bool> {
    let storage = get_storage()?;
    let json = storage.get_item(STORAGE_KEY).ok()??;

    match decode(&json) {
        Ok(save) => {
            apply_save(state, &save);
            Some(save.dark_mode)
        }
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Dessert Clicker: discarding session data: {e}").into(),
            );
            let _ = storage.remove_item(STORAGE_KEY);
            None
        }
    }
}
