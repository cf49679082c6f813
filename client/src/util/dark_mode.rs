//! Persisted light/dark theme.
//!
//! The flag lives in `localStorage` under [`STORAGE_KEY`] as a JSON boolean
//! and is mirrored onto `<html>` as the [`THEME_CLASS`] class, which the
//! stylesheet keys its dark palette off.
//!
//! Storage failures (private mode, quota) only cost persistence; the toggle
//! still applies for the current visit.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// `localStorage` key holding the JSON-encoded flag.
pub const STORAGE_KEY: &str = "darkMode";

/// Class toggled on `<html>` while dark mode is on.
pub const THEME_CLASS: &str = "dark";

/// Decode a stored flag. Anything other than a JSON boolean is ignored.
#[must_use]
pub fn parse_stored(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw.trim()).ok()
}

/// Encode a flag for storage.
#[must_use]
pub fn encode(enabled: bool) -> String {
    serde_json::Value::Bool(enabled).to_string()
}

/// Stored preference, or `false` when nothing usable is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| parse_stored(&raw))
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the theme class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.class_list().toggle_with_force(THEME_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Persist the flag to localStorage.
pub fn persist(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, &encode(enabled)).is_err() {
                log::warn!("dark mode preference could not be saved");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it to the page, and store it. Returns the new flag.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(next);
    next
}
