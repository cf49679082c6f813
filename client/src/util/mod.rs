//! Browser helpers for theme persistence and window scrolling.
//!
//! Everything here degrades to a no-op without the `hydrate` feature, so
//! SSR and native tests never touch `web_sys`.

pub mod dark_mode;
pub mod scroll;
