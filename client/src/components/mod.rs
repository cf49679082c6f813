//! Site chrome and shared layout primitives.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome components (navigation, footer, splash, scroll button) read and
//! write the `SiteState` signal from context. `ui` and `icons` are
//! stateless and shared by every page.

pub mod background;
pub mod footer;
pub mod icons;
pub mod loading_splash;
pub mod navigation;
pub mod scroll_top;
pub mod ui;
