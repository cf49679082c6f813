//! Site-wide chrome state (current page, theme, splash, navigation sheet).
//!
//! DESIGN
//! ======
//! Held in a single `RwSignal<SiteState>` provided by the root component so
//! pages and the navigation bar share one source of truth. Page-local state
//! such as form drafts stays inside each page and is dropped on navigation.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use super::page::Page;

/// How long the loading splash stays up after mount.
pub const SPLASH_DURATION_MS: u32 = 1500;

/// Vertical scroll offset past which the navigation bar turns opaque.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Vertical scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteState {
    pub page: Page,
    pub dark_mode: bool,
    /// `true` while the loading splash is visible.
    pub loading: bool,
    pub mobile_menu_open: bool,
    /// Last observed `window.scrollY`.
    pub scroll_y: f64,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            dark_mode: false,
            loading: true,
            mobile_menu_open: false,
            scroll_y: 0.0,
        }
    }
}

impl SiteState {
    /// Switch to `page` and close the mobile navigation sheet.
    ///
    /// Returns `true` when the page actually changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        self.mobile_menu_open = false;
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    #[must_use]
    pub fn nav_scrolled(&self) -> bool {
        self.scroll_y > NAV_SCROLLED_THRESHOLD_PX
    }

    #[must_use]
    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_y > SCROLL_TOP_THRESHOLD_PX
    }
}
