use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn site_state_starts_on_home_with_splash() {
    let state = SiteState::default();
    assert_eq!(state.page, Page::Home);
    assert!(state.loading);
    assert!(!state.dark_mode);
    assert!(!state.mobile_menu_open);
    assert_eq!(state.scroll_y, 0.0);
}

#[test]
fn splash_duration_is_one_and_a_half_seconds() {
    assert_eq!(SPLASH_DURATION_MS, 1500);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_switches_page_and_closes_menu() {
    let mut state = SiteState { mobile_menu_open: true, ..SiteState::default() };
    assert!(state.navigate(Page::Careers));
    assert_eq!(state.page, Page::Careers);
    assert!(!state.mobile_menu_open);
}

#[test]
fn navigate_to_current_page_reports_no_change() {
    let mut state = SiteState { page: Page::Blog, mobile_menu_open: true, ..SiteState::default() };
    assert!(!state.navigate(Page::Blog));
    assert_eq!(state.page, Page::Blog);
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Scroll thresholds
// =============================================================

#[test]
fn nav_scrolled_only_past_threshold() {
    let mut state = SiteState::default();
    state.scroll_y = 20.0;
    assert!(!state.nav_scrolled());
    state.scroll_y = 20.5;
    assert!(state.nav_scrolled());
}

#[test]
fn scroll_top_button_visible_only_past_threshold() {
    let mut state = SiteState::default();
    state.scroll_y = 500.0;
    assert!(!state.scroll_top_visible());
    state.scroll_y = 501.0;
    assert!(state.scroll_top_visible());
}
