use super::*;

#[test]
fn only_current_page_link_is_active() {
    assert_eq!(nav_link_class(Page::Blog, Page::Blog), "nav__link nav__link--active");
    assert_eq!(nav_link_class(Page::Home, Page::Blog), "nav__link");
}

#[test]
fn theme_toggle_label_names_the_other_theme() {
    assert_eq!(theme_toggle_label(false), "Switch to dark mode");
    assert_eq!(theme_toggle_label(true), "Switch to light mode");
}
