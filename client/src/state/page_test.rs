use super::*;

#[test]
fn page_default_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn all_pages_are_in_navigation_order() {
    let ids: Vec<_> = Page::ALL.iter().map(|p| p.id()).collect();
    assert_eq!(ids, ["home", "about", "services", "careers", "blog", "contact"]);
}

#[test]
fn from_id_round_trips_every_page() {
    for page in Page::ALL {
        assert_eq!(Page::from_id(page.id()), page);
    }
}

#[test]
fn from_id_ignores_case_and_whitespace() {
    assert_eq!(Page::from_id(" Careers "), Page::Careers);
    assert_eq!(Page::from_id("BLOG"), Page::Blog);
}

#[test]
fn from_id_unknown_falls_back_to_home() {
    assert_eq!(Page::from_id("pricing"), Page::Home);
    assert_eq!(Page::from_id(""), Page::Home);
}

#[test]
fn labels_are_title_case() {
    assert_eq!(Page::About.label(), "About");
    assert_eq!(Page::Contact.label(), "Contact");
}
