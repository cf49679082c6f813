use super::*;
use crate::state::forms::SiteForm;

#[test]
fn hero_features_the_first_two_channels() {
    let featured: Vec<_> = CONTACT_METHODS.iter().take(HERO_METHODS).map(|m| m.title).collect();
    assert_eq!(featured, vec!["Phone Support", "Email Support"]);
}

#[test]
fn select_values_are_accepted_by_the_form() {
    let mut form = ContactForm::default();
    assert!(form.set("service", SERVICE_OPTIONS[2].value.to_owned()));
    assert!(form.set("timeline", TIMELINE_OPTIONS[0].value.to_owned()));
    assert_eq!(form.service, "both");
    assert_eq!(form.timeline, "immediate");
}

#[test]
fn submit_requires_message_even_with_selects_filled() {
    let form = ContactForm {
        name: "Kim".to_owned(),
        email: "kim@example.com".to_owned(),
        service: "collections".to_owned(),
        ..ContactForm::default()
    };
    assert_eq!(
        submit_form(&form, SENT_MESSAGE),
        FormStatus::Rejected("Please fill in: message".to_owned())
    );
}
