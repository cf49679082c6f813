use super::*;
use crate::state::forms::{ApplicationForm, ContactForm};

#[test]
fn idle_status_has_no_message() {
    assert_eq!(FormStatus::Idle.message(), None);
    assert_eq!(FormStatus::Idle.class(), "form-status");
}

#[test]
fn rejected_submit_reports_missing_fields() {
    let status = submit_form(&ContactForm::default(), "sent");
    assert_eq!(status, FormStatus::Rejected("Please fill in: name, email, message".to_owned()));
    assert_eq!(status.class(), "form-status form-status--error");
}

#[test]
fn accepted_submit_uses_sent_message() {
    let form = ApplicationForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "555".to_owned(),
        position: "Team Lead".to_owned(),
        experience: "5 years".to_owned(),
        cover_letter: "Hello".to_owned(),
    };
    let status = submit_form(&form, "Application received.");
    assert_eq!(status.message(), Some("Application received."));
}

#[test]
fn capitalize_first_handles_empty_text() {
    assert_eq!(capitalize_first(""), "");
    assert_eq!(capitalize_first("please"), "Please");
}
