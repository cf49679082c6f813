use super::*;

fn filled_contact() -> ContactForm {
    ContactForm {
        name: "Dana Cruz".to_owned(),
        email: "dana@acme.com".to_owned(),
        message: "We need overflow coverage.".to_owned(),
        ..ContactForm::default()
    }
}

fn filled_application() -> ApplicationForm {
    ApplicationForm {
        name: "Lee Park".to_owned(),
        email: "lee@example.org".to_owned(),
        phone: "(555) 987-6543".to_owned(),
        position: "Data Analyst".to_owned(),
        experience: "3 years".to_owned(),
        cover_letter: "I like dashboards.".to_owned(),
    }
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn empty_contact_form_reports_required_fields_in_order() {
    let form = ContactForm::default();
    assert_eq!(form.missing_required(), vec!["name", "email", "message"]);
    assert_eq!(
        form.validate(),
        Err(FormError::MissingFields(vec!["name", "email", "message"]))
    );
}

#[test]
fn contact_optional_fields_may_stay_blank() {
    assert_eq!(filled_contact().validate(), Ok(()));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let mut form = filled_contact();
    form.message = "   \n".to_owned();
    assert_eq!(form.missing_required(), vec!["message"]);
}

#[test]
fn application_requires_every_field() {
    let mut form = filled_application();
    assert_eq!(form.validate(), Ok(()));
    form.cover_letter.clear();
    form.phone.clear();
    assert_eq!(form.validate(), Err(FormError::MissingFields(vec!["phone", "coverLetter"])));
}

#[test]
fn invalid_email_is_rejected_after_required_check() {
    let mut form = filled_contact();
    form.email = "dana-at-acme".to_owned();
    assert_eq!(form.validate(), Err(FormError::InvalidEmail));
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn set_updates_named_fields() {
    let mut form = ContactForm::default();
    assert!(form.set("contactMethod", "phone".to_owned()));
    assert!(form.set("timeline", "short".to_owned()));
    assert_eq!(form.contact_method, "phone");
    assert_eq!(form.timeline, "short");
}

#[test]
fn set_ignores_unknown_fields() {
    let mut form = ApplicationForm::default();
    assert!(!form.set("salary", "lots".to_owned()));
    assert_eq!(form, ApplicationForm::default());
}

// =============================================================
// Email check
// =============================================================

#[test]
fn plausible_emails() {
    assert!(is_plausible_email("a@b.co"));
    assert!(is_plausible_email("  first.last@mail.example.com "));
}

#[test]
fn implausible_emails() {
    for raw in ["", "plain", "@b.com", "a@", "a@b", "a@.com", "a@b.", "a b@c.com", "a@b@c.com", "a@b..c", "a@mail..example.com"] {
        assert!(!is_plausible_email(raw), "accepted {raw:?}");
    }
}

// =============================================================
// Submission log
// =============================================================

#[test]
fn submission_log_line_serializes_camel_case_payload() {
    let line = submission_log_line(&filled_application()).expect("filled form should validate");
    assert!(line.starts_with("application form submitted: {"));
    assert!(line.contains("\"coverLetter\":\"I like dashboards.\""));
}

#[test]
fn submission_log_line_refuses_incomplete_form() {
    assert!(submission_log_line(&ContactForm::default()).is_err());
}

#[test]
fn form_error_messages_name_fields() {
    let err = FormError::MissingFields(vec!["name", "email"]);
    assert_eq!(err.to_string(), "please fill in: name, email");
}
