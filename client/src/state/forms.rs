//! Contact and job-application form drafts.
//!
//! DESIGN
//! ======
//! Each form is a flat record of strings owned by its page and dropped on
//! navigation. Submitting validates the required fields and hands the
//! serialized record to the console log; nothing leaves the browser.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

/// Why a form submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// One or more required fields are blank.
    #[error("please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The email field does not look like an address.
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Shared behavior of the two site forms.
pub trait SiteForm: Serialize {
    /// Name used in the console log line.
    const KIND: &'static str;

    /// `(field, value)` pairs for every required field.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    fn email(&self) -> &str;

    /// Update a field by its form name. Unknown names are ignored and
    /// reported as `false`.
    fn set(&mut self, field: &str, value: String) -> bool;

    /// Required fields that are blank after trimming, in form order.
    fn missing_required(&self) -> Vec<&'static str> {
        self.required_fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `MissingFields` when any required field is blank, otherwise
    /// `InvalidEmail` when the email fails `is_plausible_email`.
    fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        if !is_plausible_email(self.email()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub contact_method: String,
    pub timeline: String,
}

impl SiteForm for ContactForm {
    const KIND: &'static str = "contact";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", self.name.as_str()), ("email", self.email.as_str()), ("message", self.message.as_str())]
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "company" => &mut self.company,
            "phone" => &mut self.phone,
            "service" => &mut self.service,
            "message" => &mut self.message,
            "contactMethod" => &mut self.contact_method,
            "timeline" => &mut self.timeline,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub cover_letter: String,
}

impl SiteForm for ApplicationForm {
    const KIND: &'static str = "application";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("position", self.position.as_str()),
            ("experience", self.experience.as_str()),
            ("coverLetter", self.cover_letter.as_str()),
        ]
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "position" => &mut self.position,
            "experience" => &mut self.experience,
            "coverLetter" => &mut self.cover_letter,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Loose `type=email` check: `local@domain.tld` with no whitespace and no
/// empty domain labels.
#[must_use]
pub fn is_plausible_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Validate `form` and, when it passes, return the console log line for it.
///
/// # Errors
///
/// Propagates the validation failure from [`SiteForm::validate`].
pub fn submission_log_line<F: SiteForm>(form: &F) -> Result<String, FormError> {
    form.validate()?;
    let payload = serde_json::to_string(form).unwrap_or_else(|_| "{}".to_owned());
    Ok(format!("{} form submitted: {payload}", F::KIND))
}
