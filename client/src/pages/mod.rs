//! Page modules, one per entry in `Page::ALL`.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its page-local state (filters, form drafts, expanded rows)
//! and delegates rendering details to `components`. Switching pages drops
//! that state.

pub mod about;
pub mod blog;
pub mod careers;
pub mod contact;
pub mod home;
pub mod services;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;

use crate::state::forms::{SiteForm, submission_log_line};

/// Status line shown under a form after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sent(&'static str),
    Rejected(String),
}

impl FormStatus {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Sent(text) => Some(text),
            Self::Rejected(text) => Some(text),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Idle => "form-status",
            Self::Sent(_) => "form-status form-status--ok",
            Self::Rejected(_) => "form-status form-status--error",
        }
    }
}

/// Reactive value and input callback for one named field of a form draft.
pub fn bind_field<F>(
    form: RwSignal<F>,
    field: &'static str,
    get: fn(&F) -> &str,
) -> (Signal<String>, Callback<String>)
where
    F: SiteForm + Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(f).to_owned()));
    let on_input = Callback::new(move |next: String| {
        form.update(|f| {
            if !f.set(field, next) {
                log::warn!("{} form has no field {field}", F::KIND);
            }
        });
    });
    (value, on_input)
}

/// Validate `form`, log it on success, and report the outcome.
pub fn submit_form<F: SiteForm>(form: &F, sent: &'static str) -> FormStatus {
    match submission_log_line(form) {
        Ok(line) => {
            log::info!("{line}");
            FormStatus::Sent(sent)
        }
        Err(e) => {
            log::debug!("{} form rejected: {e}", F::KIND);
            FormStatus::Rejected(capitalize_first(&e.to_string()))
        }
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
