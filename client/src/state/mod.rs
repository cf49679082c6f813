//! Reactive UI state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `site` is provided once by the root component; `blog` and `forms` are
//! owned by the page that renders them and vanish when the page unmounts.

pub mod blog;
pub mod forms;
pub mod page;
pub mod site;
