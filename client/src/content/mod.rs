//! Static display content for every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! All copy, listings, and contact details are literal `'static` data. Pages
//! iterate these slices to build their sections; nothing here is mutated or
//! fetched at runtime.

pub mod about;
pub mod blog;
pub mod careers;
pub mod contact;
pub mod footer;
pub mod home;
pub mod services;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Company name shown in the navigation bar, footer, and splash.
pub const COMPANY_NAME: &str = "CallCenter Pro";

/// Tagline paired with the company name.
pub const COMPANY_TAGLINE: &str = "Collections & Solutions";

pub const COMPANY_PHONE: &str = "+1 (555) 123-4567";
pub const COMPANY_EMAIL: &str = "contact@callcenterpro.com";

/// A service offering with a short feature checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offering {
    pub icon: crate::components::icons::IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// A titled blurb with an icon (values, benefits, perks).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: crate::components::icons::IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline number such as "10M+ Calls Handled".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub icon: crate::components::icons::IconKind,
    pub number: &'static str,
    pub label: &'static str,
}
