//! Top-level page selection.
//!
//! DESIGN
//! ======
//! The site renders exactly one of six content pages at a time. The current
//! page lives in memory only; it is never written to the URL or storage, so
//! a reload always lands on `Home`.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// One of the six top-level content views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Careers,
    Blog,
    Contact,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Careers,
        Page::Blog,
        Page::Contact,
    ];

    /// Stable lower-case identifier used by links and `data-page` attributes.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Careers => "careers",
            Page::Blog => "blog",
            Page::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Careers => "Careers",
            Page::Blog => "Blog",
            Page::Contact => "Contact",
        }
    }

    /// Resolve an identifier to a page. Unknown identifiers render `Home`.
    ///
    /// Parsing helper for ids coming from outside the app (URL fragments,
    /// `data-page` attributes). Page switching itself never goes through
    /// strings, so nothing in the site calls this yet.
    #[must_use]
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|page| page.id().eq_ignore_ascii_case(id.trim()))
            .unwrap_or_default()
    }
}
