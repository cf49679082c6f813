//! Footer link columns, social links, and certifications.

use crate::components::icons::IconKind;
use crate::state::page::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub page: Page,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub href: &'static str,
    pub label: &'static str,
}

pub const BLURB: &str =
    "Leading provider of professional call center solutions and compliant debt collection services.";

pub const SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Services",
        links: &[
            FooterLink { label: "Call Center Solutions", page: Page::Services },
            FooterLink { label: "Bank Collections", page: Page::Services },
            FooterLink { label: "Customer Support", page: Page::Services },
        ],
    },
    FooterSection {
        title: "Company",
        links: &[
            FooterLink { label: "About Us", page: Page::About },
            FooterLink { label: "Careers", page: Page::Careers },
            FooterLink { label: "Contact", page: Page::Contact },
        ],
    },
    FooterSection {
        title: "Resources",
        links: &[
            FooterLink { label: "Industry Insights", page: Page::Blog },
            FooterLink { label: "Case Studies", page: Page::Blog },
            FooterLink { label: "Help Center", page: Page::Contact },
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: IconKind::Facebook, href: "#", label: "Facebook" },
    SocialLink { icon: IconKind::Twitter, href: "#", label: "Twitter" },
    SocialLink { icon: IconKind::Linkedin, href: "#", label: "LinkedIn" },
    SocialLink { icon: IconKind::Instagram, href: "#", label: "Instagram" },
];

pub const CERTIFICATIONS: &[(IconKind, &str)] = &[
    (IconKind::Shield, "SOC 2 Certified"),
    (IconKind::CheckCircle, "FDCPA Compliant"),
    (IconKind::Award, "Industry Leader"),
];

/// Headline numbers in the footer bar.
pub const FOOTER_STATS: &[(&str, &str)] = &[("500+", "Clients"), ("10M+", "Calls"), ("24/7", "Support")];

pub const LEGAL_LINKS: &[&str] = &["Privacy", "Terms", "Cookies"];

pub const COPYRIGHT: &str = "© 2024 CallCenter Pro. All rights reserved.";
pub const REGION: &str = "United States";
