//! Inline SVG icon set (24x24, stroked).
//!
//! Icons render as `currentColor` strokes so they pick up the surrounding
//! text color in both themes.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    ArrowRight,
    ArrowUp,
    Award,
    BarChart,
    BookOpen,
    Briefcase,
    Building,
    Calendar,
    CheckCircle,
    Clock,
    Coffee,
    CreditCard,
    DollarSign,
    Eye,
    Facebook,
    FileText,
    Filter,
    Gamepad,
    Globe,
    GraduationCap,
    Headphones,
    Heart,
    Instagram,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageSquare,
    Moon,
    Phone,
    Plane,
    Search,
    Send,
    Shield,
    Smartphone,
    Star,
    Sun,
    Target,
    TrendingUp,
    Twitter,
    User,
    Users,
    X,
    Zap,
}

impl IconKind {
    pub const ALL: [IconKind; 44] = [
        IconKind::ArrowRight,
        IconKind::ArrowUp,
        IconKind::Award,
        IconKind::BarChart,
        IconKind::BookOpen,
        IconKind::Briefcase,
        IconKind::Building,
        IconKind::Calendar,
        IconKind::CheckCircle,
        IconKind::Clock,
        IconKind::Coffee,
        IconKind::CreditCard,
        IconKind::DollarSign,
        IconKind::Eye,
        IconKind::Facebook,
        IconKind::FileText,
        IconKind::Filter,
        IconKind::Gamepad,
        IconKind::Globe,
        IconKind::GraduationCap,
        IconKind::Headphones,
        IconKind::Heart,
        IconKind::Instagram,
        IconKind::Linkedin,
        IconKind::Mail,
        IconKind::MapPin,
        IconKind::Menu,
        IconKind::MessageSquare,
        IconKind::Moon,
        IconKind::Phone,
        IconKind::Plane,
        IconKind::Search,
        IconKind::Send,
        IconKind::Shield,
        IconKind::Smartphone,
        IconKind::Star,
        IconKind::Sun,
        IconKind::Target,
        IconKind::TrendingUp,
        IconKind::Twitter,
        IconKind::User,
        IconKind::Users,
        IconKind::X,
        IconKind::Zap,
    ];

    /// SVG path data, drawn in order.
    #[must_use]
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::ArrowUp => &["M12 19V5", "m5 12 7-7 7 7"],
            IconKind::Award => &["M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12z", "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"],
            IconKind::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            IconKind::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            IconKind::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            IconKind::Building => &[
                "M6 2h12a2 2 0 0 1 2 2v18H4V4a2 2 0 0 1 2-2z",
                "M9 22v-4h6v4",
                "M8 6h.01M12 6h.01M16 6h.01M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M16 14h.01",
            ],
            IconKind::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            IconKind::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            IconKind::Clock => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 6v6l4 2"],
            IconKind::Coffee => &[
                "M17 8h1a4 4 0 1 1 0 8h-1",
                "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4z",
                "M6 2v2M10 2v2M14 2v2",
            ],
            IconKind::CreditCard => &[
                "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
                "M2 10h20",
            ],
            IconKind::DollarSign => &["M12 2v20", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
            IconKind::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
                "M12 9a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
            IconKind::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            IconKind::FileText => &[
                "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5z",
                "M14 2v6h6",
                "M16 13H8M16 17H8M10 9H8",
            ],
            IconKind::Filter => &["M22 3H2l8 9.46V19l4 2v-8.54z"],
            IconKind::Gamepad => &[
                "M6 11h4M8 9v4",
                "M15 12h.01M18 10h.01",
                "M17.32 5H6.68a4 4 0 0 0-3.98 3.59C2.6 9.42 2 14.46 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.41-1.41A2 2 0 0 1 9.83 16h4.34a2 2 0 0 1 1.41.59L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.55-.6-6.58-.69-7.26A4 4 0 0 0 17.32 5z",
            ],
            IconKind::Globe => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            IconKind::GraduationCap => &["M22 10v6", "M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"],
            IconKind::Headphones => &[
                "M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3",
            ],
            IconKind::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            IconKind::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::Plane => &[
                "M17.8 19.2 16 11l3.5-3.5C21 6 21.5 4 21 3c-1-.5-3 0-4.5 1.5L13 8 4.8 6.2c-.5-.1-.9.1-1.1.5l-.3.5c-.2.5-.1 1 .3 1.3L9 12l-2 3H4l-1 1 3 2 2 3 1-1v-3l3-2 3.5 5.3c.3.4.8.5 1.3.3l.5-.2c.4-.3.6-.7.5-1.2z",
            ],
            IconKind::Search => &["M11 3a8 8 0 1 0 0 16 8 8 0 1 0 0-16z", "m21 21-4.3-4.3"],
            IconKind::Send => &["m22 2-7 20-4-9-9-4z", "M22 2 11 13"],
            IconKind::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            IconKind::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            IconKind::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z",
            ],
            IconKind::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M12 2v2M12 20v2M2 12h2M20 12h2",
                "m4.93 4.93 1.41 1.41m11.32 11.32 1.41 1.41m-14.14 0 1.41-1.41m11.32-11.32 1.41-1.41",
            ],
            IconKind::Target => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z",
                "M12 6a6 6 0 1 0 0 12 6 6 0 1 0 0-12z",
                "M12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            IconKind::TrendingUp => &["m22 7-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            IconKind::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconKind::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z"],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::X => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9z"],
        }
    }
}

/// Render an icon. `class` is appended to the base `icon` class.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
