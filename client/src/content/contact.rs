//! Contact page copy: offices, contact channels, FAQs, and form options.

use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Office {
    pub city: &'static str,
    pub address: &'static str,
    pub locality: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
    pub available: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A `<select>` option: submitted value and visible label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const OFFICES: &[Office] = &[
    Office {
        city: "New York",
        address: "123 Business Plaza, Suite 500",
        locality: "New York, NY 10001",
        phone: "+1 (555) 123-4567",
        email: "ny@callcenterpro.com",
        hours: "Mon-Fri: 8:00 AM - 8:00 PM EST",
    },
    Office {
        city: "Chicago",
        address: "456 Corporate Drive, Floor 12",
        locality: "Chicago, IL 60601",
        phone: "+1 (555) 234-5678",
        email: "chicago@callcenterpro.com",
        hours: "Mon-Fri: 7:00 AM - 7:00 PM CST",
    },
    Office {
        city: "Los Angeles",
        address: "789 Innovation Center, Building A",
        locality: "Los Angeles, CA 90210",
        phone: "+1 (555) 345-6789",
        email: "la@callcenterpro.com",
        hours: "Mon-Fri: 6:00 AM - 6:00 PM PST",
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: IconKind::Phone,
        title: "Phone Support",
        description: "Speak with our experts immediately",
        contact: "+1 (555) 123-4567",
        available: "24/7 Support Available",
    },
    ContactMethod {
        icon: IconKind::Mail,
        title: "Email Support",
        description: "Get detailed responses within 2 hours",
        contact: "contact@callcenterpro.com",
        available: "Response within 2 hours",
    },
    ContactMethod {
        icon: IconKind::MessageSquare,
        title: "Live Chat",
        description: "Real-time assistance with our team",
        contact: "Start Chat",
        available: "Available 24/7",
    },
    ContactMethod {
        icon: IconKind::Calendar,
        title: "Schedule Meeting",
        description: "Book a consultation at your convenience",
        contact: "Book Now",
        available: "Flexible scheduling",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What industries do you serve?",
        answer: "We serve banking, telecommunications, healthcare, e-commerce, and many other industries with specialized solutions.",
    },
    Faq {
        question: "How quickly can you start services?",
        answer: "We can typically begin services within 2-4 weeks, depending on the complexity and scope of your requirements.",
    },
    Faq {
        question: "Do you offer 24/7 support?",
        answer: "Yes, we provide 24/7 customer support and call center services to ensure your business never misses an opportunity.",
    },
    Faq {
        question: "Are your services FDCPA compliant?",
        answer: "Absolutely. All our collection services are fully compliant with FDCPA, TCPA, and other relevant regulations.",
    },
];

pub const SERVICE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "call-center", label: "Call Center Solutions" },
    SelectOption { value: "collections", label: "Bank Collections" },
    SelectOption { value: "both", label: "Both Services" },
    SelectOption { value: "consultation", label: "General Consultation" },
];

pub const TIMELINE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "immediate", label: "Immediate (Within 30 days)" },
    SelectOption { value: "short", label: "1-3 months" },
    SelectOption { value: "medium", label: "3-6 months" },
    SelectOption { value: "long", label: "6+ months" },
    SelectOption { value: "planning", label: "Just planning ahead" },
];

/// Day range and opening hours.
pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "8:00 AM - 8:00 PM EST"),
    ("Saturday", "9:00 AM - 5:00 PM EST"),
    ("Sunday", "Emergency Support Only"),
];

/// Selling points listed beside the contact form.
pub const REASONS: &[(&str, &str)] = &[
    ("Proven Results", "25-40% higher recovery rates than industry average"),
    ("100% Compliant", "Full compliance with all regulations"),
    ("24/7 Support", "Round-the-clock availability"),
    ("Expert Team", "500+ experienced professionals"),
];

/// Map search link for an office's street address.
#[must_use]
pub fn directions_url(office: &Office) -> String {
    let query = office
        .address
        .split(|c: char| !c.is_ascii_alphanumeric())
        .chain(office.locality.split(|c: char| !c.is_ascii_alphanumeric()))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("+");
    format!("https://www.google.com/maps/search/?api=1&query={query}")
}

/// `tel:` link target with formatting characters stripped.
#[must_use]
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    format!("tel:{digits}")
}
