//! Home page copy: core services, headline stats, and testimonials.

use super::{Offering, Stat};
use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Star rating out of five.
    pub rating: u8,
}

pub const SERVICES: &[Offering] = &[
    Offering {
        icon: IconKind::Phone,
        title: "Call Center Solutions",
        description: "24/7 professional call handling with advanced technology and trained specialists.",
        features: &[
            "Inbound/Outbound Services",
            "Multi-language Support",
            "CRM Integration",
            "Real-time Analytics",
        ],
    },
    Offering {
        icon: IconKind::CreditCard,
        title: "Bank Collections",
        description: "Compliant and effective debt recovery services with proven results.",
        features: &[
            "FDCPA Compliant",
            "Payment Processing",
            "Skip Tracing",
            "Settlement Negotiations",
        ],
    },
];

pub const STATS: &[Stat] = &[
    Stat { icon: IconKind::Phone, number: "10M+", label: "Calls Handled" },
    Stat { icon: IconKind::Star, number: "98%", label: "Client Satisfaction" },
    Stat { icon: IconKind::Clock, number: "24/7", label: "Availability" },
    Stat { icon: IconKind::Users, number: "500+", label: "Happy Clients" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        company: "First National Bank",
        role: "Operations Director",
        content: "CallCenter Pro transformed our debt recovery process. Their professional approach and compliance expertise delivered exceptional results.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        company: "TechCorp Solutions",
        role: "Customer Service Manager",
        content: "Outstanding call center services with cutting-edge technology. Response times improved by 300% since partnering with them.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        company: "Metro Credit Union",
        role: "VP Collections",
        content: "Their bank collections expertise is unmatched. Compliant, efficient, and results-driven. Highly recommended.",
        rating: 5,
    },
];

/// Trust badges under the hero call-to-action.
pub const TRUST_BADGES: &[&str] = &["FDCPA Compliant", "SOC 2 Certified", "Industry Leader"];
