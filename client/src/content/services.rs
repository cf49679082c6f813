//! Services page copy.

use super::{Highlight, Offering};
use crate::components::icons::IconKind;

/// An industry vertical with the sectors served inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Industry {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub sectors: &'static [&'static str],
}

/// A measurable outcome, shown with its headline metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
}

/// The two service lines summarized in the hero.
pub const SERVICE_LINES: &[Highlight] = &[
    Highlight {
        icon: IconKind::Headphones,
        title: "Call Center Solutions",
        description: "Professional customer service and sales support with cutting-edge technology.",
    },
    Highlight {
        icon: IconKind::CreditCard,
        title: "Bank Collections",
        description: "Compliant debt recovery services with proven results and regulatory expertise.",
    },
];

pub const CALL_CENTER_SERVICES: &[Offering] = &[
    Offering {
        icon: IconKind::Headphones,
        title: "Inbound Call Handling",
        description: "Professional customer service representatives handling your incoming calls 24/7.",
        features: &["Customer Support", "Order Processing", "Technical Help Desk", "Appointment Scheduling"],
    },
    Offering {
        icon: IconKind::Phone,
        title: "Outbound Campaign Management",
        description: "Strategic outbound calling campaigns to drive sales and customer engagement.",
        features: &["Lead Generation", "Sales Calls", "Customer Surveys", "Follow-up Campaigns"],
    },
    Offering {
        icon: IconKind::MessageSquare,
        title: "Omnichannel Support",
        description: "Seamless customer experience across phone, chat, email, and social media.",
        features: &["Live Chat Support", "Email Management", "Social Media Response", "SMS Support"],
    },
    Offering {
        icon: IconKind::BarChart,
        title: "Analytics & Reporting",
        description: "Real-time insights and detailed reporting to optimize your customer operations.",
        features: &["Call Analytics", "Performance Metrics", "Custom Dashboards", "ROI Tracking"],
    },
];

pub const COLLECTION_SERVICES: &[Offering] = &[
    Offering {
        icon: IconKind::CreditCard,
        title: "First-Party Collections",
        description: "Early-stage collection efforts to maximize recovery while preserving customer relationships.",
        features: &["30-90 Day Accounts", "Payment Plans", "Customer Retention", "Compliance Monitoring"],
    },
    Offering {
        icon: IconKind::FileText,
        title: "Third-Party Collections",
        description: "Professional debt recovery services for aged accounts with proven results.",
        features: &["90+ Day Accounts", "Legal Compliance", "Settlement Options", "Detailed Reporting"],
    },
    Offering {
        icon: IconKind::Search,
        title: "Skip Tracing Services",
        description: "Advanced technology and investigative techniques to locate hard-to-find debtors.",
        features: &["Data Mining", "Address Verification", "Contact Discovery", "Digital Forensics"],
    },
    Offering {
        icon: IconKind::DollarSign,
        title: "Payment Processing",
        description: "Secure payment collection and processing with multiple payment options.",
        features: &["Online Payments", "Phone Payments", "Payment Plans", "PCI Compliance"],
    },
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        icon: IconKind::Building,
        title: "Banking & Financial Services",
        description: "Specialized solutions for banks, credit unions, and financial institutions.",
        sectors: &["Commercial Banking", "Credit Cards", "Personal Loans", "Mortgages"],
    },
    Industry {
        icon: IconKind::Smartphone,
        title: "Telecommunications",
        description: "Customer service and collections for telecom and wireless providers.",
        sectors: &["Mobile Carriers", "Internet Providers", "Cable Companies", "VoIP Services"],
    },
    Industry {
        icon: IconKind::Target,
        title: "Healthcare",
        description: "HIPAA-compliant solutions for healthcare providers and medical billing.",
        sectors: &["Hospitals", "Medical Practices", "Insurance", "Medical Billing"],
    },
    Industry {
        icon: IconKind::Globe,
        title: "E-commerce & Retail",
        description: "Customer support and order management for online and retail businesses.",
        sectors: &["Online Stores", "Subscription Services", "Marketplace Sellers", "Retail Chains"],
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: IconKind::TrendingUp,
        title: "Increased Recovery Rates",
        description: "Our proven strategies deliver 25-40% higher recovery rates than industry average.",
        metric: "40% Higher Recovery",
    },
    Benefit {
        icon: IconKind::Clock,
        title: "Faster Response Times",
        description: "Average response time under 30 seconds with 24/7 availability.",
        metric: "<30 Sec Response",
    },
    Benefit {
        icon: IconKind::Shield,
        title: "100% Compliance",
        description: "Full compliance with FDCPA, TCPA, and all relevant regulations.",
        metric: "Zero Violations",
    },
    Benefit {
        icon: IconKind::Users,
        title: "Customer Satisfaction",
        description: "98% client satisfaction rate with dedicated account management.",
        metric: "98% Satisfaction",
    },
];
