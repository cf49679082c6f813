//! About page copy.

use super::Highlight;
use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub milestone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

/// Mission, vision, and promise statements.
pub const PILLARS: &[Highlight] = &[
    Highlight {
        icon: IconKind::Target,
        title: "Our Mission",
        description: "To deliver exceptional customer experiences and compliant debt recovery solutions through innovative technology, expert teams, and unwavering commitment to excellence.",
    },
    Highlight {
        icon: IconKind::Eye,
        title: "Our Vision",
        description: "To be the global leader in customer operations, setting industry standards for innovation, compliance, and client satisfaction across all service verticals.",
    },
    Highlight {
        icon: IconKind::Award,
        title: "Our Promise",
        description: "To provide transparent, reliable, and results-driven solutions that help our clients achieve their business objectives while maintaining the highest ethical standards.",
    },
];

pub const VALUES: &[Highlight] = &[
    Highlight {
        icon: IconKind::Shield,
        title: "Integrity & Compliance",
        description: "We operate with unwavering integrity, ensuring full compliance with all industry regulations and ethical standards.",
    },
    Highlight {
        icon: IconKind::Users,
        title: "Client-Centric Approach",
        description: "Our clients' success is our success. We tailor every solution to meet specific business needs and objectives.",
    },
    Highlight {
        icon: IconKind::Zap,
        title: "Innovation & Technology",
        description: "We leverage cutting-edge technology and innovative approaches to deliver superior results and experiences.",
    },
    Highlight {
        icon: IconKind::Award,
        title: "Excellence in Service",
        description: "We strive for excellence in every interaction, maintaining the highest standards of professional service.",
    },
];

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2015",
        title: "Company Founded",
        description: "Started as a small call center with 5 employees and a vision to transform customer service.",
        milestone: "5 Employees",
    },
    Milestone {
        year: "2017",
        title: "First Major Contract",
        description: "Secured our first banking client, marking our entry into the financial services sector.",
        milestone: "50+ Clients",
    },
    Milestone {
        year: "2019",
        title: "Technology Innovation",
        description: "Launched our proprietary AI-powered call routing and analytics platform.",
        milestone: "1M+ Calls",
    },
    Milestone {
        year: "2021",
        title: "Market Expansion",
        description: "Expanded operations to serve clients across multiple states with 24/7 coverage.",
        milestone: "200+ Employees",
    },
    Milestone {
        year: "2023",
        title: "Industry Recognition",
        description: "Received multiple industry awards for excellence in customer service and compliance.",
        milestone: "500+ Clients",
    },
    Milestone {
        year: "2024",
        title: "Future Ready",
        description: "Launched next-generation AI and automation capabilities for enhanced efficiency.",
        milestone: "10M+ Calls",
    },
];

pub const LEADERSHIP: &[Leader] = &[
    Leader {
        name: "Sarah Mitchell",
        role: "Chief Executive Officer",
        bio: "20+ years of experience in financial services and customer operations. Led multiple successful digital transformations.",
    },
    Leader {
        name: "David Rodriguez",
        role: "Chief Technology Officer",
        bio: "Former tech executive from Fortune 500 companies. Expert in AI, automation, and scalable technology solutions.",
    },
    Leader {
        name: "Jennifer Adams",
        role: "Chief Compliance Officer",
        bio: "Former federal regulator with deep expertise in FDCPA, TCPA, and financial services compliance.",
    },
    Leader {
        name: "Michael Thompson",
        role: "VP of Operations",
        bio: "15+ years in call center operations and process optimization. Specialist in quality assurance and team development.",
    },
];
