//! Careers page copy: open positions, perks, and culture.

use super::Highlight;
use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub salary: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CulturePoint {
    pub title: &'static str,
    pub description: &'static str,
}

pub const JOBS: &[Job] = &[
    Job {
        id: 1,
        title: "Senior Call Center Agent",
        department: "Operations",
        location: "Remote / New York",
        employment_type: "Full-time",
        salary: "$45,000 - $55,000",
        experience: "2+ years",
        description: "Join our dynamic team as a Senior Call Center Agent and help deliver exceptional customer experiences. You'll handle inbound customer inquiries, provide technical support, and mentor junior team members.",
        requirements: &[
            "2+ years of call center experience",
            "Excellent communication skills",
            "Customer service oriented mindset",
            "Basic computer proficiency",
            "High school diploma or equivalent",
        ],
        benefits: &[
            "Competitive salary with performance bonuses",
            "Comprehensive health insurance",
            "Remote work flexibility",
            "Professional development opportunities",
            "Paid time off and holidays",
        ],
    },
    Job {
        id: 2,
        title: "Collections Specialist",
        department: "Collections",
        location: "Chicago, IL",
        employment_type: "Full-time",
        salary: "$50,000 - $65,000",
        experience: "3+ years",
        description: "We're seeking an experienced Collections Specialist to join our growing team. You'll work with clients to resolve outstanding accounts while maintaining compliance with all regulations.",
        requirements: &[
            "3+ years of collections experience",
            "Knowledge of FDCPA regulations",
            "Strong negotiation skills",
            "Attention to detail",
            "Bachelor's degree preferred",
        ],
        benefits: &[
            "Competitive base salary plus commission",
            "Health, dental, and vision insurance",
            "401(k) with company matching",
            "Career advancement opportunities",
            "Continuing education support",
        ],
    },
    Job {
        id: 3,
        title: "Customer Success Manager",
        department: "Account Management",
        location: "Los Angeles, CA",
        employment_type: "Full-time",
        salary: "$65,000 - $80,000",
        experience: "4+ years",
        description: "Drive customer satisfaction and retention as a Customer Success Manager. You'll work closely with enterprise clients to ensure they achieve their goals with our services.",
        requirements: &[
            "4+ years in customer success or account management",
            "Experience with enterprise clients",
            "Strong analytical and communication skills",
            "CRM software proficiency",
            "Bachelor's degree required",
        ],
        benefits: &[
            "Competitive salary with bonus potential",
            "Comprehensive benefits package",
            "Stock options",
            "Flexible work arrangements",
            "Professional development budget",
        ],
    },
    Job {
        id: 4,
        title: "Data Analyst",
        department: "Analytics",
        location: "Remote",
        employment_type: "Full-time",
        salary: "$60,000 - $75,000",
        experience: "2+ years",
        description: "Join our analytics team to help drive data-driven decisions across the organization. You'll analyze call center metrics, collection performance, and client satisfaction data.",
        requirements: &[
            "2+ years of data analysis experience",
            "Proficiency in SQL and Python",
            "Experience with data visualization tools",
            "Strong statistical analysis skills",
            "Bachelor's degree in related field",
        ],
        benefits: &[
            "Competitive salary",
            "Remote work options",
            "Latest technology and tools",
            "Learning and development opportunities",
            "Collaborative team environment",
        ],
    },
];

pub const PERKS: &[Highlight] = &[
    Highlight {
        icon: IconKind::Heart,
        title: "Health & Wellness",
        description: "Comprehensive health, dental, and vision insurance plus wellness programs.",
    },
    Highlight {
        icon: IconKind::DollarSign,
        title: "Competitive Compensation",
        description: "Fair wages, performance bonuses, and stock options for eligible positions.",
    },
    Highlight {
        icon: IconKind::GraduationCap,
        title: "Learning & Development",
        description: "Continuous learning opportunities, training programs, and tuition reimbursement.",
    },
    Highlight {
        icon: IconKind::Coffee,
        title: "Work-Life Balance",
        description: "Flexible schedules, remote work options, and generous PTO policies.",
    },
    Highlight {
        icon: IconKind::Plane,
        title: "Time Off",
        description: "Paid vacation, sick leave, holidays, and sabbatical opportunities.",
    },
    Highlight {
        icon: IconKind::Gamepad,
        title: "Fun Environment",
        description: "Team events, office perks, game rooms, and a positive company culture.",
    },
];

pub const CULTURE: &[CulturePoint] = &[
    CulturePoint {
        title: "Innovation First",
        description: "We embrace new technologies and creative solutions to stay ahead of the curve.",
    },
    CulturePoint {
        title: "Team Collaboration",
        description: "Success comes from working together, sharing knowledge, and supporting each other.",
    },
    CulturePoint {
        title: "Client Success",
        description: "Our clients' success drives everything we do, from strategy to execution.",
    },
    CulturePoint {
        title: "Continuous Growth",
        description: "We invest in our people's growth and provide opportunities for career advancement.",
    },
];

/// Look up a job listing by id.
#[must_use]
pub fn job_by_id(id: u32) -> Option<&'static Job> {
    JOBS.iter().find(|job| job.id == id)
}
