//! Blog page copy: categories, the featured article, and recent posts.

use crate::components::icons::IconKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogCategory {
    /// Filter slug; `"all"` matches every post.
    pub id: &'static str,
    pub label: &'static str,
    /// Count advertised on the filter chip.
    pub count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub author_role: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    /// Display label; filtered by its slug.
    pub category: &'static str,
}

pub const ALL_CATEGORY: &str = "all";

pub const CATEGORIES: &[BlogCategory] = &[
    BlogCategory { id: ALL_CATEGORY, label: "All Posts", count: 24 },
    BlogCategory { id: "industry-insights", label: "Industry Insights", count: 8 },
    BlogCategory { id: "technology", label: "Technology", count: 6 },
    BlogCategory { id: "compliance", label: "Compliance", count: 5 },
    BlogCategory { id: "customer-success", label: "Customer Success", count: 5 },
];

pub const FEATURED_POST: BlogPost = BlogPost {
    id: 1,
    title: "The Future of AI in Customer Service: 2025 Trends and Predictions",
    excerpt: "Explore how artificial intelligence is revolutionizing customer service operations and what it means for businesses in 2025 and beyond.",
    author: "Sarah Mitchell",
    author_role: "CEO",
    date: "2024-12-10",
    read_time: "8 min read",
    category: "Technology",
};

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 2,
        title: "FDCPA Compliance: Best Practices for Modern Collection Agencies",
        excerpt: "Stay compliant with the latest FDCPA regulations while maintaining effective collection strategies. Learn the do's and don'ts.",
        author: "Jennifer Adams",
        author_role: "Chief Compliance Officer",
        date: "2024-12-08",
        read_time: "6 min read",
        category: "Compliance",
    },
    BlogPost {
        id: 3,
        title: "5 Metrics Every Call Center Should Track in 2025",
        excerpt: "Discover the key performance indicators that drive success in modern call center operations and customer satisfaction.",
        author: "Michael Thompson",
        author_role: "VP of Operations",
        date: "2024-12-05",
        read_time: "5 min read",
        category: "Industry Insights",
    },
    BlogPost {
        id: 4,
        title: "Customer Retention Strategies That Actually Work",
        excerpt: "Proven techniques to reduce churn, increase customer lifetime value, and build lasting relationships with your clients.",
        author: "David Rodriguez",
        author_role: "CTO",
        date: "2024-12-03",
        read_time: "7 min read",
        category: "Customer Success",
    },
    BlogPost {
        id: 5,
        title: "The ROI of Professional Debt Collection Services",
        excerpt: "Calculate the true return on investment when partnering with professional collection agencies versus in-house operations.",
        author: "Sarah Mitchell",
        author_role: "CEO",
        date: "2024-12-01",
        read_time: "4 min read",
        category: "Industry Insights",
    },
    BlogPost {
        id: 6,
        title: "Implementing Omnichannel Support: A Complete Guide",
        excerpt: "Step-by-step guide to creating seamless customer experiences across phone, chat, email, and social media channels.",
        author: "Michael Thompson",
        author_role: "VP of Operations",
        date: "2024-11-28",
        read_time: "9 min read",
        category: "Technology",
    },
    BlogPost {
        id: 7,
        title: "Building Trust in Collections: Ethical Practices That Work",
        excerpt: "How ethical collection practices not only ensure compliance but also improve recovery rates and customer relationships.",
        author: "Jennifer Adams",
        author_role: "Chief Compliance Officer",
        date: "2024-11-25",
        read_time: "6 min read",
        category: "Compliance",
    },
];

/// Icon shown beside a post's category.
#[must_use]
pub fn category_icon(category: &str) -> IconKind {
    match crate::state::blog::category_slug(category).as_str() {
        "technology" => IconKind::Zap,
        "compliance" => IconKind::Shield,
        "industry-insights" => IconKind::TrendingUp,
        "customer-success" => IconKind::Target,
        _ => IconKind::BookOpen,
    }
}

/// Render an ISO `YYYY-MM-DD` date as `M/D/YYYY`.
///
/// Anything that does not parse is returned unchanged.
#[must_use]
pub fn display_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<u8>(), day.parse::<u8>()) else {
        return iso.to_owned();
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return iso.to_owned();
    }
    format!("{month}/{day}/{year}")
}
