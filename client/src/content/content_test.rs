use std::collections::HashSet;

use super::*;
use crate::components::icons::IconKind;
use crate::state::blog::category_slug;
use crate::state::page::Page;

// =============================================================
// Blog
// =============================================================

#[test]
fn first_blog_category_is_all() {
    assert_eq!(blog::CATEGORIES[0].id, blog::ALL_CATEGORY);
}

#[test]
fn every_post_category_has_a_filter_chip() {
    let ids: HashSet<_> = blog::CATEGORIES.iter().map(|c| c.id).collect();
    for post in blog::POSTS.iter().chain(std::iter::once(&blog::FEATURED_POST)) {
        assert!(ids.contains(category_slug(post.category).as_str()), "no chip for {}", post.category);
    }
}

#[test]
fn blog_post_ids_are_unique() {
    let mut seen = HashSet::new();
    seen.insert(blog::FEATURED_POST.id);
    for post in blog::POSTS {
        assert!(seen.insert(post.id), "duplicate post id {}", post.id);
    }
}

#[test]
fn category_icon_follows_slug() {
    assert_eq!(blog::category_icon("Technology"), IconKind::Zap);
    assert_eq!(blog::category_icon("Compliance"), IconKind::Shield);
    assert_eq!(blog::category_icon("Industry Insights"), IconKind::TrendingUp);
    assert_eq!(blog::category_icon("Customer Success"), IconKind::Target);
    assert_eq!(blog::category_icon("Press"), IconKind::BookOpen);
}

#[test]
fn display_date_formats_month_day_year() {
    assert_eq!(blog::display_date("2024-12-10"), "12/10/2024");
    assert_eq!(blog::display_date("2024-11-05"), "11/5/2024");
}

#[test]
fn display_date_passes_through_unparseable_input() {
    assert_eq!(blog::display_date("yesterday"), "yesterday");
    assert_eq!(blog::display_date("2024-13-01"), "2024-13-01");
    assert_eq!(blog::display_date("24-12-01"), "24-12-01");
}

// =============================================================
// Careers
// =============================================================

#[test]
fn job_ids_are_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for job in careers::JOBS {
        assert!(seen.insert(job.id));
        assert_eq!(careers::job_by_id(job.id).map(|j| j.title), Some(job.title));
    }
    assert!(careers::job_by_id(99).is_none());
}

#[test]
fn every_job_lists_requirements_and_benefits() {
    for job in careers::JOBS {
        assert!(!job.requirements.is_empty(), "{} has no requirements", job.title);
        assert!(!job.benefits.is_empty(), "{} has no benefits", job.title);
    }
}

// =============================================================
// Contact
// =============================================================

#[test]
fn directions_url_joins_address_words() {
    let url = contact::directions_url(&contact::OFFICES[1]);
    assert_eq!(
        url,
        "https://www.google.com/maps/search/?api=1&query=456+Corporate+Drive+Floor+12+Chicago+IL+60601"
    );
}

#[test]
fn form_select_values_are_unique() {
    for options in [contact::SERVICE_OPTIONS, contact::TIMELINE_OPTIONS] {
        let values: HashSet<_> = options.iter().map(|o| o.value).collect();
        assert_eq!(values.len(), options.len());
    }
}

// =============================================================
// Footer / home
// =============================================================

#[test]
fn footer_links_never_point_home() {
    for section in footer::SECTIONS {
        for link in section.links {
            assert_ne!(link.page, Page::Home, "{} links home", link.label);
        }
    }
}

#[test]
fn testimonials_rate_within_five_stars() {
    for t in home::TESTIMONIALS {
        assert!((1..=5).contains(&t.rating));
    }
}

#[test]
fn offerings_list_four_features() {
    for offering in home::SERVICES
        .iter()
        .chain(services::CALL_CENTER_SERVICES)
        .chain(services::COLLECTION_SERVICES)
    {
        assert_eq!(offering.features.len(), 4, "{}", offering.title);
    }
}

#[test]
fn tel_href_keeps_digits_and_plus() {
    assert_eq!(contact::tel_href("+1 (555) 234-5678"), "tel:+15552345678");
}
