use super::*;
use crate::content::blog::ALL_CATEGORY;

#[test]
fn chip_label_includes_advertised_count() {
    assert_eq!(chip_label(&CATEGORIES[0]), "All Posts (24)");
}

#[test]
fn selected_chip_is_highlighted() {
    assert_eq!(chip_class(true), "chip chip--active");
    assert_eq!(chip_class(false), "chip");
}

#[test]
fn unfiltered_view_lists_every_recent_post() {
    let filter = BlogFilter::default();
    assert_eq!(filter.category, ALL_CATEGORY);
    assert_eq!(filter.apply(POSTS).len(), POSTS.len());
}

#[test]
fn featured_post_is_not_part_of_the_filtered_grid() {
    assert!(POSTS.iter().all(|post| post.id != FEATURED_POST.id));
}
