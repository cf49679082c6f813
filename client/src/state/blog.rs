//! Blog search box and category chip state.
//!
//! DESIGN
//! ======
//! A post is shown when its title or excerpt contains the query
//! (case-insensitive) AND its category slug equals the selected chip, with
//! `"all"` matching every category. The filter never reorders posts.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use crate::content::blog::{ALL_CATEGORY, BlogPost};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogFilter {
    pub query: String,
    /// Selected category slug.
    pub category: String,
}

impl Default for BlogFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORY.to_owned(),
        }
    }
}

impl BlogFilter {
    #[must_use]
    pub fn matches(&self, post: &BlogPost) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search =
            post.title.to_lowercase().contains(&needle) || post.excerpt.to_lowercase().contains(&needle);
        let matches_category = self.category == ALL_CATEGORY || category_slug(post.category) == self.category;
        matches_search && matches_category
    }

    /// Posts that pass the filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }

    /// Reset to the unfiltered view.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || self.category != ALL_CATEGORY
    }
}

/// Lower-case a category label and hyphenate its first space.
///
/// `"Industry Insights"` becomes `"industry-insights"`. Only the first space
/// is replaced; every current category has at most two words.
#[must_use]
pub fn category_slug(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}
