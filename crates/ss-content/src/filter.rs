//! # List Filter
//!
//! Pure predicate over a listed result set: a post passes if its category
//! matches (or "all" is selected) AND at least one text field contains the
//! search term, case-insensitively. An empty term matches every post.

use ss_core::{CategoryFilter, Post};

pub fn matches_filters(post: &Post, category: &CategoryFilter, search: &str) -> bool {
    if !category.matches(post) {
        return false;
    }
    let needle = search.to_lowercase();
    post.title.to_lowercase().contains(&needle)
        || post.content.to_lowercase().contains(&needle)
        || post.author_name.to_lowercase().contains(&needle)
}

pub fn filter_posts(mut posts: Vec<Post>, category: &CategoryFilter, search: &str) -> Vec<Post> {
    posts.retain(|post| matches_filters(post, category, search));
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ss_core::Category;
    use uuid::Uuid;

    fn post(title: &str, content: &str, author: &str, category: Option<&str>) -> Post {
        Post {
            id: Uuid::now_v7(),
            title: title.into(),
            content: content.into(),
            category: category.map(Into::into),
            skills: vec![],
            author_id: "u1".into(),
            author_name: author.into(),
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            likes: vec![],
            comments: vec![],
        }
    }

    #[test]
    fn search_is_case_insensitive_across_text_fields() {
        let p = post("Weekend Project", "building a parser", "Grace", Some("Project"));
        assert!(matches_filters(&p, &CategoryFilter::All, "PARSER"));
        assert!(matches_filters(&p, &CategoryFilter::All, "grace"));
        assert!(matches_filters(&p, &CategoryFilter::All, "weekend"));
        assert!(!matches_filters(&p, &CategoryFilter::All, "compiler"));
    }

    #[test]
    fn category_must_match_when_selected() {
        let p = post("t", "c", "a", Some("Idea"));
        assert!(matches_filters(&p, &CategoryFilter::Only(Category::Idea), ""));
        assert!(!matches_filters(&p, &CategoryFilter::Only(Category::Skill), ""));
        // Uncategorised posts only pass the "all" selection.
        let bare = post("t", "c", "a", None);
        assert!(matches_filters(&bare, &CategoryFilter::All, ""));
        assert!(!matches_filters(&bare, &CategoryFilter::Only(Category::Idea), ""));
    }

    #[test]
    fn empty_search_passes_everything() {
        let posts = vec![post("a", "b", "c", None), post("d", "e", "f", Some("Skill"))];
        assert_eq!(filter_posts(posts, &CategoryFilter::All, "").len(), 2);
    }
}
