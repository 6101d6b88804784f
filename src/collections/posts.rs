//! The `posts` collection: published items, newest first.

use crate::content::ContentItem;
use crate::utils::date::DateTimeUtc;

/// A published post: a view over a content item that is not a draft and
/// carries a valid date.
///
/// Derived fresh per build, never stored across builds.
#[derive(Debug, Clone, Copy)]
pub struct Post<'a> {
    /// The underlying content item
    pub item: &'a ContentItem,
    /// Parsed publication date
    pub date: DateTimeUtc,
}

/// Build the posts collection.
///
/// Drafts and items without a parseable date are skipped silently: a bad
/// date hides the post, it never fails the build. The rest sort newest
/// first with a stable sort, so items sharing a date keep their input
/// order and output is deterministic exactly when the input order is.
pub fn posts(items: &[ContentItem]) -> Vec<Post<'_>> {
    let mut posts: Vec<Post> = items
        .iter()
        .filter(|item| !item.draft)
        .filter_map(|item| item.published_date().map(|date| Post { item, date }))
        .collect();

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path: &str, date: Option<&str>, draft: bool) -> ContentItem {
        let mut item = ContentItem::new(path);
        item.date = date.map(str::to_owned);
        item.draft = draft;
        item
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let items = vec![
            item("posts/jan.md", Some("2024-01-01"), false),
            item("posts/mar.md", Some("2024-03-01"), false),
            item("posts/feb.md", Some("2024-02-01"), false),
        ];

        let posts = posts(&items);
        let order: Vec<_> = posts.iter().map(|p| p.item.path.as_path()).collect();

        assert_eq!(
            order,
            vec![
                std::path::Path::new("posts/mar.md"),
                std::path::Path::new("posts/feb.md"),
                std::path::Path::new("posts/jan.md"),
            ]
        );
    }

    #[test]
    fn test_posts_exclude_drafts() {
        let items = vec![
            item("posts/live.md", Some("2024-01-01"), false),
            item("posts/draft.md", Some("2024-06-01"), true),
        ];

        let posts = posts(&items);

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].item.path, std::path::PathBuf::from("posts/live.md"));
    }

    #[test]
    fn test_posts_exclude_missing_or_invalid_dates() {
        let items = vec![
            item("posts/ok.md", Some("2024-01-01"), false),
            item("posts/undated.md", None, false),
            item("posts/garbled.md", Some("soon(tm)"), false),
            item("posts/impossible.md", Some("2024-02-30"), false),
        ];

        let posts = posts(&items);

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].item.path, std::path::PathBuf::from("posts/ok.md"));
    }

    #[test]
    fn test_posts_equal_dates_keep_input_order() {
        let items = vec![
            item("posts/first.md", Some("2024-05-05"), false),
            item("posts/second.md", Some("2024-05-05"), false),
            item("posts/third.md", Some("2024-05-05"), false),
        ];

        let posts = posts(&items);
        let order: Vec<_> = posts.iter().map(|p| p.item.path.as_path()).collect();

        assert_eq!(
            order,
            vec![
                std::path::Path::new("posts/first.md"),
                std::path::Path::new("posts/second.md"),
                std::path::Path::new("posts/third.md"),
            ]
        );
    }

    #[test]
    fn test_posts_time_component_orders_within_day() {
        let items = vec![
            item("posts/morning.md", Some("2024-05-05T08:00:00Z"), false),
            item("posts/evening.md", Some("2024-05-05T20:00:00Z"), false),
        ];

        let posts = posts(&items);

        assert_eq!(
            posts[0].item.path,
            std::path::PathBuf::from("posts/evening.md")
        );
    }

    #[test]
    fn test_posts_empty_input() {
        let posts = posts(&[]);
        assert!(posts.is_empty());
    }

    #[test]
    fn test_posts_all_excluded() {
        let items = vec![
            item("posts/draft.md", Some("2024-01-01"), true),
            item("posts/undated.md", None, false),
        ];

        assert!(posts(&items).is_empty());
    }
}
