//! The `tagList` collection: distinct tags across all posts.

use super::posts::Post;
use std::collections::BTreeSet;

/// Build the tag list.
///
/// Tags come pre-normalized from the item accessor (trimmed, blanks
/// dropped). The set dedupes exact matches and iterates in lexicographic
/// order, so downstream output is deterministic regardless of item order.
/// Case is preserved: `Rust` and `rust` are distinct tags.
pub fn tag_list(posts: &[Post<'_>]) -> BTreeSet<String> {
    posts
        .iter()
        .flat_map(|post| post.item.normalized_tags())
        .map(str::to_owned)
        .collect()
}
