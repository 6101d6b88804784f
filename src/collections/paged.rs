//! Paged collections: the full posts sequence and its per-tag partitions.

use super::pager::{Page, paginate};
use super::posts::Post;
use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;

/// Paginate the full posts sequence.
///
/// A direct binding of the pager to the posts collection; ordering and
/// empty-collection behavior are the pager's.
pub fn paged_posts<'a>(posts: &[Post<'a>], size: NonZeroUsize) -> Vec<Page<'a>> {
    paginate(posts, size)
}

/// Paginate posts independently within each tag partition.
///
/// Each partition is a filtered subsequence of `posts`, never re-sorted,
/// so the global newest-first order carries into every tag. A tag with no
/// matching posts still maps to one empty page, which keeps tag index
/// templates rendering even for tags requested beyond the derived set.
pub fn paged_posts_by_tag<'a>(
    posts: &[Post<'a>],
    tags: &BTreeSet<String>,
    size: NonZeroUsize,
) -> BTreeMap<String, Vec<Page<'a>>> {
    tags.iter()
        .map(|tag| {
            let tagged: Vec<Post<'a>> = posts
                .iter()
                .filter(|post| post.item.normalized_tags().any(|t| t == tag))
                .copied()
                .collect();
            (tag.clone(), paginate(&tagged, size))
        })
        .collect()
}
