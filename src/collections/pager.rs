//! Fixed-size pagination over an ordered post sequence.

use super::posts::Post;
use std::num::NonZeroUsize;

/// One page of a paginated collection.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Posts on this page, in collection order
    pub items: Vec<Post<'a>>,
    /// Zero-based page index
    pub index: usize,
    /// Total page count; at least 1 even for an empty collection
    pub total: usize,
}

impl Page<'_> {
    /// Whether an earlier page exists
    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        self.index < self.total - 1
    }
}

/// Split posts into pages of at most `size` items.
///
/// Input order is preserved: page items concatenate back to exactly the
/// input sequence, with only the last page allowed to run short. An empty
/// collection still yields one empty page so index templates always have
/// something to render.
///
/// A zero page size is unrepresentable here; config validation rejects it
/// at load time, long before this seam.
pub fn paginate<'a>(posts: &[Post<'a>], size: NonZeroUsize) -> Vec<Page<'a>> {
    if posts.is_empty() {
        return vec![Page {
            items: Vec::new(),
            index: 0,
            total: 1,
        }];
    }

    let size = size.get();
    let total = posts.len().div_ceil(size);

    posts
        .chunks(size)
        .enumerate()
        .map(|(index, chunk)| Page {
            items: chunk.to_vec(),
            index,
            total,
        })
        .collect()
}
