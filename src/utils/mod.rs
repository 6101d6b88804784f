//! Utility modules for the collection pipeline.

pub mod date;
pub mod slug;
