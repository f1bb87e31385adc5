//! Marketplace feed
//!
//! Composition (fetch, blend, shuffle, refresh), sorting, and the
//! presentation state for the masonry grid.

pub mod card;
mod composer;
mod sort;
pub mod types;
mod view;

pub use composer::{FeedComposer, FeedHandle, FeedSnapshot};
pub use sort::{parse_price, sort_items, SortKey};
pub use view::{column_count, AdSize, FeedView};
