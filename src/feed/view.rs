//! Feed presentation state
//!
//! Owns what the feed page can change without recomposing: the sort
//! criterion, the single expanded card, and the column layout derived
//! from ad density and viewport width. Never mutates the composer's
//! published order.

use super::composer::FeedSnapshot;
use super::sort::{sort_items, SortKey};
use super::types::FeedItem;
use serde::Deserialize;

/// Ad density selector; denser means more, smaller columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Column count for a density/viewport combination
///
/// Breakpoints match the page grid: 768, 1024 and 1280 px.
pub fn column_count(size: AdSize, viewport_width: u32) -> u32 {
    match size {
        AdSize::Small => match viewport_width {
            0..=767 => 2,
            768..=1023 => 3,
            1024..=1279 => 4,
            _ => 5,
        },
        AdSize::Medium => match viewport_width {
            0..=767 => 1,
            768..=1023 => 2,
            _ => 3,
        },
        AdSize::Large => {
            if viewport_width < 1024 {
                1
            } else {
                2
            }
        }
    }
}

/// View-model for the feed page
#[derive(Debug, Default)]
pub struct FeedView {
    sort: SortKey,
    active_card: Option<String>,
}

impl FeedView {
    pub fn new(sort: SortKey) -> Self {
        Self {
            sort,
            active_card: None,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Id of the expanded card, if any
    pub fn active_card(&self) -> Option<&str> {
        self.active_card.as_deref()
    }

    /// Whether the given card is expanded
    pub fn is_active(&self, id: &str) -> bool {
        self.active_card.as_deref() == Some(id)
    }

    /// Handle a card click: clicking the expanded card collapses it,
    /// clicking another card moves the expansion there
    pub fn toggle_card(&mut self, id: &str) {
        if self.active_card.as_deref() == Some(id) {
            self.active_card = None;
        } else {
            self.active_card = Some(id.to_string());
        }
    }

    /// Sorted copy of the snapshot under the current sort key
    pub fn arrange(&self, snapshot: &FeedSnapshot) -> Vec<FeedItem> {
        sort_items(&snapshot.items, self.sort)
    }
}
