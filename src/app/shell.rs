//! Application shell state
//!
//! UI-only state layered over the feed: the two modal overlays, the ad
//! density selector, the sort option handed to the feed view, and the
//! persisted theme. Holds no feed data itself.

use super::theme::{Theme, ThemeStore};
use crate::config::UiConfig;
use crate::feed::{column_count, AdSize, SortKey};

/// Top-level UI state
pub struct AppShell {
    trading_feed_visible: bool,
    chat_visible: bool,
    ad_size: AdSize,
    sort: SortKey,
    theme: Theme,
    theme_store: ThemeStore,
}

impl AppShell {
    /// Build the shell, restoring the persisted theme
    pub fn new(config: &UiConfig) -> Self {
        let theme_store = ThemeStore::new(&config.state_dir);
        let theme = theme_store.load();

        Self {
            trading_feed_visible: false,
            chat_visible: false,
            ad_size: AdSize::default(),
            sort: SortKey::default(),
            theme,
            theme_store,
        }
    }

    pub fn trading_feed_visible(&self) -> bool {
        self.trading_feed_visible
    }

    pub fn chat_visible(&self) -> bool {
        self.chat_visible
    }

    pub fn ad_size(&self) -> AdSize {
        self.ad_size
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_trading_feed(&mut self) {
        self.trading_feed_visible = !self.trading_feed_visible;
    }

    pub fn toggle_chat(&mut self) {
        self.chat_visible = !self.chat_visible;
    }

    pub fn set_ad_size(&mut self, size: AdSize) {
        self.ad_size = size;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Flip the theme and persist it; a failed write keeps the new theme
    /// for this session
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(error) = self.theme_store.save(self.theme) {
            tracing::warn!(%error, "Failed to persist theme preference");
        }
    }

    /// Column count for the current density at the given viewport width
    pub fn columns(&self, viewport_width: u32) -> u32 {
        column_count(self.ad_size, viewport_width)
    }
}
