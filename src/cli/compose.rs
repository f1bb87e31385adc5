//! Compose command implementation
//!
//! One composition cycle, printed as JSON. Useful for checking the
//! endpoints and quota blend without starting the service.

use crate::ai::SuggestionProvider;
use crate::config::Config;
use crate::feed::{sort_items, FeedComposer, SortKey};
use crate::sources::HttpFeedSources;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Re-sort the printed feed instead of keeping the shuffle order
    #[arg(long, value_enum, default_value = "popular")]
    pub sort: SortKey,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ComposeArgs {
    pub async fn execute(&self, config: Config) -> anyhow::Result<()> {
        let sources = Arc::new(HttpFeedSources::new(config.sources));
        let suggestions = SuggestionProvider::from_config(&config.ai);
        let composer = FeedComposer::new(sources, suggestions, config.composer);

        let items = composer.compose_once().await?;
        let items = sort_items(&items, self.sort);

        let json = if self.pretty {
            serde_json::to_string_pretty(&items)?
        } else {
            serde_json::to_string(&items)?
        };
        println!("{}", json);

        Ok(())
    }
}
