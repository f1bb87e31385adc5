//! Run command implementation
//!
//! Starts the composition loop and prints the arranged feed on every
//! publish, using the shell's persisted theme and sort preferences.

use crate::ai::SuggestionProvider;
use crate::app::AppShell;
use crate::config::Config;
use crate::feed::{card::render_card, FeedComposer, FeedView, SortKey};
use crate::gallery::{load_promos, Autoplay, Carousel};
use crate::sources::HttpFeedSources;
use clap::Args;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Sort order for the printed feed
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Viewport width used for the column layout
    #[arg(long)]
    pub viewport: Option<u32>,
}

impl RunArgs {
    pub async fn execute(&self, config: Config) -> anyhow::Result<()> {
        let sources = Arc::new(HttpFeedSources::new(config.sources.clone()));
        let suggestions = SuggestionProvider::from_config(&config.ai);
        let composer = FeedComposer::new(sources, suggestions, config.composer.clone());

        let mut shell = AppShell::new(&config.ui);
        if let Some(sort) = self.sort {
            shell.set_sort(sort);
        }
        let view = FeedView::new(shell.sort());
        let viewport = self.viewport.unwrap_or(config.ui.viewport_width);

        // The gallery strip runs independently of the feed; without a
        // layout engine, a nominal per-item width stands in for the
        // rendered strip width.
        let promos = match &config.gallery.promos_file {
            Some(path) => load_promos(path)?,
            None => Vec::new(),
        };
        let strip_width = (promos.len() * 2) as f64 * 400.0;
        let carousel = Arc::new(Mutex::new(Carousel::new(
            promos,
            strip_width,
            &config.gallery,
        )));
        let autoplay = Autoplay::start(
            carousel,
            Duration::from_millis(config.gallery.autoplay_interval_ms),
        );

        let handle = composer.spawn();
        let mut rx = handle.subscribe();

        tracing::info!(
            theme = shell.theme().as_str(),
            columns = shell.columns(viewport),
            "Feed service started"
        );

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutting down");
                    break;
                }
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = rx.borrow_and_update().clone();
                    if snapshot.is_loading {
                        continue;
                    }

                    let arranged = view.arrange(&snapshot);
                    println!("--- feed ({} items) ---", arranged.len());
                    for item in &arranged {
                        let body = render_card(item, view.is_active(&item.id));
                        println!("{}", body.summary);
                    }
                }
            }
        }

        autoplay.stop();
        handle.stop();
        Ok(())
    }
}
