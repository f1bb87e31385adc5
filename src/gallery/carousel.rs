//! Carousel view-model
//!
//! The promo strip is the item list concatenated twice; autoplay advances
//! the scroll position and jumps back to zero when it reaches the end of
//! the first copy (the jump is visible, kept as designed). Dragging
//! pauses autoplay, and a gesture that moved past the threshold
//! suppresses the click that follows it.

use serde::Deserialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Where a promo links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoLink {
    /// Marketplace page, same context
    Internal,
    /// Opens in a new context
    External,
}

/// One promotional gallery item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoAd {
    pub id: String,
    pub image_url: String,
    pub link: String,
    pub alt: String,
    #[serde(rename = "type")]
    pub kind: PromoLink,
}

/// Carousel tuning
#[derive(Debug, Clone, Deserialize)]
pub struct CarouselConfig {
    /// Milliseconds between autoplay ticks
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    /// Pixels advanced per tick
    #[serde(default = "default_autoplay_step")]
    pub autoplay_step: f64,
    /// Pointer travel beyond which a gesture counts as a drag
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f64,
    /// JSON file with the promotional items; empty gallery when unset
    #[serde(default)]
    pub promos_file: Option<std::path::PathBuf>,
}

fn default_autoplay_interval_ms() -> u64 {
    20
}
fn default_autoplay_step() -> f64 {
    1.0
}
fn default_drag_threshold_px() -> f64 {
    5.0
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 20,
            autoplay_step: 1.0,
            drag_threshold_px: 5.0,
            promos_file: None,
        }
    }
}

/// Load promotional items from a JSON array file
pub fn load_promos(path: &std::path::Path) -> anyhow::Result<Vec<PromoAd>> {
    let raw = std::fs::read_to_string(path)?;
    let promos = serde_json::from_str(&raw)?;
    Ok(promos)
}

/// Scroll and drag state of the gallery
#[derive(Debug)]
pub struct Carousel {
    items: Vec<PromoAd>,
    scroll_width: f64,
    scroll_left: f64,
    step: f64,
    drag_threshold: f64,
    dragging: bool,
    drag_start_x: f64,
    drag_origin_scroll: f64,
    has_dragged: bool,
}

impl Carousel {
    /// Build the carousel over `ads` doubled for the looping illusion.
    /// `scroll_width` is the pixel width of the doubled strip.
    pub fn new(ads: Vec<PromoAd>, scroll_width: f64, config: &CarouselConfig) -> Self {
        let mut items = ads.clone();
        items.extend(ads);
        Self {
            items,
            scroll_width,
            scroll_left: 0.0,
            step: config.autoplay_step,
            drag_threshold: config.drag_threshold_px,
            dragging: false,
            drag_start_x: 0.0,
            drag_origin_scroll: 0.0,
            has_dragged: false,
        }
    }

    /// Doubled item strip, in render order
    pub fn items(&self) -> &[PromoAd] {
        &self.items
    }

    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// One autoplay step; paused while a drag is in progress.
    /// Reaching the midpoint (end of the first copy) resets to zero.
    pub fn tick(&mut self) {
        if self.dragging {
            return;
        }

        let halfway = self.scroll_width / 2.0;
        if self.scroll_left + self.step >= halfway {
            self.scroll_left = 0.0;
        } else {
            self.scroll_left += self.step;
        }
    }

    /// Begin a pointer gesture at `x`
    pub fn pointer_down(&mut self, x: f64) {
        self.dragging = true;
        self.has_dragged = false;
        self.drag_start_x = x;
        self.drag_origin_scroll = self.scroll_left;
    }

    /// Pointer moved to `x`; scrolls the strip and flags a drag once the
    /// travel exceeds the threshold
    pub fn pointer_move(&mut self, x: f64) {
        if !self.dragging {
            return;
        }

        let walk = x - self.drag_start_x;
        if walk.abs() > self.drag_threshold {
            self.has_dragged = true;
        }

        self.scroll_left = (self.drag_origin_scroll - walk).clamp(0.0, self.scroll_width);
    }

    /// Release the pointer; autoplay resumes on the next tick
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// False when the gesture that just ended was a drag, so the click it
    /// produced must not navigate. Cleared by the next pointer down.
    pub fn click_allowed(&self) -> bool {
        !self.has_dragged
    }
}

/// Autoplay timer driving a shared carousel
///
/// Owns the scheduled task; stop it on teardown or let the drop hook do
/// it.
pub struct Autoplay {
    handle: JoinHandle<()>,
}

impl Autoplay {
    /// Start ticking `carousel` every `interval`
    pub fn start(carousel: Arc<Mutex<Carousel>>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            loop {
                timer.tick().await;
                // A panicked holder leaves usable scroll state behind,
                // so keep ticking through a poisoned lock
                let mut carousel = carousel.lock().unwrap_or_else(|e| e.into_inner());
                carousel.tick();
            }
        });

        Self { handle }
    }

    /// Cancel the autoplay timer
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
