//! Promotional ad gallery
//!
//! Horizontal carousel independent of the feed: autoplay scrolling over a
//! doubled item strip, manual drag with click suppression.

mod carousel;

pub use carousel::{load_promos, Autoplay, Carousel, CarouselConfig, PromoAd, PromoLink};
