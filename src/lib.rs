//! maz-feed: Feed composition service for the MAZDADY P2P marketplace
//!
//! This library provides the core components for:
//! - Fetching the marketplace's JSON collections in parallel
//! - Blending them into a quota-capped, shuffled feed snapshot
//! - AI-generated discovery suggestions with a static fallback
//! - Sorting and masonry layout for the feed page
//! - The promotional ad carousel (autoplay + drag)
//! - UI shell state with a persisted theme preference
//! - Structured logging and feed metrics

pub mod ai;
pub mod app;
pub mod cli;
pub mod config;
pub mod feed;
pub mod gallery;
pub mod sources;
pub mod telemetry;
