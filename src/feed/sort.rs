//! Feed sorting
//!
//! Re-orders a composed snapshot by a user-selected criterion without
//! mutating the published order. Prices are decimal strings on the wire;
//! items whose price fails to parse always sort after priced items, in
//! both directions.

use super::types::FeedItem;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// User-selectable sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Shuffle order as published by the composer
    #[default]
    Popular,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Reverse lexicographic id order (a proxy, not a true timestamp sort)
    Newest,
}

/// Parse an item's effective price (`price` else `currentBid`)
pub fn parse_price(item: &FeedItem) -> Option<Decimal> {
    item.price_str()
        .and_then(|raw| Decimal::from_str(raw.trim()).ok())
}

fn compare_prices(a: Option<Decimal>, b: Option<Decimal>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if ascending {
                a.cmp(&b)
            } else {
                b.cmp(&a)
            }
        }
        // Unpriced items go last regardless of direction
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a re-sorted copy of the snapshot
///
/// `Popular` preserves the input order. The sort is stable, so ties keep
/// their shuffle order.
pub fn sort_items(items: &[FeedItem], key: SortKey) -> Vec<FeedItem> {
    let mut sorted = items.to_vec();

    match key {
        SortKey::Popular => {}
        SortKey::PriceAsc => {
            sorted.sort_by(|a, b| compare_prices(parse_price(a), parse_price(b), true));
        }
        SortKey::PriceDesc => {
            sorted.sort_by(|a, b| compare_prices(parse_price(a), parse_price(b), false));
        }
        SortKey::Newest => {
            sorted.sort_by(|a, b| b.id.cmp(&a.id));
        }
    }

    sorted
}
