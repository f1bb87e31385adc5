//! Feed data model
//!
//! Five content categories are blended into one feed: regular ads,
//! sponsored ads, live trade notices, auctions, and AI suggestions.
//! All shapes mirror the marketplace's static JSON endpoints, which use
//! camelCase field names on the wire.

use serde::{Deserialize, Serialize};

/// Seller shown on an ad card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdUser {
    pub name: String,
    pub avatar_url: String,
}

/// Regular marketplace listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: String,
    pub title: String,
    /// Decimal string, parsed only at sort time
    pub price: String,
    pub image_url: String,
    pub user: AdUser,
}

/// Sponsored listing: an ad plus a sponsorship flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidAd {
    #[serde(flatten)]
    pub ad: Ad,
    pub sponsored: bool,
}

/// Completed-trade notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTrade {
    pub id: String,
    pub item_name: String,
    pub price: String,
    pub timestamp: String,
    pub buyer: String,
    pub seller: String,
}

/// Item under auction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub id: String,
    pub item_name: String,
    pub image_url: String,
    pub current_bid: String,
    pub time_left: String,
}

/// AI-generated discovery suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    /// "Because you viewed..." justification line
    pub reason: String,
}

/// Payload of one feed item, tagged by content category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum FeedItemData {
    Ad(Ad),
    Paid(PaidAd),
    Trade(LiveTrade),
    Auction(Auction),
    Ai(AiSuggestion),
}

/// Content category discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Ad,
    Paid,
    Trade,
    Auction,
    Ai,
}

/// One unit of the composed feed
///
/// `id` duplicates the payload's id so consumers can key on it without
/// matching on the variant. Unique within a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    #[serde(flatten)]
    pub data: FeedItemData,
}

impl FeedItem {
    pub fn from_ad(ad: Ad) -> Self {
        Self {
            id: ad.id.clone(),
            data: FeedItemData::Ad(ad),
        }
    }

    pub fn from_paid(paid: PaidAd) -> Self {
        Self {
            id: paid.ad.id.clone(),
            data: FeedItemData::Paid(paid),
        }
    }

    pub fn from_trade(trade: LiveTrade) -> Self {
        Self {
            id: trade.id.clone(),
            data: FeedItemData::Trade(trade),
        }
    }

    pub fn from_auction(auction: Auction) -> Self {
        Self {
            id: auction.id.clone(),
            data: FeedItemData::Auction(auction),
        }
    }

    pub fn from_suggestion(suggestion: AiSuggestion) -> Self {
        Self {
            id: suggestion.id.clone(),
            data: FeedItemData::Ai(suggestion),
        }
    }

    /// Content category of this item
    pub fn kind(&self) -> FeedKind {
        match self.data {
            FeedItemData::Ad(_) => FeedKind::Ad,
            FeedItemData::Paid(_) => FeedKind::Paid,
            FeedItemData::Trade(_) => FeedKind::Trade,
            FeedItemData::Auction(_) => FeedKind::Auction,
            FeedItemData::Ai(_) => FeedKind::Ai,
        }
    }

    /// Price string for sorting: `price` where present, else `currentBid`.
    /// AI suggestions carry no price.
    pub fn price_str(&self) -> Option<&str> {
        match &self.data {
            FeedItemData::Ad(ad) => Some(&ad.price),
            FeedItemData::Paid(paid) => Some(&paid.ad.price),
            FeedItemData::Trade(trade) => Some(&trade.price),
            FeedItemData::Auction(auction) => Some(&auction.current_bid),
            FeedItemData::Ai(_) => None,
        }
    }
}
