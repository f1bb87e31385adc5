//! Card rendering dispatch
//!
//! Pure dispatch over the item's content category. Every variant renders
//! a collapsed summary and, when expanded, extra detail lines; no variant
//! holds its own state, expansion is decided by the caller.

use super::types::{Ad, AiSuggestion, Auction, FeedItem, FeedItemData, LiveTrade, PaidAd};

/// Rendered card content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBody {
    /// Always-visible summary line
    pub summary: String,
    /// Detail lines shown only while the card is expanded
    pub detail: Vec<String>,
}

/// Render one feed item
pub fn render_card(item: &FeedItem, is_active: bool) -> CardBody {
    let mut body = match &item.data {
        FeedItemData::Ad(ad) => ad_body(ad),
        FeedItemData::Paid(paid) => paid_body(paid),
        FeedItemData::Trade(trade) => trade_body(trade),
        FeedItemData::Auction(auction) => auction_body(auction),
        FeedItemData::Ai(suggestion) => suggestion_body(suggestion),
    };

    if !is_active {
        body.detail.clear();
    }
    body
}

fn ad_body(ad: &Ad) -> CardBody {
    CardBody {
        summary: format!("{} — {}", ad.title, ad.price),
        detail: vec![
            format!("Seller: {}", ad.user.name),
            format!("Image: {}", ad.image_url),
        ],
    }
}

fn paid_body(paid: &PaidAd) -> CardBody {
    let mut body = ad_body(&paid.ad);
    if paid.sponsored {
        body.summary = format!("[Sponsored] {}", body.summary);
    }
    body
}

fn trade_body(trade: &LiveTrade) -> CardBody {
    CardBody {
        summary: format!("{} sold for {} ({})", trade.item_name, trade.price, trade.timestamp),
        detail: vec![format!("{} -> {}", trade.seller, trade.buyer)],
    }
}

fn auction_body(auction: &Auction) -> CardBody {
    CardBody {
        summary: format!("{} — current bid {}", auction.item_name, auction.current_bid),
        detail: vec![
            format!("Time left: {}", auction.time_left),
            format!("Image: {}", auction.image_url),
        ],
    }
}

fn suggestion_body(suggestion: &AiSuggestion) -> CardBody {
    CardBody {
        summary: format!("✨ {}", suggestion.title),
        detail: vec![suggestion.description.clone(), suggestion.reason.clone()],
    }
}
