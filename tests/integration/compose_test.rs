//! Composition pipeline tests: quotas, shuffle permutation, AI fallback,
//! and the real HTTP source client against a local server.

use crate::support::{ad, auction, paid_ad, suggestion, trade, MockSources, TestServer};
use maz_feed::ai::{AiConfig, SuggestionProvider};
use maz_feed::config::ComposerConfig;
use maz_feed::feed::types::FeedKind;
use maz_feed::feed::{sort_items, FeedComposer, SortKey};
use maz_feed::sources::{HttpFeedSources, SourcesConfig};
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Arc;

fn composer_with(sources: MockSources) -> FeedComposer {
    FeedComposer::new(
        sources.into_arc(),
        SuggestionProvider::fallback_only(),
        ComposerConfig::default(),
    )
}

#[tokio::test]
async fn test_minimal_feed_sorts_unpriced_suggestion_last() {
    // ads = one item priced 10, everything else empty, fallback = ai1:
    // the composed feed has two items and price_asc puts the ad first
    let sources = MockSources {
        ads: vec![ad("a1", "10")],
        fallback: vec![suggestion("ai1")],
        ..MockSources::default()
    };

    let items = composer_with(sources).compose_once().await.unwrap();
    assert_eq!(items.len(), 2);

    let sorted = sort_items(&items, SortKey::PriceAsc);
    assert_eq!(sorted[0].id, "a1");
    assert_eq!(sorted[1].id, "ai1");
}

#[tokio::test]
async fn test_total_count_is_sum_of_capped_categories() {
    // 15 ads (cap 12), 1 paid (cap 2), 4 trades (cap 3), 1 auction
    // (cap 2), 3 fallback suggestions (cap 1)
    let sources = MockSources {
        ads: (0..15).map(|i| ad(&format!("a{}", i), "5")).collect(),
        paid_ads: vec![paid_ad("p0", "9")],
        live_trades: (0..4).map(|i| trade(&format!("t{}", i), "7")).collect(),
        auctions: vec![auction("auc0", "30")],
        fallback: vec![suggestion("s0"), suggestion("s1"), suggestion("s2")],
        fail_auctions: false,
    };

    let items = composer_with(sources).compose_once().await.unwrap();
    assert_eq!(items.len(), 12 + 1 + 3 + 1 + 1);

    let count = |kind: FeedKind| items.iter().filter(|i| i.kind() == kind).count();
    assert_eq!(count(FeedKind::Ad), 12);
    assert_eq!(count(FeedKind::Paid), 1);
    assert_eq!(count(FeedKind::Trade), 3);
    assert_eq!(count(FeedKind::Auction), 1);
    assert_eq!(count(FeedKind::Ai), 1);
}

#[tokio::test]
async fn test_published_feed_is_permutation_of_capped_selection() {
    let sources = MockSources {
        ads: (0..15).map(|i| ad(&format!("a{:02}", i), "5")).collect(),
        paid_ads: vec![paid_ad("p0", "9")],
        live_trades: (0..2).map(|i| trade(&format!("t{}", i), "7")).collect(),
        auctions: vec![auction("auc0", "30")],
        fallback: vec![suggestion("s0")],
        fail_auctions: false,
    };

    let items = composer_with(sources).compose_once().await.unwrap();

    // First 12 ads survive the cap; the shuffle changes order, not content
    let mut expected: BTreeSet<String> = (0..12).map(|i| format!("a{:02}", i)).collect();
    expected.extend(["p0", "t0", "t1", "auc0", "s0"].map(String::from));

    let actual: BTreeSet<String> = items.iter().map(|i| i.id.clone()).collect();
    assert_eq!(actual, expected);
    assert_eq!(items.len(), expected.len(), "no duplicate ids");
}

#[tokio::test]
async fn test_failing_collection_aborts_whole_cycle() {
    let sources = MockSources {
        ads: vec![ad("a1", "10")],
        fallback: vec![suggestion("ai1")],
        fail_auctions: true,
        ..MockSources::default()
    };

    assert!(composer_with(sources).compose_once().await.is_err());
}

#[tokio::test]
async fn test_ai_network_failure_falls_back_to_static_file() {
    // Generative endpoint that refuses connections
    let ai_config = AiConfig {
        api_key: Some("test-key".to_string()),
        model: "test-model".to_string(),
        base_url: "http://127.0.0.1:9".to_string(),
    };

    let sources = MockSources {
        ads: vec![ad("a1", "10")],
        fallback: vec![suggestion("ai_static")],
        ..MockSources::default()
    };

    let composer = FeedComposer::new(
        sources.into_arc(),
        SuggestionProvider::from_config(&ai_config),
        ComposerConfig::default(),
    );

    let items = composer.compose_once().await.unwrap();
    let ai: Vec<_> = items.iter().filter(|i| i.kind() == FeedKind::Ai).collect();
    assert_eq!(ai.len(), 1);
    assert_eq!(ai[0].id, "ai_static");
}

#[tokio::test]
async fn test_ai_malformed_response_falls_back_to_static_file() {
    // The model answers 200 but the candidate text is not JSON
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"no json here"}]}}]}"#;
    let server = TestServer::start(HashMap::from([(
        "/v1beta/models/test-model:generateContent".to_string(),
        body.to_string(),
    )]))
    .await;

    let ai_config = AiConfig {
        api_key: Some("test-key".to_string()),
        model: "test-model".to_string(),
        base_url: server.base_url.clone(),
    };

    let sources = MockSources {
        ads: vec![ad("a1", "10")],
        fallback: vec![suggestion("ai_static")],
        ..MockSources::default()
    };

    let composer = FeedComposer::new(
        sources.into_arc(),
        SuggestionProvider::from_config(&ai_config),
        ComposerConfig::default(),
    );

    let items = composer.compose_once().await.unwrap();
    let ai: Vec<_> = items.iter().filter(|i| i.kind() == FeedKind::Ai).collect();
    assert_eq!(ai.len(), 1);
    assert_eq!(ai[0].id, "ai_static");
    server.stop();
}

#[tokio::test]
async fn test_http_sources_compose_end_to_end() {
    let ads = serde_json::json!([{
        "id": "a1",
        "title": "Vintage camera",
        "price": "120.00",
        "imageUrl": "https://cdn.mazdady.test/cam.jpg",
        "user": {"name": "Omar", "avatarUrl": "https://cdn.mazdady.test/omar.jpg"}
    }]);
    let paid = serde_json::json!([{
        "id": "p1",
        "title": "Gaming laptop",
        "price": "950",
        "imageUrl": "https://cdn.mazdady.test/laptop.jpg",
        "user": {"name": "Sara", "avatarUrl": "https://cdn.mazdady.test/sara.jpg"},
        "sponsored": true
    }]);
    let trades = serde_json::json!([{
        "id": "t1",
        "itemName": "Rug",
        "price": "45",
        "timestamp": "2 min ago",
        "buyer": "Nadia",
        "seller": "Karim"
    }]);
    let auctions = serde_json::json!([{
        "id": "auc1",
        "itemName": "Clock",
        "imageUrl": "https://cdn.mazdady.test/clock.jpg",
        "currentBid": "77.25",
        "timeLeft": "3h 12m"
    }]);
    let fallback = serde_json::json!([{
        "id": "ai1",
        "title": "Explore film photography",
        "description": "Analog gear from local sellers",
        "reason": "Because you viewed Vintage camera"
    }]);

    let routes = HashMap::from([
        ("/features/Feed/data/masonryAds.json".to_string(), ads.to_string()),
        ("/features/Feed/data/paidAds.json".to_string(), paid.to_string()),
        ("/features/Feed/data/liveTrades.json".to_string(), trades.to_string()),
        ("/features/Feed/data/auctions.json".to_string(), auctions.to_string()),
        ("/features/Feed/data/aiFeed.json".to_string(), fallback.to_string()),
    ]);
    let server = TestServer::start(routes).await;

    let sources = Arc::new(HttpFeedSources::new(SourcesConfig {
        base_url: server.base_url.clone(),
        ..SourcesConfig::default()
    }));
    let composer = FeedComposer::new(
        sources,
        SuggestionProvider::fallback_only(),
        ComposerConfig::default(),
    );

    let items = composer.compose_once().await.unwrap();
    assert_eq!(items.len(), 5);
    let ids: BTreeSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        BTreeSet::from(["a1", "p1", "t1", "auc1", "ai1"])
    );
    server.stop();
}

#[tokio::test]
async fn test_missing_core_endpoint_aborts_cycle() {
    // Auctions endpoint missing (404): whole cycle fails
    let ads = serde_json::json!([{
        "id": "a1",
        "title": "Vintage camera",
        "price": "120.00",
        "imageUrl": "https://cdn.mazdady.test/cam.jpg",
        "user": {"name": "Omar", "avatarUrl": "https://cdn.mazdady.test/omar.jpg"}
    }]);
    let empty = serde_json::json!([]);

    let routes = HashMap::from([
        ("/features/Feed/data/masonryAds.json".to_string(), ads.to_string()),
        ("/features/Feed/data/paidAds.json".to_string(), empty.to_string()),
        ("/features/Feed/data/liveTrades.json".to_string(), empty.to_string()),
        ("/features/Feed/data/aiFeed.json".to_string(), empty.to_string()),
    ]);
    let server = TestServer::start(routes).await;

    let sources = Arc::new(HttpFeedSources::new(SourcesConfig {
        base_url: server.base_url.clone(),
        ..SourcesConfig::default()
    }));
    let composer = FeedComposer::new(
        sources,
        SuggestionProvider::fallback_only(),
        ComposerConfig::default(),
    );

    assert!(composer.compose_once().await.is_err());
    server.stop();
}
