//! Shared fixtures: an in-memory source set and a minimal HTTP server
//! for exercising the real clients.

use async_trait::async_trait;
use maz_feed::feed::types::{Ad, AdUser, AiSuggestion, Auction, LiveTrade, PaidAd};
use maz_feed::sources::{FeedSources, SourceError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub fn ad(id: &str, price: &str) -> Ad {
    Ad {
        id: id.to_string(),
        title: format!("Item {}", id),
        price: price.to_string(),
        image_url: "https://cdn.mazdady.test/img.jpg".to_string(),
        user: AdUser {
            name: "Layla".to_string(),
            avatar_url: "https://cdn.mazdady.test/layla.jpg".to_string(),
        },
    }
}

pub fn paid_ad(id: &str, price: &str) -> PaidAd {
    PaidAd {
        ad: ad(id, price),
        sponsored: true,
    }
}

pub fn trade(id: &str, price: &str) -> LiveTrade {
    LiveTrade {
        id: id.to_string(),
        item_name: "Rug".to_string(),
        price: price.to_string(),
        timestamp: "2 min ago".to_string(),
        buyer: "Nadia".to_string(),
        seller: "Karim".to_string(),
    }
}

pub fn auction(id: &str, bid: &str) -> Auction {
    Auction {
        id: id.to_string(),
        item_name: "Clock".to_string(),
        image_url: "https://cdn.mazdady.test/clock.jpg".to_string(),
        current_bid: bid.to_string(),
        time_left: "3h 12m".to_string(),
    }
}

pub fn suggestion(id: &str) -> AiSuggestion {
    AiSuggestion {
        id: id.to_string(),
        title: "Explore film photography".to_string(),
        description: "Analog gear from local sellers".to_string(),
        reason: "Because you viewed Item a1".to_string(),
    }
}

/// In-memory source set with per-collection failure switches
#[derive(Default)]
pub struct MockSources {
    pub ads: Vec<Ad>,
    pub paid_ads: Vec<PaidAd>,
    pub live_trades: Vec<LiveTrade>,
    pub auctions: Vec<Auction>,
    pub fallback: Vec<AiSuggestion>,
    pub fail_auctions: bool,
}

impl MockSources {
    pub fn into_arc(self) -> Arc<dyn FeedSources> {
        Arc::new(self)
    }

    fn unavailable(endpoint: &str) -> SourceError {
        SourceError::Status {
            endpoint: endpoint.to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "down".to_string(),
        }
    }
}

#[async_trait]
impl FeedSources for MockSources {
    async fn fetch_ads(&self) -> Result<Vec<Ad>, SourceError> {
        Ok(self.ads.clone())
    }

    async fn fetch_paid_ads(&self) -> Result<Vec<PaidAd>, SourceError> {
        Ok(self.paid_ads.clone())
    }

    async fn fetch_live_trades(&self) -> Result<Vec<LiveTrade>, SourceError> {
        Ok(self.live_trades.clone())
    }

    async fn fetch_auctions(&self) -> Result<Vec<Auction>, SourceError> {
        if self.fail_auctions {
            return Err(Self::unavailable("/auctions.json"));
        }
        Ok(self.auctions.clone())
    }

    async fn fetch_fallback_suggestions(&self) -> Result<Vec<AiSuggestion>, SourceError> {
        Ok(self.fallback.clone())
    }
}

/// Minimal HTTP/1.1 server mapping request paths to canned JSON bodies.
/// Unknown paths get a 404.
pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(routes: HashMap<String, String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let Some(path) = read_request(&mut stream).await else {
                        return;
                    };
                    let response = match routes.get(&path) {
                        Some(body) => format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        ),
                        None => {
                            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                                .to_string()
                        }
                    };
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Read one request, consuming any body, and return its path
async fn read_request(stream: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    // Drain the body so the client sees a clean close
    let mut remaining = content_length.saturating_sub(buf.len() - header_end - 4);
    while remaining > 0 {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        remaining = remaining.saturating_sub(n);
    }

    let request_line = head.lines().next()?;
    let path = request_line.split_whitespace().nth(1)?;
    // Strip the query string; routing is path-only
    let path = path.split('?').next().unwrap_or(path);
    Some(path.to_string())
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
