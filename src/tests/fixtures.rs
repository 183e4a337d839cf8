use serde_json::{Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::anime::{FetchResult, Transport, TransportResponse};

/// Transport that answers every call with a canned response and records
/// what it was sent.
pub struct StubTransport {
    status: u16,
    body: String,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, Value)>>,
}

impl StubTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn ok(body: &Value) -> Self {
        Self::new(200, body.to_string())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(String, Value)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn post_json(&self, url: &str, body: &Value) -> FetchResult<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((url.to_string(), body.clone()));
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// One AniList media entry. Every third one has no dominant color.
pub fn media(id: i64) -> Value {
    let color = if id % 3 == 0 {
        Value::Null
    } else {
        json!(format!("#{:02x}{:02x}{:02x}", id * 17 % 256, 0xa1, 0x5d))
    };
    json!({
        "id": id,
        "type": "ANIME",
        "title": { "romaji": format!("Anime {id}") },
        "coverImage": {
            "extraLarge": format!("https://s4.anilist.co/file/anilistcdn/media/anime/cover/large/bx{id}.jpg"),
            "large": format!("https://s4.anilist.co/file/anilistcdn/media/anime/cover/medium/bx{id}.jpg"),
            "medium": format!("https://s4.anilist.co/file/anilistcdn/media/anime/cover/small/bx{id}.jpg"),
            "color": color,
        }
    })
}

/// A full `Page` response with media ids `first..first + count`.
pub fn page_response(first: i64, count: i64) -> Value {
    let media: Vec<Value> = (first..first + count).map(media).collect();
    json!({
        "data": {
            "Page": {
                "pageInfo": {
                    "total": 40,
                    "currentPage": 1,
                    "lastPage": 4,
                    "hasNextPage": true,
                    "perPage": count,
                },
                "media": media,
            }
        }
    })
}
