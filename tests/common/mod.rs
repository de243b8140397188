//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use automatic_api::clients::{HttpError, HttpRequest, HttpResponse, PageFetcher};
use serde_json::Value;

pub const TRIPS_URL: &str = "https://api.automatic.com/trip/";

/// A fetcher that replays canned responses in order and records every
/// request it receives.
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl PageFetcher for ScriptedFetcher {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetcher received more requests than scripted");
        Ok(response)
    }
}

/// Builds a response with a JSON body and an optional `next` link.
pub fn page(code: u16, body: Value, next: Option<&str>) -> HttpResponse {
    let mut headers = HashMap::new();
    if let Some(next) = next {
        headers.insert("Link".to_string(), vec![format!("<{next}>; rel=\"next\"")]);
    }
    HttpResponse::new(code, headers, body.to_string())
}

/// Builds a 200 page whose `results` are `{"id": ...}` objects.
pub fn trips_page(ids: &[&str], next: Option<&str>) -> HttpResponse {
    let results: Vec<Value> = ids.iter().map(|id| serde_json::json!({ "id": id })).collect();
    page(200, serde_json::json!({ "results": results }), next)
}

/// Returns the `id` of every record, in order.
pub fn ids(records: &[automatic_api::rest::RawRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r["id"].as_str().unwrap_or_default().to_string())
        .collect()
}
