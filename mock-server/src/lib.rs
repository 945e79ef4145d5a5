//! In-process stand-in for httpbin's `GET /get`.
//!
//! Echoes the query parameters, request headers, origin and URL back as JSON
//! in the same shape httpbin uses, and records every request it serves so
//! tests can count round-trips.
//!
//! `origin` is taken from `x-forwarded-for` when present and is otherwise
//! always `127.0.0.1`; the server only ever listens on loopback, so the peer
//! address is not extracted.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Query, State},
    http::{header, HeaderMap},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

/// One request as seen by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

pub fn app() -> Router {
    app_with_log(RequestLog::default())
}

pub fn app_with_log(log: RequestLog) -> Router {
    Router::new().route("/get", get(echo)).with_state(log)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_log(listener, RequestLog::default()).await
}

pub async fn run_with_log(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(log)).await
}

async fn echo(
    State(log): State<RequestLog>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Value> {
    debug!(uri = %uri, "echoing request");
    log.write().await.push(RecordedRequest {
        path: uri.path().to_string(),
        query: query.clone(),
    });

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let origin = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("127.0.0.1");

    Json(serde_json::json!({
        "args": collect_args(query),
        "headers": collect_headers(&headers),
        "origin": origin,
        "url": format!("http://{host}{uri}"),
    }))
}

/// Single values stay strings; repeated keys become arrays, as httpbin does.
pub fn collect_args(query: Vec<(String, String)>) -> Map<String, Value> {
    let mut args = Map::new();
    for (key, value) in query {
        match args.get_mut(&key) {
            None => {
                args.insert(key, Value::String(value));
            }
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
        }
    }
    args
}

/// Header names in httpbin's `Title-Case`.
fn collect_headers(headers: &HeaderMap) -> Map<String, Value> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let value = value.to_str().ok()?;
            Some((title_case(name.as_str()), Value::String(value.to_string())))
        })
        .collect()
}

fn title_case(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
