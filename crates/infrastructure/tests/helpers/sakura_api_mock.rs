#![allow(dead_code)]
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

const API_PREFIX: &str = "/cloud/zone/is1a/api/cloud/1.1";

/// Credentials the mock accepts: `token` / `secret`.
pub const EXPECTED_AUTHORIZATION: &str = "Basic dG9rZW46c2VjcmV0";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub filter: Option<Value>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct ApiState {
    items: Mutex<Vec<Value>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process Sakura Cloud API serving `commonserviceitem` for DNS zones.
pub struct MockSakuraApi {
    addr: SocketAddr,
    state: Arc<ApiState>,
    shutdown: CancellationToken,
}

impl MockSakuraApi {
    pub async fn start(items: Vec<Value>) -> Self {
        let state = Arc::new(ApiState {
            items: Mutex::new(items),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(
                &format!("{}/commonserviceitem", API_PREFIX),
                get(search_items),
            )
            .route(
                &format!("{}/commonserviceitem/{{id}}", API_PREFIX),
                put(update_item),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        let stop = shutdown.clone();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.cancelled().await })
                .await;
        });

        Self {
            addr,
            state,
            shutdown,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}/", self.addr, API_PREFIX)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockSakuraApi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

pub fn dns_item(id: &str, zone: &str, records: Value) -> Value {
    json!({
        "ID": id,
        "Name": zone,
        "Description": "",
        "Settings": { "DNS": { "ResourceRecordSets": records } },
        "Status": {
            "Zone": zone,
            "NS": ["ns1.gslb1.sakura.ne.jp", "ns2.gslb1.sakura.ne.jp"]
        },
        "ServiceClass": "cloud/dns",
        "Provider": { "Class": "dns" }
    })
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "is_fatal": true,
            "status": "401 Unauthorized",
            "error_code": "unauthorized",
            "error_msg": "Invalid credentials"
        })),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(EXPECTED_AUTHORIZATION)
}

async fn search_items(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let filter = query
        .map(|q| percent_decode(&q))
        .and_then(|q| serde_json::from_str::<Value>(&q).ok());

    state.requests.lock().unwrap().push(RecordedRequest {
        method: "GET",
        path: "commonserviceitem".to_string(),
        filter: filter.clone(),
        body: None,
    });

    if !authorized(&headers) {
        return unauthorized();
    }

    let name = filter
        .as_ref()
        .and_then(|f| f["Filter"]["Name"].as_str())
        .map(str::to_string);

    let items: Vec<Value> = state
        .items
        .lock()
        .unwrap()
        .iter()
        .filter(|item| match &name {
            Some(name) => item["Name"].as_str().is_some_and(|n| n.contains(name.as_str())),
            None => true,
        })
        .cloned()
        .collect();

    Json(json!({
        "From": 0,
        "Count": items.len(),
        "Total": items.len(),
        "CommonServiceItems": items,
        "is_ok": true
    }))
    .into_response()
}

async fn update_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: "PUT",
        path: format!("commonserviceitem/{}", id),
        filter: None,
        body: Some(body.clone()),
    });

    if !authorized(&headers) {
        return unauthorized();
    }

    let mut items = state.items.lock().unwrap();
    let Some(item) = items.iter_mut().find(|item| item["ID"] == id.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "is_fatal": true,
                "status": "404 Not Found",
                "error_code": "not_found",
                "error_msg": "対象が見つかりません"
            })),
        )
            .into_response();
    };

    item["Settings"]["DNS"]["ResourceRecordSets"] =
        body["CommonServiceItem"]["Settings"]["DNS"]["ResourceRecordSets"].clone();

    Json(json!({
        "CommonServiceItem": item.clone(),
        "Success": true,
        "is_ok": true
    }))
    .into_response()
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Ok(byte) = u8::from_str_radix(&input[i + 1..i + 3], 16) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
