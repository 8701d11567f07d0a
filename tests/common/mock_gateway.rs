//! Mock country gateway for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    /// Multipart fields (name, raw bytes) for upload requests.
    pub fields: Vec<(String, Vec<u8>)>,
}

impl CapturedRequest {
    pub fn field_text(&self, name: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[derive(Default)]
struct Inner {
    requests: Vec<CapturedRequest>,
    list_response: Option<(u16, serde_json::Value)>,
    detail_response: Option<(u16, serde_json::Value)>,
    images_response: Option<(u16, serde_json::Value)>,
    upload_status: u16,
}

type SharedState = Arc<Mutex<Inner>>;

/// In-process gateway bound to an ephemeral port. Responses are scripted
/// per route; every request is captured for assertions.
#[derive(Clone)]
pub struct MockGateway {
    addr: SocketAddr,
    state: SharedState,
}

impl MockGateway {
    pub async fn start() -> Self {
        let state: SharedState = Arc::new(Mutex::new(Inner {
            upload_status: 201,
            ..Default::default()
        }));
        let router = Router::new()
            .route("/countries", get(list_countries))
            .route("/countries/{name}", get(country_detail))
            .route(
                "/countries/{name}/images",
                get(country_images).post(upload_image),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock gateway");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_countries(&self, body: serde_json::Value) {
        self.state.lock().await.list_response = Some((200, body));
    }

    pub async fn set_countries_error(&self, status: u16) {
        self.state.lock().await.list_response =
            Some((status, serde_json::json!({ "error": "boom" })));
    }

    pub async fn set_detail(&self, body: serde_json::Value) {
        self.state.lock().await.detail_response = Some((200, body));
    }

    pub async fn set_detail_error(&self, status: u16) {
        self.state.lock().await.detail_response =
            Some((status, serde_json::json!({ "error": "boom" })));
    }

    pub async fn set_images(&self, body: serde_json::Value) {
        self.state.lock().await.images_response = Some((200, body));
    }

    pub async fn set_images_error(&self, status: u16) {
        self.state.lock().await.images_response =
            Some((status, serde_json::json!({ "error": "boom" })));
    }

    pub async fn set_upload_status(&self, status: u16) {
        self.state.lock().await.upload_status = status;
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.requests.clone()
    }

    pub async fn requests_for(&self, method: &str, path: &str) -> Vec<CapturedRequest> {
        self.requests()
            .await
            .into_iter()
            .filter(|req| req.method == method && req.path == path)
            .collect()
    }
}

fn respond(scripted: Option<(u16, serde_json::Value)>) -> (StatusCode, Json<serde_json::Value>) {
    let (status, body) = scripted.unwrap_or((200, serde_json::json!({})));
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(body),
    )
}

async fn list_countries(
    State(state): State<SharedState>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut inner = state.lock().await;
    inner.requests.push(CapturedRequest {
        method: "GET".to_string(),
        path: "/countries".to_string(),
        query,
        fields: Vec::new(),
    });
    respond(inner.list_response.clone())
}

async fn country_detail(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut inner = state.lock().await;
    inner.requests.push(CapturedRequest {
        method: "GET".to_string(),
        path: format!("/countries/{}", name),
        query: HashMap::new(),
        fields: Vec::new(),
    });
    respond(inner.detail_response.clone())
}

async fn country_images(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut inner = state.lock().await;
    inner.requests.push(CapturedRequest {
        method: "GET".to_string(),
        path: format!("/countries/{}/images", name),
        query: HashMap::new(),
        fields: Vec::new(),
    });
    respond(inner.images_response.clone())
}

async fn upload_image(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    mut multipart: Multipart,
) -> StatusCode {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or("").to_string();
        let bytes = field.bytes().await.unwrap_or_default().to_vec();
        fields.push((field_name, bytes));
    }

    let mut inner = state.lock().await;
    inner.requests.push(CapturedRequest {
        method: "POST".to_string(),
        path: format!("/countries/{}/images", name),
        query: HashMap::new(),
        fields,
    });
    StatusCode::from_u16(inner.upload_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
