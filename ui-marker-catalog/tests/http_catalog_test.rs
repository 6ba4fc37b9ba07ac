//! HttpCatalog against a local axum server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use ui_marker_catalog::{CatalogEntry, CatalogError, CatalogProvider, EndpointPaths, HttpCatalog};

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

impl ServerState {
    fn record(&self, path: &str, query: HashMap<String, String>) {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_string(), query));
    }

    fn requests(&self) -> Vec<(String, HashMap<String, String>)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn applications(State(state): State<ServerState>) -> impl IntoResponse {
    state.record("applications", HashMap::new());
    Json(json!([
        {"id": "APP1", "name": "Portal", "modules": [{"id": "M1", "name": "Auth"}]},
        {"id": 7, "name": "Legacy"}
    ]))
}

async fn modules(
    State(state): State<ServerState>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let application_id = query.get("application_id").cloned().unwrap_or_default();
    state.record("modules", query);
    match application_id.as_str() {
        "APP1" => Json(json!({"modules": [
            {"id": "M2", "name": "Billing"},
            {"id": "M1", "name": "Auth"}
        ]}))
        .into_response(),
        "BROKEN" => Json(json!({"status": "failed", "message": "Please input application name"}))
            .into_response(),
        "CRASH" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "try later").into_response(),
    }
}

async fn functions(
    State(state): State<ServerState>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.record("functions", query);
    Json(json!({"functions": [{"id": "F1", "name": "Login"}]}))
}

async fn spawn_catalog_server() -> (String, ServerState) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = ServerState::default();
    let app = Router::new()
        .route("/ui_marker/applications", get(applications))
        .route("/ui_marker/get_modules_by_application", get(modules))
        .route("/ui_marker/get_functions_by_module", get(functions))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), state)
}

fn catalog(base_url: &str, max_retries: u32) -> HttpCatalog {
    HttpCatalog::with_options(base_url, EndpointPaths::default(), 5, 5, max_retries).unwrap()
}

#[tokio::test]
async fn modules_keep_response_order() {
    let (url, state) = spawn_catalog_server().await;
    let modules = catalog(&url, 0).list_modules("APP1").await.unwrap();

    assert_eq!(
        modules,
        vec![
            CatalogEntry::new("M2", "Billing"),
            CatalogEntry::new("M1", "Auth")
        ]
    );
    let requests = state.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1.get("application_id").map(String::as_str), Some("APP1"));
}

#[tokio::test]
async fn functions_send_both_identifiers() {
    let (url, state) = spawn_catalog_server().await;
    let functions = catalog(&url, 0).list_functions("APP1", "M1").await.unwrap();

    assert_eq!(functions, vec![CatalogEntry::new("F1", "Login")]);
    let requests = state.requests();
    assert_eq!(requests[0].0, "functions");
    assert_eq!(requests[0].1.get("application_id").map(String::as_str), Some("APP1"));
    assert_eq!(requests[0].1.get("module_id").map(String::as_str), Some("M1"));
}

#[tokio::test]
async fn applications_read_id_and_name_only() {
    let (url, _) = spawn_catalog_server().await;
    let apps = catalog(&url, 0).list_applications().await.unwrap();
    assert_eq!(
        apps,
        vec![
            CatalogEntry::new("APP1", "Portal"),
            CatalogEntry::new("7", "Legacy")
        ]
    );
}

#[tokio::test]
async fn body_without_modules_is_malformed() {
    let (url, _) = spawn_catalog_server().await;
    let result = catalog(&url, 0).list_modules("BROKEN").await;
    assert!(
        matches!(result, Err(CatalogError::MalformedResponse { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let (url, state) = spawn_catalog_server().await;
    let result = catalog(&url, 3).list_modules("CRASH").await;

    assert!(matches!(
        result,
        Err(CatalogError::HttpStatus { status: 500, .. })
    ));
    assert_eq!(state.requests().len(), 1);
}

#[tokio::test]
async fn unavailable_is_retried_then_reported() {
    let (url, state) = spawn_catalog_server().await;
    let result = catalog(&url, 1).list_modules("DOWN").await;

    assert!(matches!(result, Err(CatalogError::NetworkError { .. })));
    assert_eq!(state.requests().len(), 2);
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = catalog(&format!("http://{addr}"), 0)
        .list_modules("APP1")
        .await;
    assert!(matches!(
        result,
        Err(CatalogError::NetworkError { .. } | CatalogError::Timeout { .. })
    ));
}
