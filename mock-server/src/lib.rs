use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(rename = "createdTime")]
    pub created_time: String,
    pub fields: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordList {
    pub records: Vec<Record>,
}

#[derive(Deserialize)]
pub struct RecordFields {
    pub fields: Map<String, Value>,
}

/// Records keyed by `(base, table)`.
pub type Db = Arc<RwLock<HashMap<(String, String), Vec<Record>>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let v0 = Router::new()
        .route("/v0/{base}/{table}", get(list_records).post(create_record))
        .route(
            "/v0/{base}/{table}/{record}",
            get(get_record).patch(update_record).delete(delete_record),
        )
        .route_layer(middleware::from_fn(require_bearer))
        .with_state(db);

    Router::new()
        .route("/status/{code}", any(respond_with_status))
        .route("/echo", any(echo))
        .route("/headers", any(received_headers))
        .merge(v0)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_body(kind: &str, message: &str) -> Json<Value> {
    Json(json!({ "error": { "type": kind, "message": message } }))
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "NOT_FOUND" }))).into_response()
}

fn invalid_request(message: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        error_body("INVALID_REQUEST_UNKNOWN", message),
    )
        .into_response()
}

fn new_record_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("rec{}", &hex[..14])
}

fn now_timestamp() -> String {
    "2024-01-01T00:00:00.000Z".to_string()
}

async fn require_bearer(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer ") && value.len() > "Bearer ".len());
    if !authorized {
        debug!("rejecting {} {}: missing bearer token", request.method(), request.uri());
        return (
            StatusCode::UNAUTHORIZED,
            error_body("AUTHENTICATION_REQUIRED", "Authentication required"),
        )
            .into_response();
    }
    next.run(request).await
}

async fn list_records(
    State(db): State<Db>,
    Path((base, table)): Path<(String, String)>,
) -> Json<RecordList> {
    let db = db.read().await;
    let records = db.get(&(base, table)).cloned().unwrap_or_default();
    Json(RecordList { records })
}

async fn create_record(
    State(db): State<Db>,
    Path((base, table)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let input: RecordFields = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(e) => return invalid_request(&e.to_string()),
    };
    let record = Record {
        id: new_record_id(),
        created_time: now_timestamp(),
        fields: input.fields,
    };
    debug!("creating {} in {base}/{table}", record.id);
    db.write()
        .await
        .entry((base, table))
        .or_default()
        .push(record.clone());
    Json(record).into_response()
}

async fn get_record(
    State(db): State<Db>,
    Path((base, table, record)): Path<(String, String, String)>,
) -> Response {
    let db = db.read().await;
    let found = db
        .get(&(base, table))
        .and_then(|records| records.iter().find(|r| r.id == record))
        .cloned();
    match found {
        Some(r) => Json(r).into_response(),
        None => not_found(),
    }
}

async fn update_record(
    State(db): State<Db>,
    Path((base, table, record)): Path<(String, String, String)>,
    body: Bytes,
) -> Response {
    let input: RecordFields = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(e) => return invalid_request(&e.to_string()),
    };
    let mut db = db.write().await;
    let Some(existing) = db
        .get_mut(&(base, table))
        .and_then(|records| records.iter_mut().find(|r| r.id == record))
    else {
        return not_found();
    };
    existing.fields.extend(input.fields);
    Json(existing.clone()).into_response()
}

async fn delete_record(
    State(db): State<Db>,
    Path((base, table, record)): Path<(String, String, String)>,
) -> Response {
    let mut db = db.write().await;
    let Some(records) = db.get_mut(&(base, table)) else {
        return not_found();
    };
    let before = records.len();
    records.retain(|r| r.id != record);
    if records.len() == before {
        return not_found();
    }
    Json(json!({ "id": record, "deleted": true })).into_response()
}

async fn respond_with_status(Path(code): Path<u16>) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "status": code }))).into_response()
}

/// Replies 200 with the raw request body and the method in `x-echo-method`.
async fn echo(method: Method, body: Bytes) -> Response {
    let mut response = body.into_response();
    if let Ok(value) = HeaderValue::from_str(method.as_str()) {
        response.headers_mut().insert("x-echo-method", value);
    }
    response
}

/// Replies 200 with the received request headers as a JSON object keyed by
/// lowercase header name.
async fn received_headers(headers: HeaderMap) -> Json<Map<String, Value>> {
    let received = headers
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), Value::String(value))
        })
        .collect();
    Json(received)
}
