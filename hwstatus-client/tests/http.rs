//! Runs the real clients against a throwaway axum server bound to a random
//! local port.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::routing::{get, post};
use axum::{Json, Router};
use hwstatus_client::{ClientError, PracticumClient, TelegramClient};
use serde_json::{Value, json};

const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn homework_statuses(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "OAuth practicum-token");
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"code": "not_authenticated"})),
        );
    }

    let from_date = params.get("from_date").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "homeworks": [{
                "homework_name": "hw42",
                "status": "reviewing",
                "date_updated": "2023-01-01T12:00:00Z"
            }],
            "from_date": from_date
        })),
    )
}

fn practicum_app() -> Router {
    Router::new().route(STATUSES_PATH, get(homework_statuses))
}

// --- review API ---

#[tokio::test]
async fn homework_statuses_sends_token_and_watermark() {
    let base = serve(practicum_app()).await;
    let client = PracticumClient::new(format!("{base}{STATUSES_PATH}"), "practicum-token");

    let response = client.homework_statuses(1_672_574_400).await.unwrap();

    assert_eq!(response["from_date"], "1672574400");
    assert_eq!(response["homeworks"][0]["homework_name"], "hw42");
}

#[tokio::test]
async fn homework_statuses_wrong_token_is_unexpected_status() {
    let base = serve(practicum_app()).await;
    let client = PracticumClient::new(format!("{base}{STATUSES_PATH}"), "wrong");

    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedStatus { status: 401, .. }));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn homework_statuses_server_error() {
    let app = Router::new().route(
        STATUSES_PATH,
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base = serve(app).await;
    let client = PracticumClient::new(format!("{base}{STATUSES_PATH}"), "practicum-token");

    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(err.is_server_error());
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn homework_statuses_non_json_body_is_decode_error() {
    let app = Router::new().route(STATUSES_PATH, get(|| async { "<html>oops</html>" }));
    let base = serve(app).await;
    let client = PracticumClient::new(format!("{base}{STATUSES_PATH}"), "practicum-token");

    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn homework_statuses_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PracticumClient::new(format!("http://{addr}{STATUSES_PATH}"), "practicum-token");
    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(err.is_transport());
}

// --- messaging API ---

async fn send_message(Path(bot): Path<String>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if bot != "bot123:abc" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"ok": false, "error_code": 401, "description": "Unauthorized"})),
        );
    }
    if body["chat_id"] == "blocked" {
        return (
            StatusCode::OK,
            Json(json!({"ok": false, "description": "Forbidden: bot was blocked by the user"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"ok": true, "result": {"message_id": 1, "text": body["text"]}})),
    )
}

fn telegram_app() -> Router {
    Router::new().route("/{bot}/sendMessage", post(send_message))
}

#[tokio::test]
async fn send_message_delivers() {
    let base = serve(telegram_app()).await;
    let client = TelegramClient::new(base, "123:abc");

    client.send_message("42", "Привет").await.unwrap();
}

#[tokio::test]
async fn send_message_bad_token() {
    let base = serve(telegram_app()).await;
    let client = TelegramClient::new(base, "999:zzz");

    let err = client.send_message("42", "hi").await.unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedStatus { status: 401, .. }));
}

#[tokio::test]
async fn send_message_not_ok_is_rejected() {
    let base = serve(telegram_app()).await;
    let client = TelegramClient::new(base, "123:abc");

    let err = client.send_message("blocked", "hi").await.unwrap_err();

    match err {
        ClientError::Rejected(description) => assert!(description.contains("blocked")),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn send_message_transport_error_hides_token() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TelegramClient::new(format!("http://{addr}"), "123:secret");
    let err = client.send_message("42", "hi").await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.to_string().contains("secret"));
}
