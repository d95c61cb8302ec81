// SPDX-License-Identifier: Apache-2.0

mod support;

use axum::body::Body;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use catalyst_bridge_api::{DOWNLOAD_FORBIDDEN_HINT, DOWNLOAD_UNAUTHORIZED_HINT};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use support::{bridge_config, header, spawn, spawn_bridge, token_router, Recorder};

const PDF_BYTES: &[u8] = b"%PDF-1.7 fake";

async fn serve_document(id: String) -> Response {
    match id.as_str() {
        "denied" => (StatusCode::UNAUTHORIZED, "token rejected").into_response(),
        "forbidden" => (StatusCode::FORBIDDEN, "not yours").into_response(),
        "gone" => (StatusCode::NOT_FOUND, "").into_response(),
        "named" => (
            StatusCode::OK,
            [
                ("content-type", "application/pdf"),
                ("content-disposition", "attachment; filename=\"a.pdf\""),
            ],
            PDF_BYTES,
        )
            .into_response(),
        "untyped" => (StatusCode::OK, Body::from("raw bytes")).into_response(),
        _ => (StatusCode::OK, [("content-type", "application/pdf")], PDF_BYTES).into_response(),
    }
}

/// Mock document API that records the path id, query and headers of each
/// download.
async fn spawn_upstream(recorder: &Recorder) -> std::net::SocketAddr {
    let seen = recorder.clone();
    let app = token_router(recorder.clone()).route(
        "/CatalystDocumentAPI/documents/:id/download",
        get(
            move |Path(id): Path<String>,
                  Query(query): Query<BTreeMap<String, String>>,
                  headers: HeaderMap| {
                let seen = seen.clone();
                async move {
                    seen.push("/download", headers, json!({"id": id.clone(), "query": query}));
                    serve_document(id).await
                }
            },
        ),
    );
    spawn(app).await
}

async fn download(url: &str) -> reqwest::Response {
    reqwest::get(url).await.expect("bridge request")
}

fn response_header(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[tokio::test]
async fn upstream_disposition_wins_over_requested_filename() {
    let recorder = Recorder::default();
    let addr = spawn_upstream(&recorder).await;
    let bridge = spawn_bridge(bridge_config(addr, &[])).await;

    let response = download(&format!("{bridge}/documents/named/download?filename=b.pdf")).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response_header(&response, "content-disposition").as_deref(),
        Some("attachment; filename=\"a.pdf\"")
    );
    assert_eq!(
        response_header(&response, "content-type").as_deref(),
        Some("application/pdf")
    );
    assert_eq!(&response.bytes().await.expect("bytes")[..], PDF_BYTES);
}

#[tokio::test]
async fn requested_filename_is_used_when_upstream_names_nothing() {
    let recorder = Recorder::default();
    let addr = spawn_upstream(&recorder).await;
    let bridge = spawn_bridge(bridge_config(addr, &[])).await;

    let response = download(&format!("{bridge}/documents/d1/download?filename=b.pdf")).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response_header(&response, "content-disposition").as_deref(),
        Some("attachment; filename=\"b.pdf\"")
    );
    assert_eq!(&response.bytes().await.expect("bytes")[..], PDF_BYTES);
}

#[tokio::test]
async fn fallback_filename_and_content_type_apply_when_nothing_is_known() {
    let recorder = Recorder::default();
    let addr = spawn_upstream(&recorder).await;
    let bridge = spawn_bridge(bridge_config(addr, &[])).await;

    let response = download(&format!("{bridge}/documents/untyped/download")).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response_header(&response, "content-disposition").as_deref(),
        Some("attachment; filename=\"document-untyped\"")
    );
    assert_eq!(
        response_header(&response, "content-type").as_deref(),
        Some("application/octet-stream")
    );
    assert_eq!(response.text().await.expect("text"), "raw bytes");
}

#[tokio::test]
async fn unauthorized_and_forbidden_downloads_carry_hints() {
    let recorder = Recorder::default();
    let addr = spawn_upstream(&recorder).await;
    let bridge = spawn_bridge(bridge_config(addr, &[])).await;

    let response = download(&format!("{bridge}/documents/denied/download")).await;
    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["error"], "Document download failed: 401");
    assert_eq!(body["status"], 401);
    assert_eq!(body["body"], "token rejected");
    assert_eq!(body["hint"], DOWNLOAD_UNAUTHORIZED_HINT);

    let response = download(&format!("{bridge}/documents/forbidden/download")).await;
    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["status"], 403);
    assert_eq!(body["hint"], DOWNLOAD_FORBIDDEN_HINT);

    let response = download(&format!("{bridge}/documents/gone/download")).await;
    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.expect("json");
    assert_eq!(body["status"], 404);
    assert!(body.get("hint").is_none());
}

#[tokio::test]
async fn download_request_carries_version_bearer_and_configured_impersonation_header() {
    let recorder = Recorder::default();
    let addr = spawn_upstream(&recorder).await;
    let bridge = spawn_bridge(bridge_config(
        addr,
        &[
            ("BRIDGE_IMPERSONATE_HEADER", "X-Impersonate-Id"),
            ("BRIDGE_DOWNLOAD_IMPERSONATE_ID", "files@example.com"),
            ("BRIDGE_DOCUMENTS_DOWNLOAD_API_VERSION", "3"),
        ],
    ))
    .await;

    let response = download(&format!("{bridge}/documents/d1/download")).await;
    assert_eq!(response.status().as_u16(), 200);

    let calls = recorder.calls_to("/download");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body["id"], "d1");
    assert_eq!(calls[0].body["query"]["api-version"], "3");
    assert_eq!(header(&calls[0], "authorization").as_deref(), Some("Bearer tok-1"));
    assert_eq!(header(&calls[0], "apiversion").as_deref(), Some("3"));
    assert_eq!(
        header(&calls[0], "x-impersonate-id").as_deref(),
        Some("files@example.com")
    );
    assert!(header(&calls[0], "impersonateid").is_none());
}

#[tokio::test]
async fn empty_identity_sends_no_impersonation_header() {
    let recorder = Recorder::default();
    let addr = spawn_upstream(&recorder).await;
    let bridge = spawn_bridge(bridge_config(addr, &[])).await;

    let response = download(&format!("{bridge}/documents/d1/download")).await;
    assert_eq!(response.status().as_u16(), 200);

    let calls = recorder.calls_to("/download");
    assert_eq!(calls.len(), 1);
    assert!(header(&calls[0], "impersonateid").is_none());
    assert_eq!(calls[0].body["query"]["api-version"], "1");
}

#[tokio::test]
async fn document_id_is_encoded_as_one_path_segment() {
    let recorder = Recorder::default();
    let addr = spawn_upstream(&recorder).await;
    let bridge = spawn_bridge(bridge_config(addr, &[])).await;

    let response = download(&format!("{bridge}/documents/two%20words/download")).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response_header(&response, "content-disposition").as_deref(),
        Some("attachment; filename=\"document-two words\"")
    );

    let calls = recorder.calls_to("/download");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body["id"], "two words");
}
