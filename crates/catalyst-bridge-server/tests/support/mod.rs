// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use catalyst_bridge_server::{
    build_router, AccessToken, AppState, BridgeConfig, ProxyError, ServiceCredential,
    TokenProvider,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    pub fn push(&self, path: &str, headers: HeaderMap, body: Value) {
        self.0.lock().expect("recorder lock").push(Recorded {
            path: path.to_string(),
            headers,
            body,
        });
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.0.lock().expect("recorder lock").clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Recorded> {
        self.calls().into_iter().filter(|c| c.path == path).collect()
    }
}

pub fn header(call: &Recorded, name: &str) -> Option<String> {
    call.headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

/// Token route that hands out `tok-1`, `tok-2`, ... and records each call.
pub fn token_router(recorder: Recorder) -> Router {
    let issued = Arc::new(AtomicUsize::new(0));
    Router::new().route(
        "/token",
        post(move |headers: HeaderMap, body: String| {
            let recorder = recorder.clone();
            let issued = Arc::clone(&issued);
            async move {
                let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
                recorder.push("/token", headers, parsed);
                let n = issued.fetch_add(1, Ordering::SeqCst) + 1;
                Json(json!({"access_token": format!("tok-{n}"), "token_type": "Bearer"}))
            }
        }),
    )
}

pub fn lookup_config(pairs: Vec<(&'static str, String)>) -> BridgeConfig {
    BridgeConfig::from_lookup(move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    })
}

/// Full credential set pointing at `upstream`, plus any extra settings.
pub fn bridge_config(upstream: SocketAddr, extra: &[(&'static str, &str)]) -> BridgeConfig {
    let mut pairs = vec![
        ("BRIDGE_AUTH_URL", format!("http://{upstream}/token")),
        ("BRIDGE_AUTH_RESOURCE", "catalyst".to_string()),
        ("BRIDGE_AUTH_APP_ID", "bridge-app".to_string()),
        ("BRIDGE_AUTH_APP_KEY", "bridge-key".to_string()),
        ("BRIDGE_POLICY_API_BASE_URL", format!("http://{upstream}/")),
    ];
    pairs.extend(extra.iter().map(|(k, v)| (*k, (*v).to_string())));
    lookup_config(pairs)
}

pub async fn spawn_bridge(config: BridgeConfig) -> String {
    let addr = spawn(build_router(AppState::new(config))).await;
    format!("http://{addr}")
}

/// Token provider that counts calls and always succeeds.
#[derive(Default)]
pub struct CountingTokens {
    pub calls: AtomicUsize,
}

#[async_trait]
impl TokenProvider for CountingTokens {
    async fn acquire(&self, _credential: &ServiceCredential) -> Result<AccessToken, ProxyError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AccessToken::new(format!("fake-{n}")))
    }
}

pub async fn spawn_bridge_with_tokens(config: BridgeConfig, tokens: Arc<CountingTokens>) -> String {
    let addr = spawn(build_router(AppState::with_token_provider(config, tokens))).await;
    format!("http://{addr}")
}
