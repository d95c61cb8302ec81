// SPDX-License-Identifier: Apache-2.0

use crate::token::AccessToken;
use crate::ProxyError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Fresh client per call; nothing is pooled across requests.
pub(crate) fn client(timeout: Duration) -> Result<reqwest::Client, ProxyError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| {
            ProxyError::Configuration(format!("upstream HTTP client could not be built: {e}"))
        })
}

/// `Authorization: Bearer <token>` plus the lower-case `apiversion` header
/// the Catalyst resource APIs expect.
pub(crate) fn bearer_headers(token: &AccessToken, api_version: &str) -> Result<HeaderMap, ProxyError> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
        .map_err(|_| ProxyError::Configuration("access token is not a valid header value".to_string()))?;
    headers.insert(AUTHORIZATION, bearer);
    let version = HeaderValue::from_str(api_version).map_err(|_| {
        ProxyError::Configuration(format!("api version {api_version} is not a valid header value"))
    })?;
    headers.insert(HeaderName::from_static("apiversion"), version);
    Ok(headers)
}

pub(crate) fn insert_impersonation(
    headers: &mut HeaderMap,
    header: &str,
    identity: &str,
) -> Result<(), ProxyError> {
    if identity.is_empty() {
        return Ok(());
    }
    let name = HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
        ProxyError::Configuration(format!("impersonation header name {header} is invalid"))
    })?;
    let value = HeaderValue::from_str(identity).map_err(|_| {
        ProxyError::Configuration("impersonation identity is not a valid header value".to_string())
    })?;
    headers.insert(name, value);
    Ok(())
}

/// Status and full text body of one upstream call.
#[derive(Debug)]
pub(crate) struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

impl UpstreamReply {
    pub(crate) fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    /// The body as JSON, with an empty body read as `{}`.
    pub(crate) fn json(&self) -> Result<Value, serde_json::Error> {
        if self.body.trim().is_empty() {
            Ok(Value::Object(serde_json::Map::new()))
        } else {
            serde_json::from_str(&self.body)
        }
    }
}

pub(crate) async fn post_json(
    timeout: Duration,
    url: &str,
    headers: HeaderMap,
    body: &Value,
) -> Result<UpstreamReply, ProxyError> {
    let response = client(timeout)?
        .post(url)
        .headers(headers)
        .json(body)
        .send()
        .await
        .map_err(ProxyError::transport("upstream request failed"))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(ProxyError::transport("upstream response read failed"))?;
    Ok(UpstreamReply { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_headers_carry_token_and_version() {
        let headers = bearer_headers(&AccessToken::new("tok"), "2").expect("headers");
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer tok")
        );
        assert_eq!(headers.get("apiversion").and_then(|v| v.to_str().ok()), Some("2"));
    }

    #[test]
    fn empty_identity_skips_the_impersonation_header() {
        let mut headers = HeaderMap::new();
        insert_impersonation(&mut headers, "ImpersonateId", "").expect("no-op");
        assert!(headers.is_empty());
        insert_impersonation(&mut headers, "X-Impersonate-Id", "ops@example.com").expect("insert");
        assert_eq!(
            headers.get("x-impersonate-id").and_then(|v| v.to_str().ok()),
            Some("ops@example.com")
        );
    }

    #[test]
    fn client_builds_with_timeout_and_no_redirects() {
        assert!(client(Duration::from_millis(250)).is_ok());
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        let reply = UpstreamReply {
            status: StatusCode::OK,
            body: "  ".to_string(),
        };
        assert_eq!(reply.json().expect("json"), serde_json::json!({}));
        assert_eq!(reply.reason(), "OK");
    }
}
