// SPDX-License-Identifier: Apache-2.0

use crate::upstream;
use crate::{ProxyError, ServiceCredential};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const TOKEN_REQUEST_FAILED: &str =
    "Failed to obtain access token from the authorization endpoint.";
pub const TOKEN_MISSING: &str = "Authorization endpoint did not return access_token.";

/// Bearer token for a single proxied call. Never cached.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn acquire(&self, credential: &ServiceCredential) -> Result<AccessToken, ProxyError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Single-shot POST against the auth endpoint.
#[derive(Debug, Clone)]
pub struct HttpTokenAcquirer {
    timeout: Duration,
}

impl HttpTokenAcquirer {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn credential_headers(credential: &ServiceCredential) -> Result<HeaderMap, ProxyError> {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            ("apiversion", credential.api_version.as_str()),
            ("resource", credential.resource.as_str()),
            ("app_id", credential.app_id.as_str()),
            ("app_key", credential.app_key.as_str()),
        ] {
            let value = HeaderValue::from_str(value).map_err(|_| {
                ProxyError::Configuration(format!("auth setting for header {name} is not a valid header value"))
            })?;
            headers.insert(HeaderName::from_static(name), value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl TokenProvider for HttpTokenAcquirer {
    #[instrument(name = "token_acquire", skip_all, fields(auth_url = %credential.auth_url))]
    async fn acquire(&self, credential: &ServiceCredential) -> Result<AccessToken, ProxyError> {
        let headers = Self::credential_headers(credential)?;
        let response = upstream::client(self.timeout)?
            .post(&credential.auth_url)
            .headers(headers)
            .json(&json!({}))
            .send()
            .await
            .map_err(ProxyError::transport("token request failed"))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(ProxyError::transport("token response read failed"))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "token endpoint rejected credentials");
            return Err(ProxyError::Auth {
                message: TOKEN_REQUEST_FAILED.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let token = serde_json::from_str::<TokenResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.access_token)
            .filter(|token| !token.is_empty());
        match token {
            Some(token) => {
                info!(status = status.as_u16(), "access token acquired");
                Ok(AccessToken(token))
            }
            None => {
                warn!(status = status.as_u16(), "token response carried no access_token");
                Err(ProxyError::Auth {
                    message: TOKEN_MISSING.to_string(),
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(app_key: &str) -> ServiceCredential {
        ServiceCredential {
            auth_url: "http://auth.invalid/token".to_string(),
            api_version: "1".to_string(),
            resource: "res".to_string(),
            app_id: "app".to_string(),
            app_key: app_key.to_string(),
        }
    }

    #[test]
    fn credential_fields_travel_as_headers() {
        let headers = HttpTokenAcquirer::credential_headers(&credential("key")).expect("headers");
        assert_eq!(headers.get("apiVersion").and_then(|v| v.to_str().ok()), Some("1"));
        assert_eq!(headers.get("Resource").and_then(|v| v.to_str().ok()), Some("res"));
        assert_eq!(headers.get("App_ID").and_then(|v| v.to_str().ok()), Some("app"));
        assert_eq!(headers.get("App_Key").and_then(|v| v.to_str().ok()), Some("key"));
    }

    #[test]
    fn invalid_header_values_are_configuration_errors_without_the_secret() {
        let err = HttpTokenAcquirer::credential_headers(&credential("bad\nkey")).expect_err("newline");
        assert!(matches!(err, ProxyError::Configuration(_)));
        assert!(!err.to_string().contains("bad"));
    }

    #[test]
    fn token_debug_is_redacted() {
        assert_eq!(format!("{:?}", AccessToken::new("abc")), "AccessToken(<redacted>)");
    }
}
