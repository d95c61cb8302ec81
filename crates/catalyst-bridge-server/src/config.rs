// SPDX-License-Identifier: Apache-2.0

use crate::ProxyError;
use catalyst_bridge_api::{DOCUMENTS_MESSAGE_PREVIEW_CHARS, ERROR_BODY_PREVIEW_CHARS};
use reqwest::Url;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_AUTH_API_VERSION: &str = "1";
pub const DEFAULT_POLICY_SEARCH_PATH: &str = "/policy/policies/search";
pub const DEFAULT_DOCUMENTS_SEARCH_PATH: &str = "/CatalystDocumentAPI/documents/search";
pub const DEFAULT_DOWNLOAD_PATH: &str = "/CatalystDocumentAPI/documents";
pub const DEFAULT_DOWNLOAD_API_VERSION: &str = "1";
pub const DEFAULT_IMPERSONATE_HEADER: &str = "ImpersonateId";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 15_000;

/// Auth settings exactly as configured. Any of the required fields may be
/// missing; [`BridgeConfig::credential`] decides per request.
#[derive(Clone, Default)]
pub struct AuthSettings {
    pub url: Option<String>,
    pub api_version: String,
    pub resource: Option<String>,
    pub app_id: Option<String>,
    pub app_key: Option<String>,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("url", &self.url)
            .field("api_version", &self.api_version)
            .field("resource", &self.resource)
            .field("app_id", &self.app_id)
            .field("app_key", &self.app_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Complete credential for one token call.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredential {
    pub auth_url: String,
    pub api_version: String,
    pub resource: String,
    pub app_id: String,
    pub app_key: String,
}

impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredential")
            .field("auth_url", &self.auth_url)
            .field("api_version", &self.api_version)
            .field("resource", &self.resource)
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

/// Identity asserted on behalf of the operator. Each route has its own
/// optional setting; unset routes use `shared`.
#[derive(Debug, Clone)]
pub struct ImpersonationConfig {
    pub shared: String,
    pub policy_search: Option<String>,
    pub documents: Option<String>,
    pub download: Option<String>,
    pub header: String,
}

impl Default for ImpersonationConfig {
    fn default() -> Self {
        Self {
            shared: String::new(),
            policy_search: None,
            documents: None,
            download: None,
            header: DEFAULT_IMPERSONATE_HEADER.to_string(),
        }
    }
}

impl ImpersonationConfig {
    #[must_use]
    pub fn policy_search(&self) -> &str {
        self.policy_search.as_deref().unwrap_or(&self.shared)
    }

    #[must_use]
    pub fn documents(&self) -> &str {
        self.documents.as_deref().unwrap_or(&self.shared)
    }

    #[must_use]
    pub fn download(&self) -> &str {
        self.download.as_deref().unwrap_or(&self.shared)
    }
}

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub bind_addr: String,
    pub log_json: bool,
    pub auth: AuthSettings,
    pub policy_base_url: Option<String>,
    pub policy_search_path: String,
    pub document_base_url: Option<String>,
    pub documents_use_policy_base: bool,
    pub documents_search_url: Option<String>,
    pub documents_search_path: String,
    pub download_base_url: Option<String>,
    pub download_path: String,
    pub download_api_version: String,
    pub impersonation: ImpersonationConfig,
    pub upstream_timeout: Duration,
    pub error_preview_chars: usize,
    pub documents_error_preview_chars: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log_json: true,
            auth: AuthSettings {
                api_version: DEFAULT_AUTH_API_VERSION.to_string(),
                ..AuthSettings::default()
            },
            policy_base_url: None,
            policy_search_path: DEFAULT_POLICY_SEARCH_PATH.to_string(),
            document_base_url: None,
            documents_use_policy_base: false,
            documents_search_url: None,
            documents_search_path: DEFAULT_DOCUMENTS_SEARCH_PATH.to_string(),
            download_base_url: None,
            download_path: DEFAULT_DOWNLOAD_PATH.to_string(),
            download_api_version: DEFAULT_DOWNLOAD_API_VERSION.to_string(),
            impersonation: ImpersonationConfig::default(),
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
            error_preview_chars: ERROR_BODY_PREVIEW_CHARS,
            documents_error_preview_chars: DOCUMENTS_MESSAGE_PREVIEW_CHARS,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

fn normalize_base(raw: String) -> String {
    raw.trim_end_matches('/').to_string()
}

fn normalize_path(raw: String) -> String {
    if raw.starts_with('/') {
        raw
    } else {
        format!("/{raw}")
    }
}

impl BridgeConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get_bool = |key: &str, default: bool| {
            get(key)
                .and_then(|v| parse_bool(v.trim()))
                .unwrap_or(default)
        };
        let get_usize = |key: &str, default: usize| {
            get(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(default)
        };
        let defaults = Self::default();

        Self {
            bind_addr: get("BRIDGE_BIND").unwrap_or(defaults.bind_addr),
            log_json: get_bool("BRIDGE_LOG_JSON", defaults.log_json),
            auth: AuthSettings {
                url: get("BRIDGE_AUTH_URL"),
                api_version: get("BRIDGE_AUTH_API_VERSION").unwrap_or(defaults.auth.api_version),
                resource: get("BRIDGE_AUTH_RESOURCE"),
                app_id: get("BRIDGE_AUTH_APP_ID"),
                app_key: get("BRIDGE_AUTH_APP_KEY"),
            },
            policy_base_url: get("BRIDGE_POLICY_API_BASE_URL").map(normalize_base),
            policy_search_path: get("BRIDGE_POLICY_SEARCH_PATH")
                .map(normalize_path)
                .unwrap_or(defaults.policy_search_path),
            document_base_url: get("BRIDGE_DOCUMENT_API_BASE_URL").map(normalize_base),
            documents_use_policy_base: get_bool(
                "BRIDGE_DOCUMENTS_USE_POLICY_BASE",
                defaults.documents_use_policy_base,
            ),
            documents_search_url: get("BRIDGE_DOCUMENTS_SEARCH_URL"),
            documents_search_path: get("BRIDGE_DOCUMENTS_SEARCH_PATH")
                .map(normalize_path)
                .unwrap_or(defaults.documents_search_path),
            download_base_url: get("BRIDGE_DOCUMENTS_DOWNLOAD_BASE_URL").map(normalize_base),
            download_path: get("BRIDGE_DOCUMENTS_DOWNLOAD_PATH")
                .map(normalize_path)
                .unwrap_or(defaults.download_path),
            download_api_version: get("BRIDGE_DOCUMENTS_DOWNLOAD_API_VERSION")
                .unwrap_or(defaults.download_api_version),
            impersonation: ImpersonationConfig {
                shared: get("BRIDGE_IMPERSONATE_ID").unwrap_or_default(),
                policy_search: get("BRIDGE_POLICY_SEARCH_IMPERSONATE_ID"),
                documents: get("BRIDGE_DOCUMENTS_IMPERSONATE_ID"),
                download: get("BRIDGE_DOWNLOAD_IMPERSONATE_ID"),
                header: get("BRIDGE_IMPERSONATE_HEADER")
                    .map(|v| v.trim().to_string())
                    .unwrap_or(defaults.impersonation.header),
            },
            upstream_timeout: get("BRIDGE_UPSTREAM_TIMEOUT_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map_or(defaults.upstream_timeout, Duration::from_millis),
            error_preview_chars: get_usize(
                "BRIDGE_ERROR_PREVIEW_CHARS",
                defaults.error_preview_chars,
            ),
            documents_error_preview_chars: get_usize(
                "BRIDGE_DOCUMENTS_ERROR_PREVIEW_CHARS",
                defaults.documents_error_preview_chars,
            ),
        }
    }

    /// The token credential, or a configuration error naming every missing
    /// setting.
    pub fn credential(&self) -> Result<ServiceCredential, ProxyError> {
        let required = [
            ("BRIDGE_AUTH_URL", &self.auth.url),
            ("BRIDGE_AUTH_RESOURCE", &self.auth.resource),
            ("BRIDGE_AUTH_APP_ID", &self.auth.app_id),
            ("BRIDGE_AUTH_APP_KEY", &self.auth.app_key),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        match (
            &self.auth.url,
            &self.auth.resource,
            &self.auth.app_id,
            &self.auth.app_key,
        ) {
            (Some(url), Some(resource), Some(app_id), Some(app_key)) => Ok(ServiceCredential {
                auth_url: url.clone(),
                api_version: self.auth.api_version.clone(),
                resource: resource.clone(),
                app_id: app_id.clone(),
                app_key: app_key.clone(),
            }),
            _ => Err(ProxyError::Configuration(format!(
                "Bridge is not fully configured. Missing: {}.",
                missing.join(", ")
            ))),
        }
    }

    pub fn policy_search_url(&self) -> Result<String, ProxyError> {
        self.policy_base_url
            .as_ref()
            .map(|base| format!("{base}{}", self.policy_search_path))
            .ok_or_else(|| {
                ProxyError::Configuration(
                    "Policy search is not configured. Set BRIDGE_POLICY_API_BASE_URL.".to_string(),
                )
            })
    }

    /// Document search target: the explicit override, else the chosen base
    /// plus the search path. `None` means document search is not configured.
    #[must_use]
    pub fn documents_search_url(&self) -> Option<String> {
        if let Some(url) = &self.documents_search_url {
            return Some(url.clone());
        }
        let base = if self.documents_use_policy_base {
            self.policy_base_url.as_ref()
        } else {
            self.document_base_url
                .as_ref()
                .or(self.policy_base_url.as_ref())
        };
        base.map(|base| format!("{base}{}", self.documents_search_path))
    }

    /// `<base><path>/<id>/download?api-version=<v>` with the id
    /// percent-encoded as a single path segment.
    pub fn download_url(&self, doc_id: &str) -> Result<Url, ProxyError> {
        let base = self
            .download_base_url
            .as_ref()
            .or(self.document_base_url.as_ref())
            .or(self.policy_base_url.as_ref())
            .ok_or_else(|| {
                ProxyError::Configuration(
                    "Document download URL not configured (BRIDGE_DOCUMENT_API_BASE_URL or BRIDGE_DOCUMENTS_DOWNLOAD_BASE_URL)."
                        .to_string(),
                )
            })?;
        let raw = format!("{base}{}", self.download_path);
        let mut url = Url::parse(&raw).map_err(|e| {
            ProxyError::Configuration(format!("invalid document download URL {raw}: {e}"))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ProxyError::Configuration(format!("document download URL {raw} cannot take a path"))
            })?
            .pop_if_empty()
            .push(doc_id)
            .push("download");
        url.query_pairs_mut()
            .append_pair("api-version", &self.download_api_version);
        Ok(url)
    }
}

/// Checks run once before the listener binds. Missing credentials are not
/// checked here; they surface per request.
pub fn validate_startup_config(config: &BridgeConfig) -> Result<(), String> {
    if config.upstream_timeout.is_zero() {
        return Err("upstream timeout must be > 0".to_string());
    }
    if config.error_preview_chars == 0 || config.documents_error_preview_chars == 0 {
        return Err("error preview lengths must be > 0".to_string());
    }
    if config.impersonation.header.is_empty() {
        return Err("impersonation header name must be non-empty".to_string());
    }
    if axum::http::HeaderName::from_bytes(config.impersonation.header.as_bytes()).is_err() {
        return Err(format!(
            "impersonation header name is not a valid header: {}",
            config.impersonation.header
        ));
    }
    Ok(())
}
