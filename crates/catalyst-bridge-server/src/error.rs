// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalyst_bridge_api::{map_error, ParamError, ProxyErrorEnvelope, ProxyErrorKind};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{0}")]
    Configuration(String),

    #[error("{message}")]
    Auth {
        message: String,
        status: u16,
        body: String,
    },

    #[error("{message}")]
    Upstream {
        message: String,
        status: u16,
        body: String,
        hint: Option<String>,
        tried_url: Option<String>,
    },

    #[error("{message}")]
    Parse { message: String, body: String },

    #[error("{0}")]
    InputValidation(String),

    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ProxyError {
    #[must_use]
    pub fn kind(&self) -> ProxyErrorKind {
        match self {
            Self::Configuration(_) => ProxyErrorKind::Configuration,
            Self::Auth { .. } => ProxyErrorKind::Auth,
            Self::Upstream { .. } => ProxyErrorKind::Upstream,
            Self::Parse { .. } => ProxyErrorKind::Parse,
            Self::InputValidation(_) => ProxyErrorKind::InputValidation,
            Self::Transport { .. } => ProxyErrorKind::Transport,
        }
    }

    #[must_use]
    pub fn transport(context: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Transport { context, source }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(map_error(self.kind()).status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn envelope(&self) -> ProxyErrorEnvelope {
        let envelope = ProxyErrorEnvelope::new(self.to_string());
        match self {
            Self::Auth { status, body, .. } => envelope.with_status(*status).with_body(body.clone()),
            Self::Upstream {
                status,
                body,
                hint,
                tried_url,
                ..
            } => {
                let mut envelope = envelope.with_status(*status).with_body(body.clone());
                if let Some(hint) = hint {
                    envelope = envelope.with_hint(hint.clone());
                }
                if let Some(url) = tried_url {
                    envelope = envelope.with_tried_url(url.clone());
                }
                envelope
            }
            Self::Parse { body, .. } => envelope.with_body(body.clone()),
            Self::Configuration(_) | Self::InputValidation(_) | Self::Transport { .. } => envelope,
        }
    }
}

impl From<ParamError> for ProxyError {
    fn from(err: ParamError) -> Self {
        Self::InputValidation(err.message)
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let kind = self.kind().as_str();
        match &self {
            Self::Configuration(message) => error!(kind, %message, "bridge configuration error"),
            Self::InputValidation(message) => info!(kind, %message, "rejected request"),
            Self::Auth { status, .. } | Self::Upstream { status, .. } => {
                warn!(kind, upstream_status = *status, error = %self, "upstream call failed");
            }
            Self::Parse { .. } | Self::Transport { .. } => warn!(kind, error = %self, "upstream call failed"),
        }
        (self.status_code(), Json(self.envelope())).into_response()
    }
}
