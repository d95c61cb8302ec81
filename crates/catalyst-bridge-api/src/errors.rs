// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Failure taxonomy shared by every proxy route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProxyErrorKind {
    InputValidation,
    Configuration,
    Auth,
    Upstream,
    Transport,
    Parse,
}

impl ProxyErrorKind {
    pub const ALL: [Self; 6] = [
        Self::InputValidation,
        Self::Configuration,
        Self::Auth,
        Self::Upstream,
        Self::Transport,
        Self::Parse,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidation => "input_validation",
            Self::Configuration => "configuration",
            Self::Auth => "auth",
            Self::Upstream => "upstream",
            Self::Transport => "transport",
            Self::Parse => "parse",
        }
    }
}

/// Uniform JSON error body. Optional fields are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProxyErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tried_url: Option<String>,
}

impl ProxyErrorEnvelope {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            body: None,
            hint: None,
            tried_url: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_tried_url(mut self, url: impl Into<String>) -> Self {
        self.tried_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_optional_fields_are_omitted() {
        let value = serde_json::to_value(ProxyErrorEnvelope::new("boom")).expect("serialize");
        assert_eq!(value, json!({"error": "boom"}));
    }

    #[test]
    fn tried_url_uses_camel_case() {
        let envelope = ProxyErrorEnvelope::new("nope")
            .with_status(404)
            .with_tried_url("http://upstream/x")
            .with_hint("set the path");
        let value = serde_json::to_value(envelope).expect("serialize");
        assert_eq!(value["triedUrl"], "http://upstream/x");
        assert_eq!(value["status"], 404);
        assert_eq!(value["hint"], "set the path");
    }
}
