// SPDX-License-Identifier: Apache-2.0

use crate::ProxyErrorKind;

pub const PROXY_ERROR_SCHEMA_REF: &str = "#/components/schemas/ProxyErrorEnvelope";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyErrorMapping {
    pub status_code: u16,
    pub schema_ref: &'static str,
}

/// Status code for each failure kind. Parse failures are reported inline
/// with a success status so the view can still render the panel.
#[must_use]
pub fn map_error(kind: ProxyErrorKind) -> ProxyErrorMapping {
    let status_code = match kind {
        ProxyErrorKind::InputValidation => 400,
        ProxyErrorKind::Configuration => 500,
        ProxyErrorKind::Auth | ProxyErrorKind::Upstream | ProxyErrorKind::Transport => 502,
        ProxyErrorKind::Parse => 200,
    };

    ProxyErrorMapping {
        status_code,
        schema_ref: PROXY_ERROR_SCHEMA_REF,
    }
}
