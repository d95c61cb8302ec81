// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]
//! Client-facing contract of the bridge. Pure types and helpers; the server
//! crate owns all I/O.

mod disposition;
mod dto;
pub mod error_mapping;
mod errors;
mod hints;
pub mod openapi;
pub mod params;
mod preview;

pub use disposition::{
    attachment_disposition, fallback_filename, resolve_disposition, DEFAULT_CONTENT_TYPE,
};
pub use dto::{DocumentsResponse, HealthResponse, PolicySearchResponse, VersionResponse};
pub use error_mapping::{map_error, ProxyErrorMapping, PROXY_ERROR_SCHEMA_REF};
pub use errors::{ProxyErrorEnvelope, ProxyErrorKind};
pub use hints::{
    download_failure_hint, DOCUMENTS_NOT_FOUND_HINT, DOWNLOAD_FORBIDDEN_HINT,
    DOWNLOAD_UNAUTHORIZED_HINT, NO_DOCUMENTS_MESSAGE, NO_POLICIES_MESSAGE,
};
pub use openapi::openapi_spec;
pub use params::{
    parse_documents_params, parse_download_params, parse_policy_search_params, DocumentsParams,
    DownloadParams, ParamError, PolicySearchParams,
};
pub use preview::{
    documents_error_message, preview, DOCUMENTS_MESSAGE_PREVIEW_CHARS, ERROR_BODY_PREVIEW_CHARS,
};

pub const CRATE_NAME: &str = "catalyst-bridge-api";
