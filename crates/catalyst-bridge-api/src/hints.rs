// SPDX-License-Identifier: Apache-2.0

pub const NO_DOCUMENTS_MESSAGE: &str =
    "Catalyst API returned 200 but no document list found. Check server logs for response shape.";
pub const NO_POLICIES_MESSAGE: &str =
    "Catalyst API returned 200 but no policy list found. Check server logs for response shape.";

pub const DOCUMENTS_NOT_FOUND_HINT: &str = "Set BRIDGE_DOCUMENTS_SEARCH_URL to the exact document search URL, \
or set BRIDGE_DOCUMENTS_USE_POLICY_BASE=true to search against BRIDGE_POLICY_API_BASE_URL, \
or set BRIDGE_DOCUMENTS_SEARCH_PATH to try another path.";

pub const DOWNLOAD_UNAUTHORIZED_HINT: &str = "Download endpoint returned 401 (token rejected). \
The document API may require a different auth scope or token than search. \
Check whether download uses the same token resource as document search.";

pub const DOWNLOAD_FORBIDDEN_HINT: &str = "Check that the impersonation identity is correct and that \
the document API allows download with this token. If the API expects a different impersonation \
header name, set BRIDGE_IMPERSONATE_HEADER (e.g. X-Impersonate-Id).";

/// Advisory text attached to a failed download. Only 401 and 403 carry one.
#[must_use]
pub fn download_failure_hint(status: u16) -> Option<&'static str> {
    match status {
        401 => Some(DOWNLOAD_UNAUTHORIZED_HINT),
        403 => Some(DOWNLOAD_FORBIDDEN_HINT),
        _ => None,
    }
}
