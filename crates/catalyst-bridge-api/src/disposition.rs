// SPDX-License-Identifier: Apache-2.0

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[must_use]
pub fn fallback_filename(doc_id: &str) -> String {
    format!("document-{doc_id}")
}

/// `attachment; filename="<name>"` with quotes, backslashes and control
/// characters dropped from the name.
#[must_use]
pub fn attachment_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .filter(|c| !matches!(c, '"' | '\\') && !c.is_control())
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

/// Content-Disposition to hand the client: the upstream header verbatim,
/// else one built from the caller's filename, else `document-<id>`.
#[must_use]
pub fn resolve_disposition(upstream: Option<&str>, filename: Option<&str>, doc_id: &str) -> String {
    if let Some(header) = upstream.filter(|h| !h.trim().is_empty()) {
        return header.to_string();
    }
    match filename {
        Some(name) => attachment_disposition(name),
        None => attachment_disposition(&fallback_filename(doc_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_header_wins_over_caller_filename() {
        assert_eq!(
            resolve_disposition(Some("attachment; filename=\"a.pdf\""), Some("b.pdf"), "7"),
            "attachment; filename=\"a.pdf\""
        );
        assert_eq!(
            resolve_disposition(None, Some("b.pdf"), "7"),
            "attachment; filename=\"b.pdf\""
        );
        assert_eq!(
            resolve_disposition(Some("  "), None, "7"),
            "attachment; filename=\"document-7\""
        );
    }

    #[test]
    fn quotes_in_caller_filename_cannot_break_the_header() {
        assert_eq!(
            attachment_disposition("evil\".pdf\r\n"),
            "attachment; filename=\"evil.pdf\""
        );
    }
}
