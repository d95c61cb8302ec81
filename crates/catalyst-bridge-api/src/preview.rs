// SPDX-License-Identifier: Apache-2.0

pub const ERROR_BODY_PREVIEW_CHARS: usize = 500;
pub const DOCUMENTS_MESSAGE_PREVIEW_CHARS: usize = 400;

/// First `max_chars` characters of an upstream body. Counts characters, not
/// bytes, so multi-byte text is never split.
#[must_use]
pub fn preview(raw: &str, max_chars: usize) -> String {
    raw.chars().take(max_chars).collect()
}

/// `Documents API error <status>: <preview or reason phrase>`.
#[must_use]
pub fn documents_error_message(status: u16, reason: &str, raw: &str, max_chars: usize) -> String {
    let head = preview(raw, max_chars);
    let detail = if head.is_empty() { reason } else { head.as_str() };
    format!("Documents API error {status}: {detail}")
}
