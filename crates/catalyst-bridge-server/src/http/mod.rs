// SPDX-License-Identifier: Apache-2.0

pub(crate) mod documents;
pub(crate) mod download;
pub(crate) mod handlers;
pub(crate) mod policies;
pub(crate) mod request_tracing;
