//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit a `zoom_client.call` span around every dispatch, with the `method`
//!   and `path` fields, plus the debug events described below.
//! - Enable `metrics` to increment the `zoom_client_call_total` counter for every
//!   attempt/success/failure, labeled by `method` + `outcome`.
//!
//! # Debug Flag
//!
//! [`set_debug`] turns on `DEBUG` events carrying the request URL, query string, JSON body,
//! issued token, and response body. Key and secret values are never emitted.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// std
use std::sync::atomic::{AtomicBool, Ordering};
// self
use crate::{_prelude::*, auth::Secret, http::HttpResponse};

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Enables or disables verbose request/response debug events process-wide.
pub fn set_debug(enabled: bool) {
	DEBUG.store(enabled, Ordering::Relaxed);
}

/// Returns `true` when verbose debug events are enabled.
pub fn debug_enabled() -> bool {
	DEBUG.load(Ordering::Relaxed)
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to the dispatcher.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Logs the built request when the debug flag is set.
pub(crate) fn debug_request(url: &Url, body: &[u8]) {
	if !debug_enabled() {
		return;
	}

	#[cfg(feature = "tracing")]
	::tracing::debug!(
		url = %url,
		query = url.query().unwrap_or_default(),
		body = %String::from_utf8_lossy(body),
		"Built API request."
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (url, body);
}

/// Logs the issued bearer token when the debug flag is set.
pub(crate) fn debug_token(issuer: &'static str, token: &Secret) {
	if !debug_enabled() {
		return;
	}

	#[cfg(feature = "tracing")]
	::tracing::debug!(issuer, token = token.expose(), "Issued bearer token.");
	#[cfg(not(feature = "tracing"))]
	let _ = (issuer, token);
}

/// Logs a received response when the debug flag is set.
pub(crate) fn debug_response(stage: &'static str, response: &HttpResponse) {
	if !debug_enabled() {
		return;
	}

	#[cfg(feature = "tracing")]
	::tracing::debug!(
		stage,
		status = response.status().as_u16(),
		body = %String::from_utf8_lossy(response.body()),
		"Received response."
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (stage, response);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_helpers_are_safe_with_flag_toggled() {
		let url = Url::parse("https://api.zoom.us/v2/users/me?page_size=30")
			.expect("Static URL should parse.");

		set_debug(true);
		debug_request(&url, b"{}");
		debug_token("jwt", &Secret::new("token"));
		debug_response("api", &HttpResponse::new(b"{}".to_vec()));
		set_debug(false);

		assert!(!debug_enabled());
	}
}
