//! Client-level error types shared by the token issuers, request builder, transport, and decoder.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by every API operation.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Bearer credential could not be produced.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Request could not be constructed; nothing was sent.
	#[error(transparent)]
	Request(#[from] RequestError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Head-only call answered with something other than `204 No Content`.
	#[error("Unexpected response status: {status}.")]
	UnexpectedStatus {
		/// Status line text, e.g. `404 Not Found`.
		status: String,
	},
	/// Remote service returned its error object.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Response body is neither an error object nor the expected payload.
	#[error("Response body could not be decoded.")]
	Decode {
		/// Structured parsing failure, including the failing JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}

/// Failures while producing a bearer credential.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Local JWT signing failed (malformed key material).
	#[error("Token signing failed.")]
	Signing(#[from] jsonwebtoken::errors::Error),
	/// Server-to-server OAuth exchange failed.
	#[error(transparent)]
	Exchange(#[from] ExchangeError),
}
impl AuthError {
	/// Returns `true` when repeating the call may succeed.
	///
	/// Local signing failures are deterministic; exchange failures caused by the network or the
	/// token endpoint's availability are not.
	pub fn is_retryable(&self) -> bool {
		match self {
			Self::Signing(_) => false,
			Self::Exchange(ExchangeError::Transport(_)) => true,
			Self::Exchange(ExchangeError::Rejected { status, .. }) => *status >= 500,
			Self::Exchange(ExchangeError::Parse { .. }) => true,
			Self::Exchange(ExchangeError::Request(_)) => false,
		}
	}
}

/// Server-to-server token exchange failures.
#[derive(Debug, ThisError)]
pub enum ExchangeError {
	/// Token exchange request could not be constructed.
	#[error("Token exchange request could not be constructed.")]
	Request(#[source] RequestError),
	/// Token endpoint could not be reached.
	#[error("Token endpoint could not be reached.")]
	Transport(#[source] TransportError),
	/// Token endpoint rejected the credentials.
	#[error("Token endpoint rejected the exchange with status {status}: {reason}.")]
	Rejected {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Endpoint-supplied reason, or the status text when none was given.
		reason: String,
	},
	/// Token endpoint responded with malformed JSON.
	#[error("Token endpoint returned malformed JSON.")]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code returned by the token endpoint.
		status: u16,
	},
}

/// Request construction failures raised before any network I/O.
#[derive(Debug, ThisError)]
pub enum RequestError {
	/// Body parameters could not be encoded as JSON.
	#[error("Body parameters could not be encoded as JSON.")]
	Body(#[source] serde_json::Error),
	/// Endpoint and path do not form a valid URL.
	#[error("Request URL `{url}` is invalid.")]
	InvalidUrl {
		/// Offending URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP request assembly failed (invalid header value, method, etc.).
	#[error(transparent)]
	Http(#[from] oauth2::http::Error),
}

/// Transport-level failures (network, IO, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request exceeded the configured timeout.
	#[error("Request timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}

/// Error object returned by the API in place of a success payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("API error {code}: {message}")]
pub struct ApiError {
	/// Platform error code (never zero).
	pub code: i64,
	/// Human-readable message.
	#[serde(default)]
	pub message: String,
	/// Field-level validation details, when present.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<ApiErrorDetail>,
}

/// Field-level entry inside [`ApiError::errors`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
	/// Offending field name.
	#[serde(default)]
	pub field: String,
	/// Validation message for the field.
	#[serde(default)]
	pub message: String,
}
