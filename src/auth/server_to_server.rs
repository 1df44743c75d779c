//! Server-to-server OAuth: exchanges the key/secret pair for an account access token.
//!
//! The exchange is a single `POST` to the token endpoint with a Basic credential and
//! `grant_type=account_credentials&account_id=<id>` in the query string. It runs before every
//! API call; the returned token is never reused.

// crates.io
use base64::{Engine, prelude::BASE64_STANDARD};
use oauth2::http::{Method, Request, header::AUTHORIZATION};
// self
use crate::{
	_prelude::*,
	auth::{Credentials, IssueContext, IssueFuture, Secret, TokenIssuer},
	error::{AuthError, ExchangeError, RequestError},
	http::{HttpRequest, HttpResponse},
	obs,
};

/// Production OAuth token endpoint.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://zoom.us/oauth/token";
/// Grant type sent to the token endpoint.
pub const ACCOUNT_CREDENTIALS_GRANT: &str = "account_credentials";

/// Successful token endpoint payload.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenEndpointResponse {
	/// Bearer token used for the API call.
	pub access_token: Secret,
	/// Token type, normally `bearer`.
	#[serde(default)]
	pub token_type: Option<String>,
	/// Lifetime in seconds as reported by the endpoint.
	#[serde(default)]
	pub expires_in: Option<u64>,
	/// Space-delimited scopes granted to the token.
	#[serde(default)]
	pub scope: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TokenEndpointError {
	#[serde(default)]
	error: Option<String>,
	#[serde(default)]
	error_description: Option<String>,
	#[serde(default)]
	reason: Option<String>,
}

/// Exchanges credentials for an account-level access token on every call.
#[derive(Clone, Debug)]
pub struct ServerToServerIssuer {
	credentials: Arc<Credentials>,
	token_endpoint: String,
}
impl ServerToServerIssuer {
	/// Creates an issuer that talks to `token_endpoint`.
	pub fn new(credentials: impl Into<Arc<Credentials>>, token_endpoint: impl Into<String>) -> Self {
		Self { credentials: credentials.into(), token_endpoint: token_endpoint.into() }
	}

	/// Token endpoint this issuer calls.
	pub fn token_endpoint(&self) -> &str {
		&self.token_endpoint
	}

	/// Builds the exchange request without sending it.
	pub fn exchange_request(&self) -> Result<HttpRequest, ExchangeError> {
		let mut url = Url::parse(&self.token_endpoint).map_err(|source| {
			ExchangeError::Request(RequestError::InvalidUrl {
				url: self.token_endpoint.clone(),
				source,
			})
		})?;

		url.query_pairs_mut()
			.append_pair("grant_type", ACCOUNT_CREDENTIALS_GRANT)
			.append_pair("account_id", self.credentials.account_id.as_deref().unwrap_or_default());

		let basic = BASE64_STANDARD
			.encode(format!("{}:{}", self.credentials.key, self.credentials.secret.expose()));

		Request::builder()
			.method(Method::POST)
			.uri(url.as_str())
			.header(AUTHORIZATION, format!("Basic {basic}"))
			.body(Vec::new())
			.map_err(|e| ExchangeError::Request(RequestError::from(e)))
	}
}
impl TokenIssuer for ServerToServerIssuer {
	fn kind(&self) -> &'static str {
		"server_to_server"
	}

	fn issue<'a>(&'a self, ctx: IssueContext<'a>) -> IssueFuture<'a> {
		Box::pin(async move {
			let request = self.exchange_request()?;
			let response =
				ctx.transport.execute(request, ctx.timeout).await.map_err(ExchangeError::Transport)?;

			obs::debug_response("token_exchange", &response);

			Ok::<_, AuthError>(parse_exchange_response(&response)?.access_token)
		})
	}
}

/// Interprets the token endpoint's reply.
pub fn parse_exchange_response(
	response: &HttpResponse,
) -> Result<TokenEndpointResponse, ExchangeError> {
	let status = response.status();

	if !status.is_success() {
		let body = serde_json::from_slice::<TokenEndpointError>(response.body()).unwrap_or_default();
		let reason = body
			.reason
			.or(body.error_description)
			.or(body.error)
			.unwrap_or_else(|| status.to_string());

		return Err(ExchangeError::Rejected { status: status.as_u16(), reason });
	}

	let mut de = serde_json::Deserializer::from_slice(response.body());

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| ExchangeError::Parse { source, status: status.as_u16() })
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::StatusCode;
	// self
	use super::*;

	fn issuer() -> ServerToServerIssuer {
		let credentials = Credentials::new("client-id", "client-secret").with_account_id("acct-42");

		ServerToServerIssuer::new(credentials, DEFAULT_TOKEN_ENDPOINT)
	}

	fn response(status: StatusCode, body: &str) -> HttpResponse {
		let mut response = HttpResponse::new(body.as_bytes().to_vec());

		*response.status_mut() = status;

		response
	}

	#[test]
	fn exchange_request_uses_basic_auth_and_query() {
		let request = issuer().exchange_request().expect("Exchange request should build.");

		assert_eq!(request.method(), Method::POST);
		assert_eq!(
			request.uri().to_string(),
			"https://zoom.us/oauth/token?grant_type=account_credentials&account_id=acct-42"
		);
		assert_eq!(
			request.headers()[AUTHORIZATION],
			format!("Basic {}", BASE64_STANDARD.encode("client-id:client-secret"))
		);
		assert!(request.body().is_empty());
	}

	#[test]
	fn invalid_token_endpoint_fails_before_sending() {
		let issuer = ServerToServerIssuer::new(Credentials::new("id", "secret"), "not a url");
		let err = issuer.exchange_request().expect_err("Invalid endpoints should be rejected.");

		assert!(matches!(err, ExchangeError::Request(RequestError::InvalidUrl { .. })));
	}

	#[test]
	fn success_payload_yields_access_token() {
		let parsed = parse_exchange_response(&response(
			StatusCode::OK,
			r#"{"access_token":"s2s-token","token_type":"bearer","expires_in":3599,"scope":"meeting:write:admin"}"#,
		))
		.expect("Well-formed token payload should parse.");

		assert_eq!(parsed.access_token.expose(), "s2s-token");
		assert_eq!(parsed.expires_in, Some(3599));
		assert_eq!(parsed.token_type.as_deref(), Some("bearer"));
	}

	#[test]
	fn rejection_prefers_endpoint_reason() {
		let err = parse_exchange_response(&response(
			StatusCode::BAD_REQUEST,
			r#"{"reason":"Invalid client_id or client_secret","error":"invalid_client"}"#,
		))
		.expect_err("Non-success status should be rejected.");

		assert!(matches!(
			err,
			ExchangeError::Rejected { status: 400, ref reason }
				if reason == "Invalid client_id or client_secret"
		));
	}

	#[test]
	fn rejection_without_body_uses_status_text() {
		let err = parse_exchange_response(&response(StatusCode::BAD_GATEWAY, ""))
			.expect_err("Non-success status should be rejected.");

		assert!(matches!(
			err,
			ExchangeError::Rejected { status: 502, ref reason } if reason == "502 Bad Gateway"
		));
	}

	#[test]
	fn malformed_payload_is_a_parse_error() {
		let err = parse_exchange_response(&response(StatusCode::OK, r#"{"token":"nope"}"#))
			.expect_err("Payload without access_token should fail.");

		assert!(matches!(err, ExchangeError::Parse { status: 200, .. }));
	}
}
