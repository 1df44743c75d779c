//! API client and the dispatcher every operation funnels through.
//!
//! A call runs build → authenticate → send → decode. The client's configuration is read-only
//! after construction, so one [`Client`] can serve overlapping calls from many tasks.

#[cfg(feature = "reqwest")] mod default;

#[cfg(feature = "reqwest")] pub use default::*;

// std
use std::time::Duration as StdDuration;
// crates.io
use oauth2::http::{
	HeaderValue,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::{
		Credentials, DEFAULT_TOKEN_ENDPOINT, IssueContext, JwtIssuer, SdkSignatureIssuer,
		ServerToServerIssuer, TokenIssuer,
	},
	decode,
	error::RequestError,
	http::{HttpRequest, HttpResponse, HttpTransport},
	obs::{self, CallOutcome, CallSpan},
	request::{ApiRequest, UrlParams},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// Production API endpoint (scheme, host, and version prefix).
pub const DEFAULT_ENDPOINT: &str = "https://api.zoom.us/v2";

/// Token issuance strategy, fixed for the lifetime of a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
	/// Locally signed REST API JWT.
	#[default]
	Jwt,
	/// Locally signed SDK signature JWT.
	SdkSignature,
	/// Server-to-server OAuth exchange using the credentials' account ID.
	ServerToServer,
}
impl AuthMode {
	/// Returns a stable label suitable for logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthMode::Jwt => "jwt",
			AuthMode::SdkSignature => "sdk_signature",
			AuthMode::ServerToServer => "server_to_server",
		}
	}
}
impl Display for AuthMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Builder for [`Client`] values.
pub struct ClientBuilder {
	credentials: Credentials,
	auth_mode: AuthMode,
	endpoint: String,
	token_endpoint: String,
	transport: Arc<dyn HttpTransport>,
	timeout: Option<StdDuration>,
}
impl ClientBuilder {
	/// Creates a builder that sends requests through `transport`.
	pub fn with_transport(credentials: Credentials, transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			credentials,
			auth_mode: AuthMode::default(),
			endpoint: DEFAULT_ENDPOINT.into(),
			token_endpoint: DEFAULT_TOKEN_ENDPOINT.into(),
			transport,
			timeout: None,
		}
	}

	/// Selects the token issuance strategy.
	pub fn auth_mode(mut self, mode: AuthMode) -> Self {
		self.auth_mode = mode;

		self
	}

	/// Switches to server-to-server OAuth for `account_id`.
	pub fn server_to_server(mut self, account_id: impl Into<String>) -> Self {
		self.credentials = self.credentials.with_account_id(account_id);
		self.auth_mode = AuthMode::ServerToServer;

		self
	}

	/// Overrides the API endpoint (regional hosts, mock servers).
	pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();

		self
	}

	/// Overrides the OAuth token endpoint used in server-to-server mode.
	pub fn token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.token_endpoint = endpoint.into();

		self
	}

	/// Bounds every round trip (token exchange included) by `timeout`.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Replaces the transport.
	pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = transport;

		self
	}

	/// Finalizes the client.
	pub fn build(self) -> Client {
		let credentials = Arc::new(self.credentials);
		let issuer: Arc<dyn TokenIssuer> = match self.auth_mode {
			AuthMode::Jwt => Arc::new(JwtIssuer::new(credentials)),
			AuthMode::SdkSignature => Arc::new(SdkSignatureIssuer::new(credentials)),
			AuthMode::ServerToServer =>
				Arc::new(ServerToServerIssuer::new(credentials, self.token_endpoint)),
		};

		Client {
			endpoint: self.endpoint.into(),
			auth_mode: self.auth_mode,
			issuer,
			transport: self.transport,
			timeout: self.timeout,
		}
	}
}
impl Debug for ClientBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientBuilder")
			.field("credentials", &self.credentials)
			.field("auth_mode", &self.auth_mode)
			.field("endpoint", &self.endpoint)
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Authenticated API client.
///
/// Cloning is cheap; clones share the transport and token issuer.
#[derive(Clone)]
pub struct Client {
	endpoint: Arc<str>,
	auth_mode: AuthMode,
	issuer: Arc<dyn TokenIssuer>,
	transport: Arc<dyn HttpTransport>,
	timeout: Option<StdDuration>,
}
impl Client {
	/// Returns a builder using the default reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn builder(credentials: Credentials) -> ClientBuilder {
		ClientBuilder::with_transport(credentials, Arc::new(ReqwestTransport::default()))
	}

	/// Creates a JWT-mode client with default settings.
	#[cfg(feature = "reqwest")]
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self::builder(Credentials::new(key, secret)).build()
	}

	/// API endpoint requests are sent to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Token issuance strategy chosen at construction.
	pub fn auth_mode(&self) -> AuthMode {
		self.auth_mode
	}

	/// Round-trip timeout, if configured.
	pub fn timeout(&self) -> Option<StdDuration> {
		self.timeout
	}

	/// Sends a body-bearing request and decodes the reply into `T`.
	///
	/// The body is read whatever the status; an API error object becomes [`Error::Api`].
	pub async fn call<T, P, B>(&self, request: ApiRequest<'_, P, B>) -> Result<T>
	where
		T: DeserializeOwned,
		P: ?Sized + UrlParams,
		B: ?Sized + Serialize,
	{
		self.dispatch(request, decode::decode_body).await
	}

	/// Sends a head-only request; succeeds only on `204 No Content`.
	pub async fn call_no_content<P, B>(&self, request: ApiRequest<'_, P, B>) -> Result<()>
	where
		P: ?Sized + UrlParams,
		B: ?Sized + Serialize,
	{
		self.dispatch(request, decode::expect_no_content).await
	}

	/// Issues a fresh token and attaches the bearer and content-type headers.
	///
	/// Only headers change; method, URI, and body are left untouched.
	pub async fn authenticate(&self, mut request: HttpRequest) -> Result<HttpRequest> {
		let ctx = IssueContext { transport: self.transport.as_ref(), timeout: self.timeout };
		let token = self.issuer.issue(ctx).await?;

		obs::debug_token(self.issuer.kind(), &token);

		let bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
			.map_err(|e| RequestError::Http(e.into()))?;
		let headers = request.headers_mut();

		headers.insert(AUTHORIZATION, bearer);
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		Ok(request)
	}

	/// Builds, authenticates, and sends `request`, returning the raw response.
	pub async fn execute<P, B>(&self, request: &ApiRequest<'_, P, B>) -> Result<HttpResponse>
	where
		P: ?Sized + UrlParams,
		B: ?Sized + Serialize,
	{
		let unsigned = request.build(&self.endpoint)?;
		let signed = self.authenticate(unsigned).await?;
		let response = self.transport.execute(signed, self.timeout).await?;

		obs::debug_response("api", &response);

		Ok(response)
	}

	async fn dispatch<T, P, B, F>(&self, request: ApiRequest<'_, P, B>, handle: F) -> Result<T>
	where
		P: ?Sized + UrlParams,
		B: ?Sized + Serialize,
		F: FnOnce(&HttpResponse) -> Result<T>,
	{
		let span = CallSpan::new(&request.method, &request.path);

		obs::record_call_outcome(&request.method, CallOutcome::Attempt);

		let result = span
			.instrument(async {
				let response = self.execute(&request).await?;

				handle(&response)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(&request.method, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(&request.method, CallOutcome::Failure),
		}

		result
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("endpoint", &self.endpoint)
			.field("auth_mode", &self.auth_mode)
			.field("timeout", &self.timeout)
			.finish()
	}
}
