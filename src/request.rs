//! Request descriptors and the builder that turns them into unauthenticated HTTP requests.

mod query;

pub use query::*;

// crates.io
use oauth2::http::{Method, Request};
// self
use crate::{_prelude::*, error::RequestError, http::HttpRequest, obs};

/// Body object for requests that carry no parameters; encodes as `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmptyBody {}

/// Unit of work handed to the dispatcher.
///
/// `path` must already have its identifiers substituted (e.g. `/meetings/123/status`).
#[derive(Debug)]
pub struct ApiRequest<'a, P = NoParams, B = EmptyBody>
where
	P: ?Sized,
	B: ?Sized,
{
	/// HTTP verb.
	pub method: Method,
	/// Path appended to the client endpoint.
	pub path: String,
	/// URL parameters encoded into the query string.
	pub params: &'a P,
	/// Body parameters encoded as JSON.
	pub body: &'a B,
}
impl<'a> ApiRequest<'a> {
	/// Creates a request without query or body parameters.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), params: &NoParams, body: &EmptyBody {} }
	}
}
impl<'a, P, B> ApiRequest<'a, P, B>
where
	P: ?Sized,
	B: ?Sized,
{
	/// Replaces the URL parameters.
	pub fn params<Q>(self, params: &'a Q) -> ApiRequest<'a, Q, B>
	where
		Q: ?Sized + UrlParams,
	{
		ApiRequest { method: self.method, path: self.path, params, body: self.body }
	}

	/// Replaces the body parameters.
	pub fn body<C>(self, body: &'a C) -> ApiRequest<'a, P, C>
	where
		C: ?Sized + Serialize,
	{
		ApiRequest { method: self.method, path: self.path, params: self.params, body }
	}
}
impl<P, B> ApiRequest<'_, P, B>
where
	P: ?Sized + UrlParams,
	B: ?Sized + Serialize,
{
	/// Resolves the full request URL against `endpoint`.
	///
	/// The query string is appended only when at least one parameter is present.
	pub fn url(&self, endpoint: &str) -> Result<Url, RequestError> {
		let raw = format!("{}{}", endpoint.trim_end_matches('/'), self.path);
		let mut url = Url::parse(&raw)
			.map_err(|source| RequestError::InvalidUrl { url: raw.clone(), source })?;
		let query = QueryPairs::from_params(self.params);

		if !query.is_empty() {
			url.set_query(Some(&query.encode()));
		}

		Ok(url)
	}

	/// Builds the unauthenticated HTTP request.
	///
	/// Fails before any network I/O when the body cannot be encoded or the URL is invalid.
	pub fn build(&self, endpoint: &str) -> Result<HttpRequest, RequestError> {
		let body = serde_json::to_vec(self.body).map_err(RequestError::Body)?;
		let url = self.url(endpoint)?;

		obs::debug_request(&url, &body);

		Ok(Request::builder().method(self.method.clone()).uri(url.as_str()).body(body)?)
	}
}
