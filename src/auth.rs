//! Credentials and the token issuers that turn them into bearer tokens.
//!
//! Every request gets a freshly issued token; nothing is cached. The dispatcher only sees
//! [`TokenIssuer`], so the signing strategy is fixed when the client is built.

pub mod credentials;
pub mod jwt;
pub mod secret;
pub mod server_to_server;

pub use credentials::*;
pub use jwt::*;
pub use secret::*;
pub use server_to_server::*;

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, error::AuthError, http::HttpTransport};

/// Boxed future returned by [`TokenIssuer::issue`].
pub type IssueFuture<'a> = Pin<Box<dyn Future<Output = Result<Secret, AuthError>> + 'a + Send>>;

/// Transport context handed to issuers that need a network round trip.
#[derive(Clone, Copy)]
pub struct IssueContext<'a> {
	/// Transport shared with the API calls.
	pub transport: &'a dyn HttpTransport,
	/// Timeout applied to the exchange request, if configured.
	pub timeout: Option<StdDuration>,
}
impl Debug for IssueContext<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IssueContext").field("timeout", &self.timeout).finish()
	}
}

/// Produces the bearer token attached to a single request.
pub trait TokenIssuer
where
	Self: 'static + Send + Sync,
{
	/// Stable label used in logs and spans.
	fn kind(&self) -> &'static str;

	/// Issues a new token. Local issuers ignore `ctx`.
	fn issue<'a>(&'a self, ctx: IssueContext<'a>) -> IssueFuture<'a>;
}
