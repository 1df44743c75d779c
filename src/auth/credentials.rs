//! API key/secret pairs and the process-wide defaults read from the environment.

// std
use std::env;
// self
use crate::{_prelude::*, auth::Secret};

/// Environment variable holding the default API key.
pub const ENV_API_KEY: &str = "ZOOM_API_KEY";
/// Environment variable holding the default API secret.
pub const ENV_API_SECRET: &str = "ZOOM_API_SECRET";
/// Environment variable holding the default account ID; presence selects server-to-server mode.
pub const ENV_ACCOUNT_ID: &str = "ZOOM_ACCOUNT_ID";

/// Identifying key, signing secret, and optional account used by the OAuth exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
	/// API key (JWT issuer / OAuth client ID).
	pub key: String,
	/// API secret (JWT signing key / OAuth client secret).
	pub secret: Secret,
	/// Account identifier required by the server-to-server exchange.
	pub account_id: Option<String>,
}
impl Credentials {
	/// Creates credentials for local JWT signing.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: Secret::new(secret), account_id: None }
	}

	/// Attaches the account identifier used by the server-to-server exchange.
	pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
		self.account_id = Some(account_id.into());

		self
	}

	/// Reads credentials from [`ENV_API_KEY`], [`ENV_API_SECRET`], and [`ENV_ACCOUNT_ID`].
	///
	/// Returns `None` when either the key or the secret is unset.
	pub fn from_env() -> Option<Self> {
		let key = env::var(ENV_API_KEY).ok()?;
		let secret = env::var(ENV_API_SECRET).ok()?;
		let credentials = Self::new(key, secret);

		match env::var(ENV_ACCOUNT_ID) {
			Ok(account_id) if !account_id.is_empty() => Some(credentials.with_account_id(account_id)),
			_ => Some(credentials),
		}
	}
}
