//! Typed Zoom REST API client: every operation flows through one authenticated request pipeline
//! that signs (or exchanges) a bearer token, encodes query and JSON parameters, and decodes
//! either a typed payload or the platform's error object.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod decode;
pub mod error;
pub mod http;
pub mod meetings;
pub mod obs;
pub mod request;

pub use client::{AuthMode, Client, ClientBuilder};
#[cfg(feature = "reqwest")]
pub use client::{default_client, set_default_client, set_default_credentials};
pub use error::{Error, Result};

#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{auth::Credentials, client::Client};

	/// API key used by test clients.
	pub const TEST_KEY: &str = "test-key";
	/// API secret used by test clients.
	pub const TEST_SECRET: &str = "test-secret";

	/// Builds a JWT-mode client whose API endpoint points at `base`.
	pub fn build_test_client(base: &str) -> Client {
		Client::builder(Credentials::new(TEST_KEY, TEST_SECRET)).endpoint(base).build()
	}

	/// Builds a server-to-server client whose API and token endpoints both point at `base`.
	pub fn build_s2s_test_client(base: &str, account_id: &str) -> Client {
		Client::builder(Credentials::new(TEST_KEY, TEST_SECRET))
			.server_to_server(account_id)
			.endpoint(format!("{base}/v2"))
			.token_endpoint(format!("{base}/oauth/token"))
			.build()
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2::http as http_types;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
