//! Meeting operations.
//!
//! Every operation exists as a [`Client`](crate::Client) method and as a free function that
//! runs against the process-wide [`default_client`](crate::default_client).

mod create;
mod delete;
mod end;
mod get;
mod model;
mod update;

pub use create::*;
pub use delete::*;
pub use end::*;
pub use get::*;
pub use model::*;
pub use update::*;

// self
use crate::_prelude::*;

fn meeting_path<I>(id: I) -> String
where
	I: Display,
{
	format!("/meetings/{id}")
}

fn is_zero(value: &u32) -> bool {
	*value == 0
}

#[cfg(test)]
mod tests {
	// std
	use std::time::Duration as StdDuration;
	// crates.io
	use oauth2::http::StatusCode;
	// self
	use super::*;
	use crate::{
		auth::Credentials,
		client::{Client, ClientBuilder},
		error::TransportError,
		http::{HttpRequest, HttpResponse, HttpTransport, TransportFuture},
	};

	/// Transport that records every request and answers with a canned response.
	pub(crate) struct CannedTransport {
		pub(crate) sent: Mutex<Vec<HttpRequest>>,
		status: StatusCode,
		body: &'static str,
	}
	impl CannedTransport {
		pub(crate) fn new(status: StatusCode, body: &'static str) -> Arc<Self> {
			Arc::new(Self { sent: Mutex::new(Vec::new()), status, body })
		}

		pub(crate) fn only_request(&self) -> HttpRequest {
			let mut sent = self.sent.lock();

			assert_eq!(sent.len(), 1, "Exactly one request should be sent.");

			sent.remove(0)
		}
	}
	impl HttpTransport for CannedTransport {
		fn execute(&self, request: HttpRequest, _: Option<StdDuration>) -> TransportFuture<'_> {
			self.sent.lock().push(request);

			let mut response = HttpResponse::new(self.body.as_bytes().to_vec());

			*response.status_mut() = self.status;

			Box::pin(async move { Ok::<_, TransportError>(response) })
		}
	}

	pub(crate) fn client(transport: Arc<CannedTransport>) -> Client {
		ClientBuilder::with_transport(Credentials::new("key", "secret"), transport)
			.endpoint("https://api.example.test/v2")
			.build()
	}

	#[test]
	fn meeting_path_substitutes_identifier() {
		assert_eq!(meeting_path(85746065432_u64), "/meetings/85746065432");
		assert_eq!(meeting_path("abc"), "/meetings/abc");
	}
}
