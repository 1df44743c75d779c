// crates.io
use oauth2::http::Method;
// self
use crate::{_prelude::*, client::Client, meetings::Meeting, request::ApiRequest};

/// Options for fetching a meeting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetMeetingOptions {
	/// Meeting ID or UUID; substituted into the path.
	pub meeting_id: String,
	/// Occurrence of a recurring meeting to fetch.
	pub occurrence_id: String,
	/// Include occurrences that already took place.
	pub show_previous_occurrences: bool,
}
crate::url_params!(GetMeetingOptions {
	occurrence_id => "occurrence_id",
	show_previous_occurrences => "show_previous_occurrences",
});

impl Client {
	/// Fetches a meeting with `GET /meetings/{id}`.
	pub async fn get_meeting(&self, options: &GetMeetingOptions) -> Result<Meeting> {
		let request =
			ApiRequest::new(Method::GET, super::meeting_path(&options.meeting_id)).params(options);

		self.call(request).await
	}
}

/// Fetches a meeting through the default client.
#[cfg(feature = "reqwest")]
pub async fn get_meeting(options: &GetMeetingOptions) -> Result<Meeting> {
	crate::default_client().get_meeting(options).await
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::StatusCode;
	// self
	use super::*;
	use crate::meetings::tests::{CannedTransport, client};

	#[tokio::test]
	async fn get_meeting_sends_set_query_fields_only() {
		let transport = CannedTransport::new(StatusCode::OK, r#"{"id":85746065432}"#);
		let options = GetMeetingOptions {
			meeting_id: "85746065432".into(),
			show_previous_occurrences: true,
			..Default::default()
		};
		let meeting =
			client(transport.clone()).get_meeting(&options).await.expect("Meeting should decode.");

		assert_eq!(meeting.id, 85746065432);

		let request = transport.only_request();

		assert_eq!(request.method(), Method::GET);
		assert_eq!(
			request.uri().to_string(),
			"https://api.example.test/v2/meetings/85746065432?show_previous_occurrences=true"
		);
	}

	#[tokio::test]
	async fn malformed_success_body_is_a_decode_error() {
		let transport = CannedTransport::new(StatusCode::OK, r#"{"id":"not-a-number"}"#);
		let err = client(transport)
			.get_meeting(&GetMeetingOptions { meeting_id: "1".into(), ..Default::default() })
			.await
			.expect_err("A string ID should not decode.");

		assert!(matches!(err, Error::Decode { status: 200, .. }));
	}
}
