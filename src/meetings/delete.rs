// crates.io
use oauth2::http::Method;
// self
use crate::{_prelude::*, client::Client, request::ApiRequest};

/// Options for deleting a meeting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteMeetingOptions {
	/// Meeting to delete; substituted into the path.
	pub meeting_id: u64,
	/// Deletes only this occurrence of a recurring meeting.
	pub occurrence_id: String,
	/// Email the alternative host about the cancellation.
	pub schedule_for_reminder: bool,
}
crate::url_params!(DeleteMeetingOptions {
	occurrence_id => "occurrence_id",
	schedule_for_reminder => "schedule_for_reminder",
});

impl Client {
	/// Deletes a meeting with `DELETE /meetings/{id}`.
	///
	/// Succeeds only when the API answers `204 No Content`.
	pub async fn delete_meeting(&self, options: &DeleteMeetingOptions) -> Result<()> {
		let request =
			ApiRequest::new(Method::DELETE, super::meeting_path(options.meeting_id)).params(options);

		self.call_no_content(request).await
	}
}

/// Deletes a meeting through the default client.
#[cfg(feature = "reqwest")]
pub async fn delete_meeting(options: &DeleteMeetingOptions) -> Result<()> {
	crate::default_client().delete_meeting(options).await
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::StatusCode;
	// self
	use super::*;
	use crate::meetings::tests::{CannedTransport, client};

	#[tokio::test]
	async fn delete_meeting_encodes_occurrence() {
		let transport = CannedTransport::new(StatusCode::NO_CONTENT, "");
		let options = DeleteMeetingOptions {
			meeting_id: 42,
			occurrence_id: "1700000000000".into(),
			schedule_for_reminder: false,
		};

		client(transport.clone()).delete_meeting(&options).await.expect("204 should succeed.");

		let request = transport.only_request();

		assert_eq!(request.method(), Method::DELETE);
		assert_eq!(
			request.uri().to_string(),
			"https://api.example.test/v2/meetings/42?occurrence_id=1700000000000"
		);
		assert_eq!(request.body().as_slice(), b"{}");
	}

	#[tokio::test]
	async fn server_error_carries_status_text() {
		let transport = CannedTransport::new(StatusCode::INTERNAL_SERVER_ERROR, "");
		let err = client(transport)
			.delete_meeting(&DeleteMeetingOptions { meeting_id: 42, ..Default::default() })
			.await
			.expect_err("500 should fail a head-only call.");

		assert!(matches!(
			&err,
			Error::UnexpectedStatus { status } if status == "500 Internal Server Error"
		));
	}
}
