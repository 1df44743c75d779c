// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::Client,
	meetings::{MeetingAction, MeetingStatusUpdate},
	request::ApiRequest,
};

/// Options for ending a live meeting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndMeetingOptions {
	/// Meeting to end; substituted into the path.
	pub meeting_id: u64,
}

impl Client {
	/// Ends a live meeting with `PUT /meetings/{id}/status`.
	///
	/// Succeeds only when the API answers `204 No Content`.
	pub async fn end_meeting(&self, options: &EndMeetingOptions) -> Result<()> {
		let body = MeetingStatusUpdate { action: MeetingAction::End };
		let path = format!("{}/status", super::meeting_path(options.meeting_id));

		self.call_no_content(ApiRequest::new(Method::PUT, path).body(&body)).await
	}
}

/// Ends a live meeting through the default client.
#[cfg(feature = "reqwest")]
pub async fn end_meeting(options: &EndMeetingOptions) -> Result<()> {
	crate::default_client().end_meeting(options).await
}
