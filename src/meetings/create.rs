// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::Client,
	meetings::{Meeting, MeetingSettings, MeetingType, TrackingField, is_zero},
	request::ApiRequest,
};

/// Options for scheduling a meeting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateMeetingOptions {
	/// Host user ID or email, or `me`; substituted into the path.
	#[serde(skip)]
	pub host_id: String,
	/// Meeting subject.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub topic: String,
	/// Defaults to a scheduled meeting when unset.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub meeting_type: Option<MeetingType>,
	/// Scheduled start; required for scheduled meetings.
	#[serde(
		skip_serializing_if = "Option::is_none",
		with = "time::serde::rfc3339::option"
	)]
	pub start_time: Option<OffsetDateTime>,
	/// Duration in minutes.
	#[serde(skip_serializing_if = "is_zero")]
	pub duration: u32,
	/// IANA time zone of `start_time`.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub timezone: String,
	/// Passcode; at most 10 characters of `[a-zA-Z0-9@-_*]`.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub password: String,
	/// Meeting description.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub agenda: String,
	/// Custom tracking fields.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub tracking_fields: Vec<TrackingField>,
	/// Settings that override the account defaults.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub settings: Option<MeetingSettings>,
}

impl Client {
	/// Schedules a meeting with `POST /users/{host_id}/meetings`.
	pub async fn create_meeting(&self, options: &CreateMeetingOptions) -> Result<Meeting> {
		let path = format!("/users/{}/meetings", options.host_id);

		self.call(ApiRequest::new(Method::POST, path).body(options)).await
	}
}

/// Schedules a meeting through the default client.
#[cfg(feature = "reqwest")]
pub async fn create_meeting(options: &CreateMeetingOptions) -> Result<Meeting> {
	crate::default_client().create_meeting(options).await
}
