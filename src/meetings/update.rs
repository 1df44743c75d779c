// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::Client,
	meetings::{Meeting, MeetingSettings, MeetingType, TrackingField, is_zero},
	request::ApiRequest,
};

/// Options for updating a meeting.
///
/// Zero-valued fields are left out of the body, so only the fields that are set change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateMeetingOptions {
	/// Meeting ID or UUID; substituted into the path.
	#[serde(skip)]
	pub id: String,
	/// Limits the update to one occurrence of a recurring meeting.
	#[serde(skip)]
	pub occurrence_id: String,
	/// New subject.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub topic: String,
	/// New meeting kind.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub meeting_type: Option<MeetingType>,
	/// New start time.
	#[serde(
		skip_serializing_if = "Option::is_none",
		with = "time::serde::rfc3339::option"
	)]
	pub start_time: Option<OffsetDateTime>,
	/// New duration in minutes.
	#[serde(skip_serializing_if = "is_zero")]
	pub duration: u32,
	/// IANA time zone of `start_time`.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub timezone: String,
	/// New passcode; at most 10 characters of `[a-zA-Z0-9@-_*]`.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub password: String,
	/// New description.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub agenda: String,
	/// Replacement tracking fields.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub tracking_fields: Vec<TrackingField>,
	/// Settings to change.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub settings: Option<MeetingSettings>,
}
crate::url_params!(UpdateMeetingOptions { occurrence_id => "occurrence_id" });

impl Client {
	/// Updates a meeting with `PATCH /meetings/{id}` and returns the decoded reply.
	pub async fn update_meeting(&self, options: &UpdateMeetingOptions) -> Result<Meeting> {
		let request = ApiRequest::new(Method::PATCH, super::meeting_path(&options.id))
			.params(options)
			.body(options);

		self.call(request).await
	}
}

/// Updates a meeting through the default client.
#[cfg(feature = "reqwest")]
pub async fn update_meeting(options: &UpdateMeetingOptions) -> Result<Meeting> {
	crate::default_client().update_meeting(options).await
}
