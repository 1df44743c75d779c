//! Meeting resources shared by the meeting operations.

// self
use crate::_prelude::*;

/// Meeting kind, encoded on the wire as an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MeetingType {
	/// Starts immediately; type `1`.
	Instant,
	/// Scheduled for a start time; type `2`.
	#[default]
	Scheduled,
	/// Recurring without a fixed time; type `3`.
	RecurringNoFixedTime,
	/// Recurring with a fixed time; type `8`.
	RecurringFixedTime,
	/// Type value this client does not know about.
	Other(u8),
}
impl From<u8> for MeetingType {
	fn from(value: u8) -> Self {
		match value {
			1 => Self::Instant,
			2 => Self::Scheduled,
			3 => Self::RecurringNoFixedTime,
			8 => Self::RecurringFixedTime,
			other => Self::Other(other),
		}
	}
}
impl From<MeetingType> for u8 {
	fn from(value: MeetingType) -> Self {
		match value {
			MeetingType::Instant => 1,
			MeetingType::Scheduled => 2,
			MeetingType::RecurringNoFixedTime => 3,
			MeetingType::RecurringFixedTime => 8,
			MeetingType::Other(other) => other,
		}
	}
}

/// Custom tracking field attached to a meeting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingField {
	/// Field label.
	pub field: String,
	/// Field value.
	#[serde(default)]
	pub value: String,
}

/// Meeting settings; unset fields are left to the account defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingSettings {
	/// Start video when the host joins.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub host_video: Option<bool>,
	/// Start video when participants join.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub participant_video: Option<bool>,
	/// Allow participants to join before the host.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub join_before_host: Option<bool>,
	/// Mute participants when they join.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mute_upon_entry: Option<bool>,
	/// Hold participants in the waiting room.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub waiting_room: Option<bool>,
	/// `both`, `telephony`, or `voip`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub audio: Option<String>,
	/// `local`, `cloud`, or `none`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_recording: Option<String>,
}

/// Meeting resource as returned by the API.
///
/// Missing fields decode to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meeting {
	/// Instance identifier; changes for every occurrence.
	pub uuid: String,
	/// Numeric meeting ID.
	pub id: u64,
	/// User ID of the host.
	pub host_id: String,
	/// Meeting subject.
	pub topic: String,
	/// Meeting kind.
	#[serde(rename = "type")]
	pub meeting_type: MeetingType,
	/// `waiting`, `started`, or `finished`.
	pub status: String,
	/// Scheduled start, absent for instant meetings.
	#[serde(with = "time::serde::rfc3339::option")]
	pub start_time: Option<OffsetDateTime>,
	/// Scheduled duration in minutes.
	pub duration: u32,
	/// IANA time zone of `start_time`.
	pub timezone: String,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
	/// Meeting description.
	pub agenda: String,
	/// Host-only start link; embeds a short-lived token.
	pub start_url: String,
	/// Participant join link.
	pub join_url: String,
	/// Meeting passcode.
	pub password: String,
	/// Custom tracking fields.
	pub tracking_fields: Vec<TrackingField>,
	/// Meeting settings, when returned.
	pub settings: Option<MeetingSettings>,
}

/// Action applied through the meeting status endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingAction {
	/// End a live meeting.
	End,
	/// Recover a deleted meeting.
	Recover,
}

/// Body of `PUT /meetings/{id}/status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MeetingStatusUpdate {
	/// Status transition to apply.
	pub action: MeetingAction,
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn meeting_type_round_trips_known_and_unknown_values() {
		assert_eq!(MeetingType::from(8), MeetingType::RecurringFixedTime);
		assert_eq!(MeetingType::from(5), MeetingType::Other(5));
		assert_eq!(u8::from(MeetingType::Instant), 1);
		assert_eq!(serde_json::to_string(&MeetingType::Other(5)).expect("Type should encode."), "5");
	}

	#[test]
	fn meeting_decodes_sparse_payload() {
		let meeting = serde_json::from_str::<Meeting>(
			r#"{
				"uuid": "aDYlohsHRtCd4ii1uC2+hA==",
				"id": 85746065432,
				"topic": "Standup",
				"type": 2,
				"start_time": "2024-03-01T12:00:00Z",
				"duration": 30,
				"settings": { "join_before_host": true }
			}"#,
		)
		.expect("Sparse meeting payload should decode.");

		assert_eq!(meeting.id, 85746065432);
		assert_eq!(meeting.meeting_type, MeetingType::Scheduled);
		assert_eq!(meeting.start_time, Some(datetime!(2024-03-01 12:00:00 UTC)));
		assert_eq!(meeting.created_at, None);
		assert!(meeting.join_url.is_empty());
		assert_eq!(
			meeting.settings.and_then(|settings| settings.join_before_host),
			Some(true)
		);
	}

	#[test]
	fn status_update_encodes_lowercase_action() {
		let body = MeetingStatusUpdate { action: MeetingAction::End };

		assert_eq!(
			serde_json::to_string(&body).expect("Status update should encode."),
			r#"{"action":"end"}"#
		);
	}
}
