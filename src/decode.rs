//! Response decoding: head-only status checks and two-stage JSON decoding.
//!
//! Error and success bodies share no schema, so a body is first matched against the API error
//! object and only then decoded into the caller's type. Otherwise a valid error object would
//! surface as a confusing field-mismatch failure.

// crates.io
use oauth2::http::StatusCode;
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, error::ApiError, http::HttpResponse};

#[derive(Deserialize)]
struct ErrorShape {
	#[serde(default)]
	code: Option<i64>,
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	errors: Vec<crate::error::ApiErrorDetail>,
}

/// Accepts only `204 No Content`; any other status becomes [`Error::UnexpectedStatus`].
pub fn expect_no_content(response: &HttpResponse) -> Result<()> {
	if response.status() == StatusCode::NO_CONTENT {
		Ok(())
	} else {
		Err(Error::UnexpectedStatus { status: response.status().to_string() })
	}
}

/// Recognizes the API error object in `body`.
///
/// A body matches when it is a JSON object carrying a non-zero numeric `code`.
pub fn sniff_error(body: &[u8]) -> Option<ApiError> {
	let object = serde_json::from_slice::<Map<String, Value>>(body).ok()?;
	let shape = serde_json::from_value::<ErrorShape>(Value::Object(object)).ok()?;

	match shape.code {
		Some(code) if code != 0 =>
			Some(ApiError { code, message: shape.message.unwrap_or_default(), errors: shape.errors }),
		_ => None,
	}
}

/// Decodes a body-bearing response into `T`, regardless of its HTTP status.
pub fn decode_body<T>(response: &HttpResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	decode(response.body(), response.status().as_u16())
}

/// Two-stage decode of raw body bytes: error object first, then `T`.
pub fn decode<T>(body: &[u8], status: u16) -> Result<T>
where
	T: DeserializeOwned,
{
	if let Some(err) = sniff_error(body) {
		return Err(err.into());
	}

	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de).map_err(|source| Error::Decode { source, status })
}
