//! Locally signed HS256 tokens.
//!
//! Two claim sets coexist and are kept apart on purpose:
//!
//! - [`JwtIssuer`] signs the REST API token (`iss` + `exp`, valid for [`API_TOKEN_VALIDITY`]).
//! - [`SdkSignatureIssuer`] signs the SDK signature (`sdkKey`/`appKey`/`role`/`iat`/`tokenExp`,
//!   valid for [`SDK_SIGNATURE_VALIDITY`] from a backdated `iat`).

// crates.io
use jsonwebtoken::{Algorithm, EncodingKey, Header};
// self
use crate::{
	_prelude::*,
	auth::{Credentials, IssueContext, IssueFuture, Secret, TokenIssuer},
	error::AuthError,
};

/// Lifetime of a REST API token.
pub const API_TOKEN_VALIDITY: Duration = Duration::seconds(5_000);
/// Lifetime of an SDK signature, measured from its `iat`.
pub const SDK_SIGNATURE_VALIDITY: Duration = Duration::hours(2);
/// How far an SDK signature's `iat` is backdated to tolerate clock skew.
pub const SDK_SIGNATURE_BACKDATE: Duration = Duration::seconds(30);

/// Role claim carried by SDK signatures (participant).
const SDK_ROLE_PARTICIPANT: &str = "0";

/// Claims of the REST API token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiClaims {
	/// API key.
	pub iss: String,
	/// Expiry as a Unix timestamp.
	pub exp: i64,
}

/// Claims of the SDK signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkSignatureClaims {
	/// SDK key.
	#[serde(rename = "sdkKey")]
	pub sdk_key: String,
	/// App key (same value as the SDK key).
	#[serde(rename = "appKey")]
	pub app_key: String,
	/// Meeting role.
	pub role: String,
	/// Issued-at as a Unix timestamp.
	pub iat: i64,
	/// Expiry as a Unix timestamp.
	#[serde(rename = "tokenExp")]
	pub token_exp: i64,
}

/// Signs REST API tokens from a key/secret pair.
#[derive(Clone, Debug)]
pub struct JwtIssuer {
	credentials: Arc<Credentials>,
}
impl JwtIssuer {
	/// Creates an issuer bound to `credentials`.
	pub fn new(credentials: impl Into<Arc<Credentials>>) -> Self {
		Self { credentials: credentials.into() }
	}

	/// Builds the claims for a token issued at `now`.
	pub fn claims_at(&self, now: OffsetDateTime) -> ApiClaims {
		ApiClaims {
			iss: self.credentials.key.clone(),
			exp: (now + API_TOKEN_VALIDITY).unix_timestamp(),
		}
	}

	/// Signs a token as of `now`.
	pub fn issue_at(&self, now: OffsetDateTime) -> Result<Secret, AuthError> {
		sign(&self.claims_at(now), &self.credentials.secret)
	}
}
impl TokenIssuer for JwtIssuer {
	fn kind(&self) -> &'static str {
		"jwt"
	}

	fn issue<'a>(&'a self, _ctx: IssueContext<'a>) -> IssueFuture<'a> {
		let token = self.issue_at(OffsetDateTime::now_utc());

		Box::pin(async move { token })
	}
}

/// Signs SDK signatures from an SDK key/secret pair.
#[derive(Clone, Debug)]
pub struct SdkSignatureIssuer {
	credentials: Arc<Credentials>,
}
impl SdkSignatureIssuer {
	/// Creates an issuer bound to `credentials`.
	pub fn new(credentials: impl Into<Arc<Credentials>>) -> Self {
		Self { credentials: credentials.into() }
	}

	/// Builds the claims for a signature issued at `now`.
	pub fn claims_at(&self, now: OffsetDateTime) -> SdkSignatureClaims {
		let iat = (now - SDK_SIGNATURE_BACKDATE).unix_timestamp();

		SdkSignatureClaims {
			sdk_key: self.credentials.key.clone(),
			app_key: self.credentials.key.clone(),
			role: SDK_ROLE_PARTICIPANT.into(),
			iat,
			token_exp: iat + SDK_SIGNATURE_VALIDITY.whole_seconds(),
		}
	}

	/// Signs a signature as of `now`.
	pub fn issue_at(&self, now: OffsetDateTime) -> Result<Secret, AuthError> {
		sign(&self.claims_at(now), &self.credentials.secret)
	}
}
impl TokenIssuer for SdkSignatureIssuer {
	fn kind(&self) -> &'static str {
		"sdk_signature"
	}

	fn issue<'a>(&'a self, _ctx: IssueContext<'a>) -> IssueFuture<'a> {
		let token = self.issue_at(OffsetDateTime::now_utc());

		Box::pin(async move { token })
	}
}

fn sign<C>(claims: &C, secret: &Secret) -> Result<Secret, AuthError>
where
	C: Serialize,
{
	let key = EncodingKey::from_secret(secret.expose().as_bytes());
	let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)?;

	Ok(Secret::new(token))
}

#[cfg(test)]
mod tests {
	// crates.io
	use jsonwebtoken::{DecodingKey, Validation};
	use time::macros::datetime;
	// self
	use super::*;

	const NOW: OffsetDateTime = datetime!(2024-03-01 12:00:00 UTC);

	fn credentials() -> Arc<Credentials> {
		Arc::new(Credentials::new("api-key", "api-secret"))
	}

	fn decode<C>(token: &Secret) -> (jsonwebtoken::Header, C)
	where
		C: DeserializeOwned,
	{
		let mut validation = Validation::new(Algorithm::HS256);

		validation.validate_exp = false;
		validation.required_spec_claims.clear();

		let data = jsonwebtoken::decode::<C>(
			token.expose(),
			&DecodingKey::from_secret(b"api-secret"),
			&validation,
		)
		.expect("Token should verify against the signing secret.");

		(data.header, data.claims)
	}

	#[test]
	fn api_token_expires_after_fixed_window() {
		let token = JwtIssuer::new(credentials())
			.issue_at(NOW)
			.expect("Signing with a valid secret should succeed.");
		let (header, claims) = decode::<ApiClaims>(&token);

		assert_eq!(header.alg, Algorithm::HS256);
		assert_eq!(header.typ.as_deref(), Some("JWT"));
		assert_eq!(claims.iss, "api-key");
		assert_eq!(claims.exp, NOW.unix_timestamp() + 5_000);
	}

	#[test]
	fn sdk_signature_uses_backdated_two_hour_window() {
		let token = SdkSignatureIssuer::new(credentials())
			.issue_at(NOW)
			.expect("Signing with a valid secret should succeed.");
		let (_, claims) = decode::<SdkSignatureClaims>(&token);

		assert_eq!(claims.sdk_key, "api-key");
		assert_eq!(claims.app_key, "api-key");
		assert_eq!(claims.role, "0");
		assert_eq!(claims.iat, NOW.unix_timestamp() - 30);
		assert_eq!(claims.token_exp, claims.iat + 7_200);
	}

	#[test]
	fn tokens_signed_with_other_secret_fail_verification() {
		let other = Arc::new(Credentials::new("api-key", "different-secret"));
		let token = JwtIssuer::new(other).issue_at(NOW).expect("Signing should succeed.");
		let mut validation = Validation::new(Algorithm::HS256);

		validation.validate_exp = false;

		assert!(
			jsonwebtoken::decode::<ApiClaims>(
				token.expose(),
				&DecodingKey::from_secret(b"api-secret"),
				&validation,
			)
			.is_err()
		);
	}
}
