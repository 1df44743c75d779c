//! Demonstrates a server-to-server client updating and then ending a meeting against a local
//! mock of the API and OAuth endpoints.

// std
use std::{sync::Arc, time::Duration};
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use zoom_client::{
	Client,
	auth::Credentials,
	http::ReqwestTransport,
	meetings::{EndMeetingOptions, UpdateMeetingOptions},
	obs,
	reqwest::Client as HttpClient,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.query_param("grant_type", "account_credentials")
				.query_param("account_id", "demo-account");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"access_token":"demo-access","token_type":"bearer","expires_in":3599}"#);
		})
		.await;
	let update_mock = server
		.mock_async(|when, then| {
			when.method(PATCH).path("/v2/meetings/85746065432");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":85746065432,"topic":"Release review","type":2,"duration":30}"#);
		})
		.await;
	let end_mock = server
		.mock_async(|when, then| {
			when.method(PUT).path("/v2/meetings/85746065432/status");
			then.status(204);
		})
		.await;
	let transport = ReqwestTransport::with_client(
		HttpClient::builder().timeout(Duration::from_secs(10)).build()?,
	);
	let client = Client::builder(Credentials::new("demo-key", "demo-secret"))
		.server_to_server("demo-account")
		.endpoint(server.url("/v2"))
		.token_endpoint(server.url("/oauth/token"))
		.transport(Arc::new(transport))
		.build();

	obs::set_debug(true);

	let meeting = client
		.update_meeting(&UpdateMeetingOptions {
			id: "85746065432".into(),
			topic: "Release review".into(),
			..Default::default()
		})
		.await?;

	println!("Renamed meeting {} to {:?}.", meeting.id, meeting.topic);

	client.end_meeting(&EndMeetingOptions { meeting_id: meeting.id }).await?;

	println!("Ended meeting {}.", meeting.id);

	token_mock.assert_calls_async(2).await;
	update_mock.assert_async().await;
	end_mock.assert_async().await;

	Ok(())
}
