//! Process-wide default client used by the free-function API.
//!
//! The default client is built at most once, on first use, from credentials registered with
//! [`set_default_credentials`] or read from the environment ([`Credentials::from_env`]). When an
//! account ID is present the client uses server-to-server OAuth, otherwise JWT signing.

// std
use std::sync::OnceLock;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	client::{AuthMode, Client},
};

static DEFAULT_SLOT: Mutex<DefaultSlot> = parking_lot::const_mutex(DefaultSlot::new());
static DEFAULT_CLIENT: OnceLock<Client> = OnceLock::new();

/// Registered credentials plus whether the default client has started building.
///
/// Both fields change under one lock, so credentials are either consumed by the build or refused.
#[derive(Debug)]
struct DefaultSlot {
	credentials: Option<Credentials>,
	claimed: bool,
}
impl DefaultSlot {
	const fn new() -> Self {
		Self { credentials: None, claimed: false }
	}

	fn register(&mut self, credentials: Credentials) -> bool {
		if self.claimed {
			return false;
		}

		self.credentials = Some(credentials);

		true
	}

	fn claim(&mut self) -> Option<Credentials> {
		self.claimed = true;

		self.credentials.take()
	}
}

/// Registers the credentials used to build the default client.
///
/// Returns `false` once the default client is built, being built, or installed; the credentials
/// are then ignored.
pub fn set_default_credentials(credentials: Credentials) -> bool {
	DEFAULT_SLOT.lock().register(credentials)
}

/// Installs a fully configured client as the default.
///
/// Returns the client back when a default client already exists.
pub fn set_default_client(client: Client) -> Result<(), Client> {
	// Released before `set`, which waits on an in-flight build that takes the same lock.
	DEFAULT_SLOT.lock().claim();

	DEFAULT_CLIENT.set(client)
}

/// Returns the default client, building it on first use.
///
/// Concurrent first callers block on the same initialization, so exactly one client is built.
pub fn default_client() -> &'static Client {
	DEFAULT_CLIENT.get_or_init(build_default_client)
}

fn build_default_client() -> Client {
	let registered = DEFAULT_SLOT.lock().claim();
	let credentials = registered.or_else(Credentials::from_env).unwrap_or_else(|| {
		#[cfg(feature = "tracing")]
		tracing::warn!("No default credentials registered or found in the environment.");

		Credentials::new(String::new(), String::new())
	});
	let mode =
		if credentials.account_id.is_some() { AuthMode::ServerToServer } else { AuthMode::Jwt };

	Client::builder(credentials).auth_mode(mode).build()
}

#[cfg(test)]
mod tests {
	// std
	use std::{sync::Barrier, thread};
	// self
	use super::*;

	#[test]
	fn concurrent_first_use_builds_one_client() {
		set_default_credentials(Credentials::new("default-key", "default-secret"));

		let barrier = Barrier::new(8);
		let clients = thread::scope(|scope| {
			let handles = (0..8)
				.map(|_| {
					scope.spawn(|| {
						barrier.wait();

						default_client() as *const Client as usize
					})
				})
				.collect::<Vec<_>>();

			handles
				.into_iter()
				.map(|handle| handle.join().expect("Default client thread should not panic."))
				.collect::<Vec<_>>()
		});

		assert!(clients.windows(2).all(|pair| pair[0] == pair[1]));
		assert_eq!(default_client().auth_mode(), AuthMode::Jwt);
		assert!(!set_default_credentials(Credentials::new("late", "late")));
		assert!(set_default_client(Client::new("other", "other")).is_err());
	}

	#[test]
	fn credentials_are_refused_once_build_has_claimed_the_slot() {
		let mut slot = DefaultSlot::new();

		assert!(slot.register(Credentials::new("first", "first")));
		assert!(slot.register(Credentials::new("second", "second")));

		let claimed = slot.claim().expect("Registered credentials should be handed to the build.");

		assert_eq!(claimed.key, "second");
		// The build has started but the client is not published yet.
		assert!(!slot.register(Credentials::new("late", "late")));
		assert!(slot.claim().is_none());
	}
}
