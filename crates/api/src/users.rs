use crate::{auth, send_json, Error, RequestConfig, SaveResponse, SavedItems, User, WithAuth};

pub use save_guide::exec as save_guide;
pub mod save_guide {
	use super::*;

	/// Toggles the bookmark, the response tells which state it ended in.
	pub async fn exec(config: RequestConfig, guide_id: &str) -> Result<SaveResponse, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.post(config.url(&format!("/users/save-guide/{guide_id}")))
				.with_auth(token),
		)
		.await
	}
}

pub use save_itinerary::exec as save_itinerary;
pub mod save_itinerary {
	use super::*;

	pub async fn exec(config: RequestConfig, itinerary_id: &str) -> Result<SaveResponse, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.post(config.url(&format!("/users/save-itinerary/{itinerary_id}")))
				.with_auth(token),
		)
		.await
	}
}

pub use saved::exec as saved;
pub mod saved {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<SavedItems, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/users/saved"))
				.with_auth(token),
		)
		.await
	}
}

pub use update_profile::exec as update_profile;
pub mod update_profile {
	use super::*;

	pub async fn exec(config: RequestConfig, input: &auth::update_profile::Input) -> Result<User, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.put(config.url("/users/profile"))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}
