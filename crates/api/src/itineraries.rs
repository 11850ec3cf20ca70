use crate::{send_empty, send_json, Error, Itinerary, LikeResponse, RequestConfig, WithAuth, WithOptionalAuth};

use wf_itinerary::ItineraryPayload;

pub use list::exec as list;
pub mod list {
	use super::*;

	/// Itineraries visible to the caller. Private ones owned by other users are
	/// filtered out here since the listing may include them.
	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let itineraries: Response = send_json(
			config
				.client
				.get(config.url("/itineraries"))
				.with_optional_auth(&config),
		)
		.await?;

		Ok(itineraries
			.into_iter()
			.filter(|itinerary| itinerary.plan.is_public)
			.collect())
	}

	pub type Response = Vec<Itinerary>;
}

pub use my::exec as my;
pub mod my {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/itineraries/my"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<Itinerary>;
}

pub use liked::exec as liked;
pub mod liked {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/itineraries/liked"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<Itinerary>;
}

pub use get::exec as get;
pub mod get {
	use super::*;

	pub async fn exec(config: RequestConfig, itinerary_id: &str) -> Result<Itinerary, Error> {
		send_json(
			config
				.client
				.get(config.url(&format!("/itineraries/{itinerary_id}")))
				.with_optional_auth(&config),
		)
		.await
	}
}

pub use create::exec as create;
pub mod create {
	use super::*;

	/// Creating works for anonymous visitors too, the token is sent when present.
	pub async fn exec(config: RequestConfig, payload: &ItineraryPayload) -> Result<Itinerary, Error> {
		send_json(
			config
				.client
				.post(config.url("/itineraries"))
				.json(payload)
				.with_optional_auth(&config),
		)
		.await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	pub async fn exec(
		config: RequestConfig,
		itinerary_id: &str,
		payload: &ItineraryPayload,
	) -> Result<Itinerary, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.put(config.url(&format!("/itineraries/{itinerary_id}")))
				.json(payload)
				.with_auth(token),
		)
		.await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: RequestConfig, itinerary_id: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.delete(config.url(&format!("/itineraries/{itinerary_id}")))
				.with_auth(token),
		)
		.await
	}
}

pub use like::exec as like;
pub mod like {
	use super::*;

	/// Toggles the caller's like.
	pub async fn exec(config: RequestConfig, itinerary_id: &str) -> Result<LikeResponse, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.post(config.url(&format!("/itineraries/{itinerary_id}/like")))
				.with_auth(token),
		)
		.await
	}
}
