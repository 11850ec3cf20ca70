use crate::{send_empty, send_json, AdminStats, Error, Itinerary, RequestConfig, Review, Role, User, WithAuth};

use serde_json::json;

pub use stats::exec as stats;
pub mod stats {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<AdminStats, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/admin/stats"))
				.with_auth(token),
		)
		.await
	}
}

pub use reviews::exec as reviews;
pub mod reviews {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/admin/reviews"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<Review>;
}

pub use users::exec as users;
pub mod users {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/admin/users"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<User>;
}

pub use update_user_role::exec as update_user_role;
pub mod update_user_role {
	use super::*;

	pub async fn exec(config: RequestConfig, user_id: &str, role: Role) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.put(config.url(&format!("/admin/users/{user_id}/role")))
				.json(&json!({ "role": role }))
				.with_auth(token),
		)
		.await
	}
}

pub use itineraries::exec as itineraries;
pub mod itineraries {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/admin/itineraries"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<Itinerary>;
}
