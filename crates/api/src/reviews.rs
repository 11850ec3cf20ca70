use crate::{send_empty, send_json, Error, RequestConfig, Review, ReviewInput, ReviewTarget, ReviewUpdate, WithAuth};

pub use for_target::exec as for_target;
pub mod for_target {
	use super::*;

	pub async fn exec(
		config: RequestConfig,
		target: ReviewTarget,
		target_id: &str,
	) -> Result<Response, Error> {
		send_json(
			config
				.client
				.get(config.url(&format!("/reviews/{target}/{target_id}"))),
		)
		.await
	}

	pub type Response = Vec<Review>;
}

pub use create::exec as create;
pub mod create {
	use super::*;

	pub async fn exec(config: RequestConfig, input: &ReviewInput) -> Result<Review, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.post(config.url("/reviews"))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	pub async fn exec(
		config: RequestConfig,
		review_id: &str,
		input: &ReviewUpdate,
	) -> Result<Review, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.put(config.url(&format!("/reviews/{review_id}")))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: RequestConfig, review_id: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.delete(config.url(&format!("/reviews/{review_id}")))
				.with_auth(token),
		)
		.await
	}
}
