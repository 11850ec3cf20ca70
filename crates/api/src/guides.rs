use crate::{
	send_empty, send_json, Error, Guide, GuideFilters, GuideInput, RequestConfig, WithAuth,
	WithOptionalAuth,
};

pub use list::exec as list;
pub mod list {
	use super::*;

	pub async fn exec(config: RequestConfig, filters: &GuideFilters) -> Result<Response, Error> {
		send_json(
			config
				.client
				.get(config.url("/guides"))
				.query(filters)
				.with_optional_auth(&config),
		)
		.await
	}

	pub type Response = Vec<Guide>;
}

pub use get::exec as get;
pub mod get {
	use super::*;

	pub async fn exec(config: RequestConfig, guide_id: &str) -> Result<Guide, Error> {
		send_json(
			config
				.client
				.get(config.url(&format!("/guides/{guide_id}")))
				.with_optional_auth(&config),
		)
		.await
	}
}

pub use search_suggestions::exec as search_suggestions;
pub mod search_suggestions {
	use super::*;

	pub const DEFAULT_LIMIT: u32 = 6;

	pub async fn exec(config: RequestConfig, query: &str, limit: u32) -> Result<Response, Error> {
		super::list::exec(
			config,
			&GuideFilters {
				search: Some(query.to_string()),
				limit: Some(limit),
				..Default::default()
			},
		)
		.await
	}

	pub type Response = Vec<Guide>;
}

pub use create::exec as create;
pub mod create {
	use super::*;

	pub async fn exec(config: RequestConfig, input: &GuideInput) -> Result<Guide, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.post(config.url("/guides"))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	pub async fn exec(config: RequestConfig, guide_id: &str, input: &GuideInput) -> Result<Guide, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.put(config.url(&format!("/guides/{guide_id}")))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: RequestConfig, guide_id: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.delete(config.url(&format!("/guides/{guide_id}")))
				.with_auth(token),
		)
		.await
	}
}
