use crate::{
	send_empty, send_json, Error, Group, GroupInput, GroupInvite, RequestConfig, WithAuth,
	WithOptionalAuth,
};

use serde::Deserialize;
use serde_json::json;

pub use list::exec as list;
pub mod list {
	use super::*;

	/// Public groups only.
	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		send_json(
			config
				.client
				.get(config.url("/groups"))
				.with_optional_auth(&config),
		)
		.await
	}

	pub type Response = Vec<Group>;
}

pub use list_all::exec as list_all;
pub mod list_all {
	use super::*;

	/// Public and private groups.
	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/groups/all"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<Group>;
}

pub use my::exec as my;
pub mod my {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/groups/my"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<Group>;
}

pub use get::exec as get;
pub mod get {
	use super::*;

	pub async fn exec(config: RequestConfig, group_id: &str) -> Result<Group, Error> {
		send_json(
			config
				.client
				.get(config.url(&format!("/groups/{group_id}")))
				.with_optional_auth(&config),
		)
		.await
	}
}

pub use create::exec as create;
pub mod create {
	use super::*;

	pub async fn exec(config: RequestConfig, input: &GroupInput) -> Result<Group, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.post(config.url("/groups"))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}

pub use update::exec as update;
pub mod update {
	use super::*;

	pub async fn exec(config: RequestConfig, group_id: &str, input: &GroupInput) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.put(config.url(&format!("/groups/{group_id}")))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}

pub use delete::exec as delete;
pub mod delete {
	use super::*;

	pub async fn exec(config: RequestConfig, group_id: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.delete(config.url(&format!("/groups/{group_id}")))
				.with_auth(token),
		)
		.await
	}
}

pub use join::exec as join;
pub mod join {
	use super::*;

	/// Private groups need the invite code, public ones take an empty body.
	pub async fn exec(
		config: RequestConfig,
		group_id: &str,
		invite_code: Option<&str>,
	) -> Result<(), Error> {
		let token = config.auth_token()?;

		let body = match invite_code {
			Some(code) => json!({ "inviteCode": code }),
			None => json!({}),
		};

		send_empty(
			config
				.client
				.post(config.url(&format!("/groups/{group_id}/join")))
				.json(&body)
				.with_auth(token),
		)
		.await
	}
}

pub use leave::exec as leave;
pub mod leave {
	use super::*;

	pub async fn exec(config: RequestConfig, group_id: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.post(config.url(&format!("/groups/{group_id}/leave")))
				.with_auth(token),
		)
		.await
	}
}

pub use create_post::exec as create_post;
pub mod create_post {
	use super::*;

	pub async fn exec(config: RequestConfig, group_id: &str, content: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.post(config.url(&format!("/groups/{group_id}/posts")))
				.json(&json!({ "content": content }))
				.with_auth(token),
		)
		.await
	}
}

pub use reply_to_post::exec as reply_to_post;
pub mod reply_to_post {
	use super::*;

	pub async fn exec(
		config: RequestConfig,
		group_id: &str,
		post_id: &str,
		content: &str,
	) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.post(config.url(&format!("/groups/{group_id}/posts/{post_id}/reply")))
				.json(&json!({ "content": content }))
				.with_auth(token),
		)
		.await
	}
}

pub use invite_code::exec as invite_code;
pub mod invite_code {
	use super::*;

	#[derive(Deserialize)]
	#[serde(rename_all = "camelCase")]
	struct Response {
		invite_code: String,
	}

	pub async fn exec(config: RequestConfig, group_id: &str) -> Result<String, Error> {
		let token = config.auth_token()?;

		send_json::<Response>(
			config
				.client
				.get(config.url(&format!("/groups/{group_id}/invite-code")))
				.with_auth(token),
		)
		.await
		.map(|r| r.invite_code)
	}
}

pub use send_invite::exec as send_invite;
pub mod send_invite {
	use super::*;

	#[derive(Deserialize)]
	struct Response {
		message: Option<String>,
	}

	/// Returns the server's confirmation text, if any.
	pub async fn exec(
		config: RequestConfig,
		group_id: &str,
		email: &str,
	) -> Result<Option<String>, Error> {
		let token = config.auth_token()?;

		send_json::<Response>(
			config
				.client
				.post(config.url(&format!("/groups/{group_id}/invite")))
				.json(&json!({ "email": email }))
				.with_auth(token),
		)
		.await
		.map(|r| r.message)
	}
}

pub use my_invites::exec as my_invites;
pub mod my_invites {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<Response, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/groups/invites"))
				.with_auth(token),
		)
		.await
	}

	pub type Response = Vec<GroupInvite>;
}

pub use accept_invite::exec as accept_invite;
pub mod accept_invite {
	use super::*;

	pub async fn exec(config: RequestConfig, group_id: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.post(config.url(&format!("/groups/invites/{group_id}/accept")))
				.with_auth(token),
		)
		.await
	}
}

pub use reject_invite::exec as reject_invite;
pub mod reject_invite {
	use super::*;

	pub async fn exec(config: RequestConfig, group_id: &str) -> Result<(), Error> {
		let token = config.auth_token()?;

		send_empty(
			config
				.client
				.post(config.url(&format!("/groups/invites/{group_id}/reject")))
				.with_auth(token),
		)
		.await
	}
}
