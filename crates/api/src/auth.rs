use crate::{send_json, AuthResponse, Error, RequestConfig, User, WithAuth};

use serde::Serialize;
use serde_json::json;

pub use login::exec as login;
pub mod login {
	use super::*;

	pub async fn exec(
		config: RequestConfig,
		email: &str,
		password: &str,
	) -> Result<AuthResponse, Error> {
		send_json(
			config
				.client
				.post(config.url("/auth/login"))
				.json(&json!({
					"email": email,
					"password": password,
				})),
		)
		.await
	}
}

pub use register::exec as register;
pub mod register {
	use super::*;

	pub async fn exec(
		config: RequestConfig,
		username: &str,
		email: &str,
		password: &str,
	) -> Result<AuthResponse, Error> {
		send_json(
			config
				.client
				.post(config.url("/auth/register"))
				.json(&json!({
					"username": username,
					"email": email,
					"password": password,
				})),
		)
		.await
	}
}

pub use me::exec as me;
pub mod me {
	use super::*;

	pub async fn exec(config: RequestConfig) -> Result<User, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.get(config.url("/auth/me"))
				.with_auth(token),
		)
		.await
	}
}

pub use update_profile::exec as update_profile;
pub mod update_profile {
	use super::*;

	#[derive(Debug, Default, Clone, Serialize)]
	#[serde(rename_all = "camelCase")]
	pub struct Input {
		#[serde(skip_serializing_if = "Option::is_none")]
		pub username: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub bio: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		pub profile_picture: Option<String>,
	}

	pub async fn exec(config: RequestConfig, input: &Input) -> Result<User, Error> {
		let token = config.auth_token()?;

		send_json(
			config
				.client
				.put(config.url("/auth/profile"))
				.json(input)
				.with_auth(token),
		)
		.await
	}
}

pub use change_password::exec as change_password;
pub mod change_password {
	use super::*;

	pub async fn exec(
		config: RequestConfig,
		current_password: &str,
		new_password: &str,
	) -> Result<(), Error> {
		let token = config.auth_token()?;

		crate::send_empty(
			config
				.client
				.put(config.url("/auth/password"))
				.json(&json!({
					"currentPassword": current_password,
					"newPassword": new_password,
				}))
				.with_auth(token),
		)
		.await
	}
}
