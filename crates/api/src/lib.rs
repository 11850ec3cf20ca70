pub mod admin;
pub mod auth;
pub mod groups;
pub mod guides;
pub mod itineraries;
pub mod reviews;
pub mod users;

mod types;

pub use types::*;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

pub struct RequestConfig {
	pub client: reqwest::Client,
	pub api_url: String,
	pub auth_token: Option<String>,
}

impl RequestConfig {
	fn url(&self, path: &str) -> String {
		format!("{}{path}", self.api_url.trim_end_matches('/'))
	}

	fn auth_token(&self) -> Result<&str, Error> {
		self.auth_token
			.as_deref()
			.ok_or(Error::AuthenticationRequired)
	}
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Authentication required")]
	AuthenticationRequired,
	/// The server answered with a non-success status. `message` is the server's
	/// own `message` field when it sent one.
	#[error("{}", server_error_text(.status, .message))]
	Server {
		status: StatusCode,
		message: Option<String>,
	},
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("unexpected response body: {0}")]
	Decode(#[from] serde_json::Error),
}

impl Error {
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Server { status, .. } => Some(*status),
			Self::Request(e) => e.status(),
			_ => None,
		}
	}

	pub fn is_unauthorized(&self) -> bool {
		self.status() == Some(StatusCode::UNAUTHORIZED)
	}

	/// Text meant for the user, if the server provided a non-empty one.
	pub fn server_message(&self) -> Option<&str> {
		match self {
			Self::Server { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
			_ => None,
		}
	}
}

fn server_error_text(status: &StatusCode, message: &Option<String>) -> String {
	message
		.as_deref()
		.filter(|m| !m.is_empty())
		.or_else(|| status.canonical_reason())
		.unwrap_or("Request failed")
		.to_string()
}

trait WithAuth {
	fn with_auth(self, token: &str) -> Self;
}

impl WithAuth for RequestBuilder {
	fn with_auth(self, token: &str) -> Self {
		self.bearer_auth(token)
	}
}

/// Attaches the token when there is one; used by endpoints that also work
/// anonymously.
trait WithOptionalAuth {
	fn with_optional_auth(self, config: &RequestConfig) -> Self;
}

impl WithOptionalAuth for RequestBuilder {
	fn with_optional_auth(self, config: &RequestConfig) -> Self {
		match config.auth_token.as_deref() {
			Some(token) => self.with_auth(token),
			None => self,
		}
	}
}

#[derive(Deserialize)]
struct ServerMessage {
	message: Option<String>,
}

async fn checked(req: RequestBuilder) -> Result<Response, Error> {
	let res = req.send().await?;
	let status = res.status();
	debug!(url = %res.url(), %status, "api response");

	if status.is_success() {
		return Ok(res);
	}

	let body = res.bytes().await?;
	let message = serde_json::from_slice::<ServerMessage>(&body)
		.ok()
		.and_then(|m| m.message);

	warn!(%status, ?message, "request rejected by server");

	Err(Error::Server { status, message })
}

async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, Error> {
	let body = checked(req).await?.bytes().await?;
	serde_json::from_slice(&body).map_err(Into::into)
}

async fn send_empty(req: RequestBuilder) -> Result<(), Error> {
	checked(req).await.map(|_| ())
}
