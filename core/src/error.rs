use thiserror::Error;
use tracing::debug;

use crate::Session;

#[derive(Debug, Error)]
pub enum Error {
	/// Local check failed, the text is shown inline as is.
	#[error("{0}")]
	Validation(String),
	#[error(transparent)]
	Api(#[from] wf_api::Error),
	#[error("login required")]
	LoginRequired,
	#[error("an invite code is required to join this private group")]
	InviteCodeRequired,
	#[error("a submission is already in progress")]
	SubmitInFlight,
	#[error("failed to build HTTP client: {0}")]
	HttpClient(#[source] reqwest::Error),
	#[error("configuration error: {0:#}")]
	Config(#[from] anyhow::Error),
}

impl From<wf_itinerary::ValidationError> for Error {
	fn from(e: wf_itinerary::ValidationError) -> Self {
		Self::Validation(e.to_string())
	}
}

impl Error {
	/// Message for the page: local validation text, the server's own message,
	/// or `fallback` when the server didn't say anything useful.
	pub fn user_message(&self, fallback: &str) -> String {
		match self {
			Self::Validation(message) => message.clone(),
			Self::Api(e) => e.server_message().unwrap_or(fallback).to_string(),
			_ => fallback.to_string(),
		}
	}
}

/// Records a failed page action: drops the session token on a 401 and stores
/// the inline message.
pub(crate) fn record_failure(
	slot: &mut Option<String>,
	session: &mut Session,
	e: impl Into<Error>,
	fallback: &str,
) -> Error {
	let e = e.into();
	debug!("{fallback}: {e}");

	if let Error::Api(api_error) = &e {
		session.handle_error(api_error);
	}

	*slot = Some(e.user_message(fallback));
	e
}
