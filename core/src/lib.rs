//! Client side of Wayfarer: the page controllers behind the trip planner.
//!
//! Every controller receives the [`Backend`] and the signed-in [`Session`]
//! explicitly, so the same code runs against the REST API ([`HttpBackend`]) or
//! an in-memory fake in tests.

use std::{path::Path, sync::Arc};

use chrono::{Local, NaiveDate};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use wf_config::{init_logging, ClientConfig};

pub mod account;
pub mod admin;
pub mod backend;
pub mod error;
pub mod groups;
pub mod itinerary_editor;
pub mod reviews;
pub mod search;
pub mod session;

pub use backend::{Backend, HttpBackend};
pub use error::Error;
pub use itinerary_editor::ItineraryEditor;
pub use search::SuggestionSearch;
pub use session::Session;

pub use wf_api as api;
pub use wf_config as config;
pub use wf_itinerary as itinerary;

/// Long lived client state shared by every page.
pub struct Wayfarer {
	config: ClientConfig,
	backend: Arc<HttpBackend>,
	suggestions: SuggestionSearch<HttpBackend>,
	_log_guard: Option<WorkerGuard>,
}

impl Wayfarer {
	/// Builds the client without touching logging or the filesystem.
	pub fn new(config: ClientConfig) -> Result<Self, Error> {
		let backend = Arc::new(HttpBackend::new(&config)?);
		let suggestions = SuggestionSearch::new(Arc::clone(&backend), &config);

		Ok(Self {
			config,
			backend,
			suggestions,
			_log_guard: None,
		})
	}

	/// Loads `wayfarer.json` from `data_dir` (created with defaults when absent),
	/// applies `WF_*` environment overrides and installs logging.
	pub fn init(data_dir: impl AsRef<Path>) -> Result<Self, Error> {
		let config =
			ClientConfig::load_from(data_dir)?.with_overrides(|key| std::env::var(key).ok());
		let guard = init_logging(&config)?;

		info!(api_url = %config.api_url, "wayfarer client starting");

		Ok(Self {
			_log_guard: guard,
			..Self::new(config)?
		})
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn backend(&self) -> &HttpBackend {
		&self.backend
	}

	pub fn suggestions(&self) -> &SuggestionSearch<HttpBackend> {
		&self.suggestions
	}

	/// Local calendar date, the reference point for start date validation.
	pub fn today() -> NaiveDate {
		Local::now().date_naive()
	}
}
