use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
	env, fs,
	path::{Path, PathBuf},
	time::Duration,
};
use tracing::{info, warn};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CONFIG_FILE_NAME: &str = "wayfarer.json";

/// Platform-specific data directory resolution
pub fn default_data_dir() -> Result<PathBuf> {
	#[cfg(target_os = "linux")]
	let dir = dirs::data_local_dir()
		.ok_or_else(|| anyhow!("Could not determine data directory"))?
		.join("wayfarer");

	#[cfg(not(target_os = "linux"))]
	let dir = dirs::data_dir()
		.ok_or_else(|| anyhow!("Could not determine data directory"))?
		.join("Wayfarer");

	// Create directory if it doesn't exist
	fs::create_dir_all(&dir)?;

	Ok(dir)
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Config schema version
	pub version: u32,

	/// Base URL of the REST API, including the `/api` prefix
	pub api_url: String,

	/// Per-request timeout
	pub request_timeout_secs: u64,

	/// Default log filter when `RUST_LOG` isn't set
	pub log_level: String,

	/// Directory for rolling log files, console only when unset
	pub log_dir: Option<PathBuf>,

	/// Quiet period before a search suggestion request goes out
	pub suggestion_debounce_ms: u64,

	/// Maximum number of search suggestions requested
	pub suggestion_limit: u32,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			version: Self::target_version(),
			api_url: "http://localhost:5000/api".to_string(),
			request_timeout_secs: 30,
			log_level: "info".to_string(),
			log_dir: None,
			suggestion_debounce_ms: 300,
			suggestion_limit: 6,
		}
	}
}

impl ClientConfig {
	fn target_version() -> u32 {
		1
	}

	/// Load configuration from the default location, then apply environment overrides
	pub fn load() -> Result<Self> {
		let data_dir = default_data_dir()?;
		Ok(Self::load_from(&data_dir)?.with_overrides(|key| env::var(key).ok()))
	}

	/// Load configuration from a specific data directory, writing defaults if none exist
	pub fn load_from(data_dir: impl AsRef<Path>) -> Result<Self> {
		let data_dir = data_dir.as_ref();
		let config_path = data_dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			info!("Loading config from {:?}", config_path);
			let json = fs::read_to_string(&config_path)
				.with_context(|| format!("reading {}", config_path.display()))?;
			let config: ClientConfig = serde_json::from_str(&json)
				.with_context(|| format!("parsing {}", config_path.display()))?;

			if config.version > Self::target_version() {
				warn!(
					"Config v{} is newer than supported v{}, unknown fields are ignored",
					config.version,
					Self::target_version()
				);
			}

			Ok(config)
		} else {
			warn!("No config found, creating default at {:?}", config_path);
			let config = Self::default();
			config.save_to(data_dir)?;
			Ok(config)
		}
	}

	/// Defaults overridden by `WF_API_URL`, `WF_LOG_LEVEL` and `WF_REQUEST_TIMEOUT_SECS`
	pub fn from_env() -> Self {
		Self::default().with_overrides(|key| env::var(key).ok())
	}

	/// Applies overrides looked up by environment variable name.
	pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(api_url) = lookup("WF_API_URL") {
			self.api_url = api_url;
		}

		if let Some(level) = lookup("WF_LOG_LEVEL") {
			self.log_level = level;
		}

		if let Some(raw) = lookup("WF_REQUEST_TIMEOUT_SECS") {
			match raw.parse() {
				Ok(secs) => self.request_timeout_secs = secs,
				Err(e) => warn!("Invalid WF_REQUEST_TIMEOUT_SECS value '{raw}': {e}"),
			}
		}

		self
	}

	pub fn save_to(&self, data_dir: impl AsRef<Path>) -> Result<()> {
		let data_dir = data_dir.as_ref();
		fs::create_dir_all(data_dir)?;

		let config_path = data_dir.join(CONFIG_FILE_NAME);
		fs::write(&config_path, serde_json::to_string_pretty(self)?)
			.with_context(|| format!("writing {}", config_path.display()))?;

		Ok(())
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(self.request_timeout_secs)
	}

	pub fn suggestion_debounce(&self) -> Duration {
		Duration::from_millis(self.suggestion_debounce_ms)
	}
}

/// Installs the global subscriber: console output plus a daily rolling file when
/// `log_dir` is set. Keep the returned guard alive for as long as file logs should
/// be flushed.
pub fn init_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&config.log_level))
		.with_context(|| format!("invalid log level '{}'", config.log_level))?;

	let (file_layer, guard) = match &config.log_dir {
		Some(dir) => {
			let (non_blocking, guard) =
				tracing_appender::non_blocking(rolling::daily(dir, "wayfarer.log"));

			(
				Some(fmt::layer().with_writer(non_blocking).with_ansi(false)),
				Some(guard),
			)
		}
		None => (None, None),
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer())
		.with(file_layer)
		.try_init()?;

	Ok(guard)
}
