use crate::Backend;

use std::{
	sync::{
		atomic::{AtomicU64, Ordering},
		Arc,
	},
	time::Duration,
};

use tracing::{trace, warn};
use wf_api::Guide;
use wf_config::ClientConfig;

/// Shorter queries never reach the server.
pub const MIN_QUERY_CHARS: usize = 2;

/// Debounced guide suggestions for the search box.
///
/// Every keystroke calls [`SuggestionSearch::suggest`]. Each call waits for the
/// debounce period and only the most recent call is allowed to deliver results;
/// older ones resolve to `None` whether they were still waiting or already had
/// a response in flight.
pub struct SuggestionSearch<B: ?Sized> {
	backend: Arc<B>,
	debounce: Duration,
	limit: u32,
	generation: AtomicU64,
}

impl<B: Backend + ?Sized> SuggestionSearch<B> {
	pub fn new(backend: Arc<B>, config: &ClientConfig) -> Self {
		Self::with_settings(backend, config.suggestion_debounce(), config.suggestion_limit)
	}

	pub fn with_settings(backend: Arc<B>, debounce: Duration, limit: u32) -> Self {
		Self {
			backend,
			debounce,
			limit,
			generation: AtomicU64::new(0),
		}
	}

	fn is_current(&self, generation: u64) -> bool {
		self.generation.load(Ordering::Acquire) == generation
	}

	/// `Some(guides)` for the latest query, `None` once a newer query has
	/// superseded this one. A failed request yields an empty list.
	pub async fn suggest(&self, input: &str) -> Option<Vec<Guide>> {
		let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

		let query = input.trim();
		if query.chars().count() < MIN_QUERY_CHARS {
			return Some(Vec::new());
		}

		tokio::time::sleep(self.debounce).await;
		if !self.is_current(generation) {
			trace!(%query, "suggestion superseded before request");
			return None;
		}

		let guides = match self.backend.guide_suggestions(query, self.limit).await {
			Ok(guides) => guides,
			Err(e) => {
				warn!("Failed to fetch suggestions: {e}");
				Vec::new()
			}
		};

		self.is_current(generation).then_some(guides)
	}

	/// Drops whatever is pending, e.g. when the search box loses focus.
	pub fn cancel(&self) {
		self.generation.fetch_add(1, Ordering::AcqRel);
	}
}

/// Text to put in the search results route, `None` when there is nothing to
/// search for.
pub fn search_query(input: &str) -> Option<&str> {
	let query = input.trim();
	(!query.is_empty()).then_some(query)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn search_query_is_trimmed() {
		assert_eq!(search_query("  kyoto temples "), Some("kyoto temples"));
		assert_eq!(search_query("   "), None);
	}
}
