use crate::{error::record_failure, Backend, Error, Session};

use std::sync::{
	atomic::{AtomicBool, Ordering},
	Arc,
};

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use wf_api::{Guide, GuideFilters, Id, Itinerary};
use wf_itinerary::{ItineraryDraft, RecommendationCategory, RecommendationRef};

const CREATE_FAILED: &str = "Error creating itinerary";
const UPDATE_FAILED: &str = "Error updating itinerary";

/// Page state for creating or editing an itinerary.
#[derive(Debug, Default)]
pub struct ItineraryEditor {
	draft: ItineraryDraft,
	editing: Option<Id>,
	guides: Vec<Guide>,
	selected_guide: Option<usize>,
	in_flight: Arc<AtomicBool>,
	error: Option<String>,
}

/// Clears the in-flight flag however the submission ends, including when the
/// future is dropped half way.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
	fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
		flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.ok()
			.map(|_| Self(Arc::clone(flag)))
	}
}

impl Drop for InFlight {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

impl ItineraryEditor {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts from a stored itinerary; submit will update it in place.
	pub fn edit(itinerary: Itinerary) -> Self {
		Self {
			draft: ItineraryDraft::from_payload(itinerary.plan),
			editing: Some(itinerary.id),
			..Self::default()
		}
	}

	pub fn draft(&self) -> &ItineraryDraft {
		&self.draft
	}

	pub fn draft_mut(&mut self) -> &mut ItineraryDraft {
		&mut self.draft
	}

	pub fn is_editing(&self) -> bool {
		self.editing.is_some()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_submitting(&self) -> bool {
		self.in_flight.load(Ordering::Acquire)
	}

	/// Shared view of the in-flight flag, for disabling the submit control.
	pub fn submitting_flag(&self) -> Arc<AtomicBool> {
		Arc::clone(&self.in_flight)
	}

	pub fn guides(&self) -> &[Guide] {
		&self.guides
	}

	/// Fills the destination picker. A failure only leaves the picker empty.
	pub async fn load_guides(&mut self, backend: &(impl Backend + ?Sized), session: &Session) {
		match backend.list_guides(session, &GuideFilters::default()).await {
			Ok(guides) => {
				debug!(count = guides.len(), "loaded guides for destination picker");
				self.guides = guides;
			}
			Err(e) => warn!("Failed to fetch guides: {e}"),
		}

		self.selected_guide = None;
	}

	/// Picks a destination from the loaded guides, or clears it with `None`.
	pub fn select_guide(&mut self, guide_id: Option<&str>) {
		self.selected_guide =
			guide_id.and_then(|id| self.guides.iter().position(|guide| guide.id == id));

		let destination = self
			.selected_guide()
			.map(|guide| guide.title.clone())
			.unwrap_or_default();
		self.draft.set_destination(destination);
	}

	pub fn selected_guide(&self) -> Option<&Guide> {
		self.selected_guide.and_then(|i| self.guides.get(i))
	}

	/// Recommendations of the selected guide for one category.
	pub fn recommendations(&self, category: RecommendationCategory) -> Vec<RecommendationRef> {
		self.selected_guide()
			.map(|guide| guide.recommendation_refs(category).collect())
			.unwrap_or_default()
	}

	/// Imports into the day picked in the dialog, numbered from 1. Returns
	/// `false` when no such day exists.
	pub fn import_recommendation(
		&mut self,
		recommendation: &RecommendationRef,
		day_number: u32,
	) -> bool {
		let Some(day_index) = (day_number as usize).checked_sub(1) else {
			return false;
		};

		if day_index >= self.draft.days().len() {
			return false;
		}

		self.draft.import_recommendation(day_index, recommendation);
		true
	}

	/// Rejected end dates leave the draft unchanged and show the reason inline.
	pub fn set_end_date(&mut self, end_date: Option<NaiveDate>) {
		self.error = self.draft.set_end_date(end_date).err().map(|e| e.to_string());
	}

	/// Validates and sends the draft. On success the stored itinerary is returned
	/// and the editor starts over with a fresh draft; on failure the draft is kept
	/// and [`Self::error`] holds the message to show.
	pub async fn submit(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		today: NaiveDate,
	) -> Result<Itinerary, Error> {
		let fallback = if self.is_editing() {
			UPDATE_FAILED
		} else {
			CREATE_FAILED
		};

		if let Err(e) = self.draft.validate(today) {
			return Err(record_failure(&mut self.error, session, e, fallback));
		}

		let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
			return Err(Error::SubmitInFlight);
		};

		self.error = None;
		let payload = self.draft.to_payload();

		let res = match &self.editing {
			Some(id) => backend.update_itinerary(session, id, &payload).await,
			None => backend.create_itinerary(session, &payload).await,
		};

		match res {
			Ok(itinerary) => {
				info!(id = %itinerary.id, "itinerary saved");
				self.draft = ItineraryDraft::new();
				self.editing = None;
				Ok(itinerary)
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, fallback)),
		}
	}
}
