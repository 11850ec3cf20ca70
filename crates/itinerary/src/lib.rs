//!
//! # Itinerary drafts
//!
//! State behind the day-by-day trip editor. A [`ItineraryDraft`] is created empty (or from a
//! stored itinerary when editing), mutated synchronously by form input, checked with
//! [`ItineraryDraft::validate`] and turned into an [`ItineraryPayload`] for the create/update call.
//!
//! The draft keeps a few invariants no matter which operations are applied:
//! - there is always at least one day;
//! - `days()[i].day_number() == i + 1`;
//! - every day has at least one activity row, possibly blank.
//!
//! ## Basic example
//!
//! ```
//! use chrono::NaiveDate;
//! use wf_itinerary::ItineraryDraft;
//!
//! let mut draft = ItineraryDraft::new();
//! draft.set_title("Long weekend");
//! draft.set_destination("Lisbon");
//! draft.set_duration(3);
//! draft.add_activity(1);
//! draft.remove_day(0);
//!
//! assert_eq!(draft.days().len(), 2);
//! assert_eq!(draft.days()[0].items().len(), 2);
//!
//! let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! assert!(draft.validate(today).is_ok());
//!
//! let payload = draft.to_payload();
//! assert_eq!(payload.duration_days, 2);
//! assert!(payload.budget.is_none());
//! ```

mod draft;
mod mutate;
mod payload;
mod recommendation;
mod validate;

pub use draft::{ActivityItem, Budget, Currency, DayPlan, ItineraryDraft, DEFAULT_ACTIVITY_TIME};
pub use mutate::MAX_DURATION_DAYS;
pub use payload::{parse_calendar_date, DayPayload, ItineraryPayload};
pub use recommendation::{RecommendationCategory, RecommendationRef};
pub use validate::ValidationError;
