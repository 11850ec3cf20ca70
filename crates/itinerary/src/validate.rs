use chrono::NaiveDate;
use thiserror::Error;

use crate::ItineraryDraft;

/// First rule a draft breaks before it may be submitted. The display text is
/// the inline message shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Please fill in title and destination")]
	MissingTitleOrDestination,
	#[error("Start date must be today or a future date")]
	StartDateInPast,
	#[error("End date must be same or after start date")]
	EndBeforeStart,
}

impl ItineraryDraft {
	/// Checks, in order: title and destination present, start date not before
	/// `today`, end date not before start date. Nothing else is checked here.
	pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
		if self.title.is_empty() || self.destination.is_empty() {
			return Err(ValidationError::MissingTitleOrDestination);
		}

		if let Some(start) = self.start_date {
			if start < today {
				return Err(ValidationError::StartDateInPast);
			}

			if let Some(end) = self.end_date {
				if end < start {
					return Err(ValidationError::EndBeforeStart);
				}
			}
		}

		Ok(())
	}
}
