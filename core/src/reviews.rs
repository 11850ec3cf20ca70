use crate::{error::record_failure, Backend, Error, Session};

use tracing::info;
use wf_api::{Id, Review, ReviewInput, ReviewTarget, ReviewUpdate};

const DEFAULT_RATING: u8 = 5;

/// Review box under a guide or itinerary. The same form edits an existing
/// review after [`ReviewForm::edit`].
#[derive(Debug, Clone)]
pub struct ReviewForm {
	target: ReviewTarget,
	target_id: Id,
	editing: Option<Id>,
	pub rating: u8,
	pub comment: String,
	/// Comma separated, as typed.
	pub tags: String,
	error: Option<String>,
}

impl ReviewForm {
	pub fn new(target: ReviewTarget, target_id: impl Into<Id>) -> Self {
		Self {
			target,
			target_id: target_id.into(),
			editing: None,
			rating: DEFAULT_RATING,
			comment: String::new(),
			tags: String::new(),
			error: None,
		}
	}

	/// Loads an existing review into the form.
	pub fn edit(&mut self, review: &Review) {
		self.editing = Some(review.id.clone());
		self.rating = review.rating;
		self.comment = review.comment.clone();
		self.tags = review.tags.join(", ");
		self.error = None;
	}

	pub fn is_editing(&self) -> bool {
		self.editing.is_some()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn reset(&mut self) {
		*self = Self::new(self.target, std::mem::take(&mut self.target_id));
	}

	pub fn validate(&self) -> Result<(), Error> {
		if self.comment.trim().is_empty() {
			return Err(Error::Validation("Please enter a comment".to_string()));
		}

		if !(1..=5).contains(&self.rating) {
			return Err(Error::Validation("Please select a rating".to_string()));
		}

		Ok(())
	}

	pub fn parsed_tags(&self) -> Vec<String> {
		parse_tags(&self.tags)
	}

	/// Creates the review, or updates the one being edited. The form is cleared
	/// on success.
	pub async fn submit(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<Review, Error> {
		let fallback = if self.is_editing() {
			"Error updating review"
		} else {
			"Error submitting review"
		};

		if let Err(e) = self.validate() {
			return Err(record_failure(&mut self.error, session, e, fallback));
		}

		self.error = None;

		let res = match &self.editing {
			Some(review_id) => {
				let update = ReviewUpdate {
					rating: self.rating,
					comment: self.comment.clone(),
					tags: self.parsed_tags(),
				};
				backend.update_review(session, review_id, &update).await
			}
			None => {
				let input = ReviewInput {
					target_model: self.target,
					target_id: self.target_id.clone(),
					rating: self.rating,
					comment: self.comment.clone(),
					tags: self.parsed_tags(),
				};
				backend.create_review(session, &input).await
			}
		};

		match res {
			Ok(review) => {
				info!(model = %self.target, id = %review.id, "review saved");
				self.reset();
				Ok(review)
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, fallback)),
		}
	}

	pub async fn delete(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		review_id: &str,
	) -> Result<(), Error> {
		backend
			.delete_review(session, review_id)
			.await
			.map_err(|e| record_failure(&mut self.error, session, e, "Error deleting review"))
	}
}

/// Splits on commas, trims, drops empty entries.
pub fn parse_tags(raw: &str) -> Vec<String> {
	raw.split(',')
		.map(str::trim)
		.filter(|tag| !tag.is_empty())
		.map(str::to_string)
		.collect()
}

/// Mean rating rounded to one decimal, `None` without reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
	if reviews.is_empty() {
		return None;
	}

	let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
	let mean = sum as f32 / reviews.len() as f32;
	Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tags_are_trimmed_and_empties_dropped() {
		assert_eq!(parse_tags(" food, ,views ,, "), vec!["food", "views"]);
		assert!(parse_tags("").is_empty());
	}

	#[test]
	fn validation_order() {
		let mut form = ReviewForm::new(ReviewTarget::Guide, "g1");
		assert_eq!(form.rating, 5);
		assert_eq!(form.validate().unwrap_err().to_string(), "Please enter a comment");

		form.comment = "Lovely".to_string();
		form.rating = 0;
		assert_eq!(form.validate().unwrap_err().to_string(), "Please select a rating");

		form.rating = 4;
		assert!(form.validate().is_ok());
	}

	#[test]
	fn editing_joins_tags_and_reset_keeps_target() {
		let mut form = ReviewForm::new(ReviewTarget::Itinerary, "it1");
		form.edit(&Review {
			id: "r1".to_string(),
			rating: 3,
			comment: "Too rushed".to_string(),
			tags: vec!["pace".to_string(), "value".to_string()],
			..Default::default()
		});

		assert!(form.is_editing());
		assert_eq!(form.tags, "pace, value");

		form.reset();
		assert!(!form.is_editing());
		assert_eq!(form.rating, 5);
		assert_eq!(form.target_id, "it1");
	}

	#[test]
	fn average_is_rounded() {
		let reviews = [4, 5, 5]
			.into_iter()
			.map(|rating| Review {
				rating,
				..Default::default()
			})
			.collect::<Vec<_>>();

		assert_eq!(average_rating(&reviews), Some(4.7));
		assert_eq!(average_rating(&[]), None);
	}
}
