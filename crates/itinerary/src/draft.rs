use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::ValidationError;

/// Time pre-filled into every new activity row.
pub const DEFAULT_ACTIVITY_TIME: &str = "09:00";

/// A single row of a day's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityItem {
	/// `HH:MM`, kept as typed by the user
	pub time: String,
	pub activity: String,
	pub location: String,
	pub notes: String,
}

impl Default for ActivityItem {
	fn default() -> Self {
		Self {
			time: DEFAULT_ACTIVITY_TIME.to_string(),
			activity: String::new(),
			location: String::new(),
			notes: String::new(),
		}
	}
}

impl ActivityItem {
	/// A row counts as blank when neither an activity nor a location was entered.
	/// Time and notes are ignored.
	pub fn is_blank(&self) -> bool {
		self.activity.is_empty() && self.location.is_empty()
	}
}

/// One day of the trip.
///
/// `day_number` is positional: the owning draft rewrites it after every day
/// insertion or removal, so it can only be read from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
	pub(crate) day_number: u32,
	pub(crate) items: Vec<ActivityItem>,
}

impl DayPlan {
	pub(crate) fn new(day_number: u32) -> Self {
		Self {
			day_number,
			items: vec![ActivityItem::default()],
		}
	}

	pub fn day_number(&self) -> u32 {
		self.day_number
	}

	/// Never empty.
	pub fn items(&self) -> &[ActivityItem] {
		&self.items
	}
}

#[derive(
	Debug,
	Default,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Display,
	EnumString,
	EnumIter,
	Serialize,
	Deserialize,
)]
pub enum Currency {
	#[default]
	USD,
	EUR,
	GBP,
	INR,
	JPY,
	AUD,
	CAD,
}

impl Currency {
	pub fn symbol(self) -> &'static str {
		match self {
			Self::USD => "$",
			Self::EUR => "€",
			Self::GBP => "£",
			Self::INR => "₹",
			Self::JPY => "¥",
			Self::AUD => "A$",
			Self::CAD => "C$",
		}
	}
}

/// Budget as entered in the form. The amount stays raw text, an empty amount
/// means "no budget" and is never sent to the server.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
	#[serde(default, deserialize_with = "crate::payload::amount::deserialize")]
	pub amount: String,
	#[serde(default)]
	pub currency: Currency,
}

impl Budget {
	pub fn is_set(&self) -> bool {
		!self.amount.is_empty()
	}
}

/// In-memory itinerary under construction.
///
/// Always holds at least one day and every day holds at least one activity
/// row. Dropping the draft discards it, nothing is persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDraft {
	pub(crate) title: String,
	pub(crate) destination: String,
	pub(crate) start_date: Option<NaiveDate>,
	pub(crate) end_date: Option<NaiveDate>,
	pub(crate) budget: Budget,
	pub(crate) is_public: bool,
	pub(crate) days: Vec<DayPlan>,
}

impl Default for ItineraryDraft {
	fn default() -> Self {
		Self {
			title: String::new(),
			destination: String::new(),
			start_date: None,
			end_date: None,
			budget: Budget::default(),
			is_public: false,
			days: vec![DayPlan::new(1)],
		}
	}
}

impl ItineraryDraft {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	pub fn destination(&self) -> &str {
		&self.destination
	}

	pub fn set_destination(&mut self, destination: impl Into<String>) {
		self.destination = destination.into();
	}

	pub fn start_date(&self) -> Option<NaiveDate> {
		self.start_date
	}

	/// Sets the start date, pulling the end date forward when it would
	/// otherwise precede the new start.
	pub fn set_start_date(&mut self, start_date: Option<NaiveDate>) {
		if let (Some(start), Some(end)) = (start_date, self.end_date) {
			if end < start {
				self.end_date = Some(start);
			}
		}

		self.start_date = start_date;
	}

	pub fn end_date(&self) -> Option<NaiveDate> {
		self.end_date
	}

	/// Rejects an end date earlier than the current start date, leaving the
	/// draft untouched.
	pub fn set_end_date(&mut self, end_date: Option<NaiveDate>) -> Result<(), ValidationError> {
		if let (Some(start), Some(end)) = (self.start_date, end_date) {
			if end < start {
				return Err(ValidationError::EndBeforeStart);
			}
		}

		self.end_date = end_date;
		Ok(())
	}

	pub fn budget(&self) -> &Budget {
		&self.budget
	}

	pub fn set_budget_amount(&mut self, amount: impl Into<String>) {
		self.budget.amount = amount.into();
	}

	pub fn set_currency(&mut self, currency: Currency) {
		self.budget.currency = currency;
	}

	pub fn is_public(&self) -> bool {
		self.is_public
	}

	pub fn set_public(&mut self, is_public: bool) {
		self.is_public = is_public;
	}

	pub fn days(&self) -> &[DayPlan] {
		&self.days
	}

	/// Trip length, always equal to the number of days.
	pub fn duration_days(&self) -> u32 {
		self.days.len() as u32
	}

	/// Mutable access to one activity row for field edits.
	///
	/// # Panics
	///
	/// Panics if either index is out of range for the current draft.
	pub fn item_mut(&mut self, day_index: usize, item_index: usize) -> &mut ActivityItem {
		&mut self.days[day_index].items[item_index]
	}
}
