use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ActivityItem, Budget, DayPlan, ItineraryDraft};

const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of the create/update itinerary calls. Also the shape the server
/// echoes back, which is why it deserializes too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPayload {
	pub title: String,
	pub destination: String,
	#[serde(default)]
	pub duration_days: u32,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "calendar_date")]
	pub start_date: Option<NaiveDate>,
	#[serde(default, skip_serializing_if = "Option::is_none", with = "calendar_date")]
	pub end_date: Option<NaiveDate>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub budget: Option<Budget>,
	#[serde(default)]
	pub is_public: bool,
	#[serde(default)]
	pub activities: Vec<DayPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPayload {
	pub day: u32,
	#[serde(default)]
	pub items: Vec<ActivityItem>,
}

impl From<&DayPlan> for DayPayload {
	fn from(day: &DayPlan) -> Self {
		Self {
			day: day.day_number,
			items: day.items.clone(),
		}
	}
}

impl ItineraryDraft {
	/// Builds the request body. An unset budget amount drops the whole budget,
	/// unset dates are left out instead of being sent empty.
	pub fn to_payload(&self) -> ItineraryPayload {
		ItineraryPayload {
			title: self.title.clone(),
			destination: self.destination.clone(),
			duration_days: self.duration_days(),
			start_date: self.start_date,
			end_date: self.end_date,
			budget: self.budget.is_set().then(|| self.budget.clone()),
			is_public: self.is_public,
			activities: self.days.iter().map(DayPayload::from).collect(),
		}
	}

	/// Rebuilds a draft from a stored itinerary so it can be edited.
	///
	/// Days are ordered by their stored number and then renumbered from 1, a day
	/// stored without rows gets a blank one, and a payload without any days
	/// gets `duration_days` blank days.
	pub fn from_payload(payload: ItineraryPayload) -> Self {
		let mut activities = payload.activities;
		activities.sort_by_key(|day| day.day);

		let mut draft = Self {
			title: payload.title,
			destination: payload.destination,
			start_date: payload.start_date,
			end_date: payload.end_date,
			budget: payload.budget.unwrap_or_default(),
			is_public: payload.is_public,
			days: activities
				.into_iter()
				.map(|day| DayPlan {
					day_number: day.day,
					items: if day.items.is_empty() {
						vec![ActivityItem::default()]
					} else {
						day.items
					},
				})
				.collect(),
		};

		if draft.days.is_empty() {
			draft.set_duration(payload.duration_days);
		}
		draft.renumber_days();

		draft
	}
}

impl From<&ItineraryDraft> for ItineraryPayload {
	fn from(draft: &ItineraryDraft) -> Self {
		draft.to_payload()
	}
}

/// Parses the calendar part of either `YYYY-MM-DD` or a full ISO timestamp.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
	NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), CALENDAR_DATE_FORMAT)
}

pub(crate) mod calendar_date {
	use chrono::NaiveDate;
	use serde::{de::Error, Deserialize, Deserializer, Serializer};

	use super::{parse_calendar_date, CALENDAR_DATE_FORMAT};

	pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
		match date {
			Some(date) => s.serialize_str(&date.format(CALENDAR_DATE_FORMAT).to_string()),
			None => s.serialize_none(),
		}
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
		Option::<String>::deserialize(d)?
			.filter(|raw| !raw.is_empty())
			.map(|raw| parse_calendar_date(&raw).map_err(D::Error::custom))
			.transpose()
	}
}

/// Budget amounts are typed as text but the server stores numbers.
pub(crate) mod amount {
	use serde::{Deserialize, Deserializer};

	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Text(String),
		Int(i64),
		Float(f64),
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
		Ok(match Option::<Raw>::deserialize(d)? {
			None => String::new(),
			Some(Raw::Text(text)) => text,
			Some(Raw::Int(n)) => n.to_string(),
			Some(Raw::Float(n)) => n.to_string(),
		})
	}
}
