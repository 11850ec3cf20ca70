use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{ActivityItem, DEFAULT_ACTIVITY_TIME};

#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum RecommendationCategory {
	Lodging,
	Dining,
	Activity,
}

/// A guide suggestion the user may copy into one of the draft's days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRef {
	pub name: String,
	pub description: String,
	pub category: RecommendationCategory,
	/// City of the guide the suggestion belongs to, used as the row's location.
	pub city: String,
}

impl RecommendationRef {
	pub fn to_activity(&self) -> ActivityItem {
		ActivityItem {
			time: DEFAULT_ACTIVITY_TIME.to_string(),
			activity: self.name.clone(),
			location: self.city.clone(),
			notes: format!("{}: {}", self.category, self.description),
		}
	}
}
