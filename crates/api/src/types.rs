use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use wf_itinerary::{ItineraryPayload, RecommendationCategory, RecommendationRef};

/// Server-side document id.
pub type Id = String;

#[derive(
	Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
	#[default]
	User,
	Admin,
}

/// A user as returned by the server. Populated references (authors, creators,
/// members) carry only some of the fields, the rest fall back to defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
	#[serde(rename = "_id")]
	pub id: Id,
	pub username: String,
	pub email: String,
	pub role: Role,
	pub profile_picture: Option<String>,
	pub bio: Option<String>,
}

impl User {
	pub fn is_admin(&self) -> bool {
		self.role == Role::Admin
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
	pub token: String,
	pub user: User,
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
pub enum GuideCategory {
	#[default]
	Adventure,
	Leisure,
	Cultural,
	Nature,
	Urban,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
	#[serde(deserialize_with = "lenient::or_default")]
	pub city: String,
	#[serde(deserialize_with = "lenient::or_default")]
	pub country: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attraction {
	#[serde(deserialize_with = "lenient::or_default")]
	pub name: String,
	#[serde(deserialize_with = "lenient::or_default")]
	pub description: String,
	pub image: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationItem {
	#[serde(deserialize_with = "lenient::or_default")]
	pub name: String,
	#[serde(deserialize_with = "lenient::or_default")]
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cuisine: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lodging_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub activity_type: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
	#[serde(deserialize_with = "lenient::or_default")]
	pub lodging: Vec<RecommendationItem>,
	#[serde(deserialize_with = "lenient::or_default")]
	pub dining: Vec<RecommendationItem>,
	#[serde(deserialize_with = "lenient::or_default")]
	pub activities: Vec<RecommendationItem>,
}

/// A travel guide. Only the id, title, location and recommendations drive the
/// itinerary editor, everything else decodes leniently so that one odd guide
/// can't fail a whole listing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Guide {
	#[serde(rename = "_id")]
	pub id: Id,
	#[serde(deserialize_with = "lenient::or_default")]
	pub title: String,
	#[serde(deserialize_with = "lenient::or_default")]
	pub description: String,
	#[serde(deserialize_with = "lenient::or_default")]
	pub location: Location,
	#[serde(deserialize_with = "lenient::category")]
	pub category: GuideCategory,
	#[serde(deserialize_with = "lenient::or_default")]
	pub history: String,
	#[serde(deserialize_with = "lenient::or_default")]
	pub culture: String,
	#[serde(deserialize_with = "lenient::or_default")]
	pub images: Vec<String>,
	#[serde(deserialize_with = "lenient::or_default")]
	pub attractions: Vec<Attraction>,
	#[serde(deserialize_with = "lenient::or_default")]
	pub interesting_facts: Vec<String>,
	#[serde(deserialize_with = "lenient::or_default")]
	pub recommendations: Recommendations,
	pub average_rating: Option<f32>,
	#[serde(deserialize_with = "lenient::or_default")]
	pub reviews: Vec<Review>,
}

impl Guide {
	/// Suggestions ready to be imported into an itinerary day, tagged with the
	/// guide's city.
	pub fn recommendation_refs(
		&self,
		category: RecommendationCategory,
	) -> impl Iterator<Item = RecommendationRef> + '_ {
		let items = match category {
			RecommendationCategory::Lodging => &self.recommendations.lodging,
			RecommendationCategory::Dining => &self.recommendations.dining,
			RecommendationCategory::Activity => &self.recommendations.activities,
		};

		items.iter().map(move |item| RecommendationRef {
			name: item.name.clone(),
			description: item.description.clone(),
			category,
			city: self.location.city.clone(),
		})
	}
}

/// Body for creating or updating a guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideInput {
	pub title: String,
	pub description: String,
	pub location: Location,
	pub category: GuideCategory,
	pub history: String,
	pub culture: String,
	pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
	#[serde(rename = "_id")]
	pub id: Id,
	#[serde(flatten)]
	pub plan: ItineraryPayload,
	#[serde(default)]
	pub creator: Option<User>,
	#[serde(default)]
	pub likes: Vec<Id>,
	#[serde(default)]
	pub reviews: Vec<Review>,
}

impl Itinerary {
	pub fn is_liked_by(&self, user_id: &str) -> bool {
		self.likes.iter().any(|id| id == user_id)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LikeResponse {
	pub liked: bool,
	pub likes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
	pub saved: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedItems {
	pub saved_guides: Vec<Guide>,
	pub saved_itineraries: Vec<Itinerary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ReviewTarget {
	Guide,
	Itinerary,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
	#[serde(rename = "_id")]
	pub id: Id,
	pub user: Option<User>,
	pub rating: u8,
	pub comment: String,
	pub tags: Vec<String>,
	pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
	pub target_model: ReviewTarget,
	pub target_id: Id,
	pub rating: u8,
	pub comment: String,
	pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewUpdate {
	pub rating: u8,
	pub comment: String,
	pub tags: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reply {
	#[serde(rename = "_id")]
	pub id: Id,
	pub author: Option<User>,
	pub content: String,
	pub timestamp: Option<String>,
}

/// Group post, stored oldest first as the server sends them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
	#[serde(rename = "_id")]
	pub id: Id,
	pub author: Option<User>,
	pub content: String,
	pub timestamp: Option<String>,
	pub replies: Vec<Reply>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
	#[serde(rename = "_id")]
	pub id: Id,
	pub name: String,
	pub description: String,
	pub private: bool,
	pub creator: Option<User>,
	pub members: Vec<User>,
	pub posts: Vec<Post>,
}

/// Body for creating or editing a group.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GroupInput {
	pub name: String,
	pub description: String,
	pub private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupInvite {
	pub group: Group,
	#[serde(default, rename = "invitedBy")]
	pub invited_by: Option<User>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminStats {
	pub guides: u64,
	pub itineraries: u64,
	pub users: u64,
	pub reviews: u64,
}

/// Optional filters for the guide listing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GuideFilters {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<GuideCategory>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub limit: Option<u32>,
}

mod lenient {
	use super::GuideCategory;

	use serde::{de::IgnoredAny, Deserialize, Deserializer};

	/// `null` decodes as the type's default.
	pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
	where
		D: Deserializer<'de>,
		T: Deserialize<'de> + Default,
	{
		Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
	}

	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawCategory {
		Known(GuideCategory),
		Unknown(IgnoredAny),
	}

	/// Missing, `null` or unrecognised categories fall back to the default one.
	pub fn category<'de, D: Deserializer<'de>>(d: D) -> Result<GuideCategory, D::Error> {
		Ok(match Option::<RawCategory>::deserialize(d)? {
			Some(RawCategory::Known(category)) => category,
			Some(RawCategory::Unknown(_)) | None => GuideCategory::default(),
		})
	}
}
