use crate::{error::record_failure, Backend, Error, Session};

use tracing::{debug, info};
use wf_api::{
	AdminStats, Guide, GuideCategory, GuideFilters, GuideInput, Id, Itinerary, Location, Review,
	Role, User,
};

/// Guide editor in the admin dashboard. `images` is the comma separated text
/// from the form field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GuideForm {
	editing: Option<Id>,
	pub title: String,
	pub description: String,
	pub location: Location,
	pub category: GuideCategory,
	pub history: String,
	pub culture: String,
	pub images: String,
}

impl GuideForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_guide(guide: &Guide) -> Self {
		Self {
			editing: Some(guide.id.clone()),
			title: guide.title.clone(),
			description: guide.description.clone(),
			location: guide.location.clone(),
			category: guide.category,
			history: guide.history.clone(),
			culture: guide.culture.clone(),
			images: guide.images.join(", "),
		}
	}

	pub fn is_editing(&self) -> bool {
		self.editing.is_some()
	}

	pub fn to_input(&self) -> GuideInput {
		GuideInput {
			title: self.title.clone(),
			description: self.description.clone(),
			location: self.location.clone(),
			category: self.category,
			history: self.history.clone(),
			culture: self.culture.clone(),
			images: self
				.images
				.split(',')
				.map(str::trim)
				.filter(|url| !url.is_empty())
				.map(str::to_string)
				.collect(),
		}
	}
}

/// Admin dashboard data. Every mutation reloads the whole dashboard except role
/// changes, which patch the local user list once the server accepted them.
#[derive(Debug, Default, Clone)]
pub struct AdminPanel {
	stats: AdminStats,
	users: Vec<User>,
	reviews: Vec<Review>,
	itineraries: Vec<Itinerary>,
	guides: Vec<Guide>,
	error: Option<String>,
}

impl AdminPanel {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn stats(&self) -> AdminStats {
		self.stats
	}

	pub fn users(&self) -> &[User] {
		&self.users
	}

	pub fn reviews(&self) -> &[Review] {
		&self.reviews
	}

	pub fn itineraries(&self) -> &[Itinerary] {
		&self.itineraries
	}

	pub fn guides(&self) -> &[Guide] {
		&self.guides
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Fetches all dashboard sections concurrently; nothing is replaced unless
	/// every request succeeds.
	pub async fn load(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<(), Error> {
		let filters = GuideFilters::default();

		let res = futures::try_join!(
			backend.admin_stats(session),
			backend.admin_users(session),
			backend.admin_reviews(session),
			backend.admin_itineraries(session),
			backend.list_guides(session, &filters),
		);

		match res {
			Ok((stats, users, reviews, itineraries, guides)) => {
				debug!(
					users = users.len(),
					reviews = reviews.len(),
					itineraries = itineraries.len(),
					guides = guides.len(),
					"admin dashboard loaded"
				);

				self.stats = stats;
				self.users = users;
				self.reviews = reviews;
				self.itineraries = itineraries;
				self.guides = guides;
				self.error = None;
				Ok(())
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, "Error loading admin data")),
		}
	}

	pub async fn change_role(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		user_id: &str,
		role: Role,
	) -> Result<(), Error> {
		if let Err(e) = backend.update_user_role(session, user_id, role).await {
			return Err(record_failure(&mut self.error, session, e, "Error updating role"));
		}

		info!(user = user_id, %role, "role updated");
		for user in self.users.iter_mut().filter(|u| u.id == user_id) {
			user.role = role;
		}

		Ok(())
	}

	/// Creates or updates depending on where the form came from.
	pub async fn save_guide(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		form: &GuideForm,
	) -> Result<Guide, Error> {
		let input = form.to_input();

		let res = match &form.editing {
			Some(id) => backend.update_guide(session, id, &input).await,
			None => backend.create_guide(session, &input).await,
		};

		match res {
			Ok(guide) => {
				self.load(backend, session).await?;
				Ok(guide)
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, "Error saving guide")),
		}
	}

	pub async fn delete_guide(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		guide_id: &str,
	) -> Result<(), Error> {
		match backend.delete_guide(session, guide_id).await {
			Ok(()) => self.load(backend, session).await,
			Err(e) => Err(record_failure(&mut self.error, session, e, "Error deleting guide")),
		}
	}

	pub async fn delete_itinerary(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		itinerary_id: &str,
	) -> Result<(), Error> {
		match backend.delete_itinerary(session, itinerary_id).await {
			Ok(()) => self.load(backend, session).await,
			Err(e) => Err(record_failure(&mut self.error, session, e, "Error deleting itinerary")),
		}
	}

	pub async fn delete_review(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		review_id: &str,
	) -> Result<(), Error> {
		match backend.delete_review(session, review_id).await {
			Ok(()) => self.load(backend, session).await,
			Err(e) => Err(record_failure(&mut self.error, session, e, "Error deleting review")),
		}
	}
}
