#![allow(dead_code)]

use wf_core::{backend::ProfileInput, Backend, Session};

use std::{
	collections::HashMap,
	sync::{Mutex, MutexGuard},
	time::Duration,
};

use async_trait::async_trait;
use reqwest::StatusCode;
use wf_api::{
	AdminStats, AuthResponse, Group, GroupInput, Guide, GuideFilters, GuideInput, Itinerary,
	Location, Post, Reply, Review, ReviewInput, ReviewUpdate, Role, User,
};
use wf_itinerary::ItineraryPayload;

type ApiResult<T> = Result<T, wf_api::Error>;

/// In-memory [`Backend`] recording every call it receives.
#[derive(Default)]
pub struct FakeBackend {
	calls: Mutex<Vec<String>>,
	failures: Mutex<HashMap<&'static str, (StatusCode, Option<String>)>>,
	pub guides: Mutex<Vec<Guide>>,
	pub group: Mutex<Group>,
	pub users: Mutex<Vec<User>>,
	pub itineraries: Mutex<Vec<Itinerary>>,
	pub payloads: Mutex<Vec<ItineraryPayload>>,
	pub review_inputs: Mutex<Vec<ReviewInput>>,
	pub suggestion_latency: Duration,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
	m.lock().unwrap()
}

pub fn user(id: &str, username: &str) -> User {
	User {
		id: id.to_string(),
		username: username.to_string(),
		email: format!("{username}@example.com"),
		..Default::default()
	}
}

pub fn signed_in(id: &str, username: &str) -> Session {
	let mut session = Session::anonymous();
	session.sign_in(AuthResponse {
		token: format!("token-{id}"),
		user: user(id, username),
	});
	session
}

pub fn guide(id: &str, title: &str, city: &str) -> Guide {
	Guide {
		id: id.to_string(),
		title: title.to_string(),
		location: Location {
			city: city.to_string(),
			country: "Somewhere".to_string(),
		},
		..Default::default()
	}
}

impl FakeBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_group(group: Group) -> Self {
		Self {
			group: Mutex::new(group),
			..Self::default()
		}
	}

	/// Suggestion responses arrive after `latency`.
	pub fn with_latency(latency: Duration) -> Self {
		Self {
			suggestion_latency: latency,
			..Self::default()
		}
	}

	/// Makes `op` answer with `status`, carrying `message` as the server's
	/// `message` field when given.
	pub fn fail(&self, op: &'static str, status: StatusCode, message: Option<&str>) {
		lock(&self.failures).insert(op, (status, message.map(str::to_string)));
	}

	pub fn succeed(&self, op: &'static str) {
		lock(&self.failures).remove(op);
	}

	pub fn calls(&self) -> Vec<String> {
		lock(&self.calls).clone()
	}

	pub fn count(&self, op: &str) -> usize {
		lock(&self.calls)
			.iter()
			.filter(|call| call.split(' ').next() == Some(op))
			.count()
	}

	fn call(&self, op: &'static str, detail: impl AsRef<str>) -> ApiResult<()> {
		let detail = detail.as_ref();
		lock(&self.calls).push(if detail.is_empty() {
			op.to_string()
		} else {
			format!("{op} {detail}")
		});

		match lock(&self.failures).get(op) {
			Some((status, message)) => Err(wf_api::Error::Server {
				status: *status,
				message: message.clone(),
			}),
			None => Ok(()),
		}
	}

	fn stored(&self, id: &str, payload: &ItineraryPayload) -> Itinerary {
		lock(&self.payloads).push(payload.clone());
		Itinerary {
			id: id.to_string(),
			plan: payload.clone(),
			creator: None,
			likes: Vec::new(),
			reviews: Vec::new(),
		}
	}
}

#[async_trait]
impl Backend for FakeBackend {
	async fn login(&self, email: &str, _password: &str) -> ApiResult<AuthResponse> {
		self.call("login", email)?;
		Ok(AuthResponse {
			token: "token-u1".to_string(),
			user: user("u1", email.split('@').next().unwrap_or_default()),
		})
	}

	async fn register(
		&self,
		username: &str,
		_email: &str,
		_password: &str,
	) -> ApiResult<AuthResponse> {
		self.call("register", username)?;
		Ok(AuthResponse {
			token: "token-new".to_string(),
			user: user("u-new", username),
		})
	}

	async fn me(&self, session: &Session) -> ApiResult<User> {
		self.call("me", session.token().unwrap_or_default())?;
		Ok(user("u1", "ada"))
	}

	async fn change_password(&self, _session: &Session, _current: &str, _new: &str) -> ApiResult<()> {
		self.call("change_password", "")
	}

	async fn update_profile(&self, session: &Session, input: &ProfileInput) -> ApiResult<User> {
		self.call("update_profile", input.bio.as_deref().unwrap_or_default())?;
		let mut updated = session.user().cloned().unwrap_or_default();
		updated.bio = input.bio.clone();
		Ok(updated)
	}

	async fn list_guides(&self, _session: &Session, _filters: &GuideFilters) -> ApiResult<Vec<Guide>> {
		self.call("list_guides", "")?;
		Ok(lock(&self.guides).clone())
	}

	async fn guide_suggestions(&self, query: &str, limit: u32) -> ApiResult<Vec<Guide>> {
		self.call("guide_suggestions", query)?;

		if !self.suggestion_latency.is_zero() {
			tokio::time::sleep(self.suggestion_latency).await;
		}

		let query = query.to_lowercase();
		Ok(lock(&self.guides)
			.iter()
			.filter(|g| g.title.to_lowercase().contains(&query))
			.take(limit as usize)
			.cloned()
			.collect())
	}

	async fn create_guide(&self, _session: &Session, input: &GuideInput) -> ApiResult<Guide> {
		self.call("create_guide", &input.title)?;
		let created = Guide {
			id: format!("g{}", lock(&self.guides).len() + 1),
			title: input.title.clone(),
			location: input.location.clone(),
			category: input.category,
			images: input.images.clone(),
			..Default::default()
		};
		lock(&self.guides).push(created.clone());
		Ok(created)
	}

	async fn update_guide(&self, _session: &Session, id: &str, input: &GuideInput) -> ApiResult<Guide> {
		self.call("update_guide", id)?;
		let mut guides = lock(&self.guides);
		let guide = guides
			.iter_mut()
			.find(|g| g.id == id)
			.ok_or_else(|| wf_api::Error::Server {
				status: StatusCode::NOT_FOUND,
				message: Some("Guide not found".to_string()),
			})?;
		guide.title = input.title.clone();
		guide.location = input.location.clone();
		Ok(guide.clone())
	}

	async fn delete_guide(&self, _session: &Session, id: &str) -> ApiResult<()> {
		self.call("delete_guide", id)?;
		lock(&self.guides).retain(|g| g.id != id);
		Ok(())
	}

	async fn create_itinerary(
		&self,
		_session: &Session,
		payload: &ItineraryPayload,
	) -> ApiResult<Itinerary> {
		self.call("create_itinerary", &payload.title)?;
		Ok(self.stored("it-new", payload))
	}

	async fn update_itinerary(
		&self,
		_session: &Session,
		id: &str,
		payload: &ItineraryPayload,
	) -> ApiResult<Itinerary> {
		self.call("update_itinerary", id)?;
		Ok(self.stored(id, payload))
	}

	async fn delete_itinerary(&self, _session: &Session, id: &str) -> ApiResult<()> {
		self.call("delete_itinerary", id)?;
		lock(&self.itineraries).retain(|it| it.id != id);
		Ok(())
	}

	async fn create_review(&self, _session: &Session, input: &ReviewInput) -> ApiResult<Review> {
		self.call("create_review", &input.target_id)?;
		lock(&self.review_inputs).push(input.clone());
		Ok(Review {
			id: "r-new".to_string(),
			rating: input.rating,
			comment: input.comment.clone(),
			tags: input.tags.clone(),
			..Default::default()
		})
	}

	async fn update_review(&self, _session: &Session, id: &str, input: &ReviewUpdate) -> ApiResult<Review> {
		self.call("update_review", id)?;
		Ok(Review {
			id: id.to_string(),
			rating: input.rating,
			comment: input.comment.clone(),
			tags: input.tags.clone(),
			..Default::default()
		})
	}

	async fn delete_review(&self, _session: &Session, id: &str) -> ApiResult<()> {
		self.call("delete_review", id)
	}

	async fn get_group(&self, _session: &Session, id: &str) -> ApiResult<Group> {
		self.call("get_group", id)?;
		Ok(lock(&self.group).clone())
	}

	async fn create_group(&self, session: &Session, input: &GroupInput) -> ApiResult<Group> {
		self.call("create_group", &input.name)?;
		Ok(Group {
			id: "grp-new".to_string(),
			name: input.name.clone(),
			description: input.description.clone(),
			private: input.private,
			creator: session.user().cloned(),
			..Default::default()
		})
	}

	async fn update_group(&self, _session: &Session, id: &str, input: &GroupInput) -> ApiResult<()> {
		self.call("update_group", id)?;
		let mut group = lock(&self.group);
		group.name = input.name.clone();
		group.description = input.description.clone();
		group.private = input.private;
		Ok(())
	}

	async fn delete_group(&self, _session: &Session, id: &str) -> ApiResult<()> {
		self.call("delete_group", id)
	}

	async fn join_group(
		&self,
		session: &Session,
		id: &str,
		invite_code: Option<&str>,
	) -> ApiResult<()> {
		self.call(
			"join_group",
			format!("{id} {}", invite_code.unwrap_or("-")),
		)?;
		if let Some(user) = session.user() {
			lock(&self.group).members.push(user.clone());
		}
		Ok(())
	}

	async fn leave_group(&self, session: &Session, id: &str) -> ApiResult<()> {
		self.call("leave_group", id)?;
		let user_id = session.user_id().unwrap_or_default().to_string();
		lock(&self.group).members.retain(|m| m.id != user_id);
		Ok(())
	}

	async fn create_post(&self, session: &Session, group_id: &str, content: &str) -> ApiResult<()> {
		self.call("create_post", format!("{group_id} {content}"))?;
		let mut group = lock(&self.group);
		let id = format!("p{}", group.posts.len() + 1);
		group.posts.push(Post {
			id,
			author: session.user().cloned(),
			content: content.to_string(),
			..Default::default()
		});
		Ok(())
	}

	async fn reply_to_post(
		&self,
		session: &Session,
		group_id: &str,
		post_id: &str,
		content: &str,
	) -> ApiResult<()> {
		self.call("reply_to_post", format!("{group_id} {post_id} {content}"))?;
		let mut group = lock(&self.group);
		if let Some(post) = group.posts.iter_mut().find(|p| p.id == post_id) {
			post.replies.push(Reply {
				id: format!("{post_id}-r{}", post.replies.len() + 1),
				author: session.user().cloned(),
				content: content.to_string(),
				timestamp: None,
			});
		}
		Ok(())
	}

	async fn group_invite_code(&self, _session: &Session, group_id: &str) -> ApiResult<String> {
		self.call("group_invite_code", group_id)?;
		Ok("JOIN42".to_string())
	}

	async fn send_group_invite(
		&self,
		_session: &Session,
		group_id: &str,
		email: &str,
	) -> ApiResult<Option<String>> {
		self.call("send_group_invite", format!("{group_id} {email}"))?;
		Ok(None)
	}

	async fn admin_stats(&self, _session: &Session) -> ApiResult<AdminStats> {
		self.call("admin_stats", "")?;
		Ok(AdminStats {
			guides: lock(&self.guides).len() as u64,
			itineraries: lock(&self.itineraries).len() as u64,
			users: lock(&self.users).len() as u64,
			reviews: 0,
		})
	}

	async fn admin_users(&self, _session: &Session) -> ApiResult<Vec<User>> {
		self.call("admin_users", "")?;
		Ok(lock(&self.users).clone())
	}

	async fn admin_reviews(&self, _session: &Session) -> ApiResult<Vec<Review>> {
		self.call("admin_reviews", "")?;
		Ok(Vec::new())
	}

	async fn admin_itineraries(&self, _session: &Session) -> ApiResult<Vec<Itinerary>> {
		self.call("admin_itineraries", "")?;
		Ok(lock(&self.itineraries).clone())
	}

	async fn update_user_role(&self, _session: &Session, user_id: &str, role: Role) -> ApiResult<()> {
		self.call("update_user_role", format!("{user_id} {role}"))
	}
}
