use crate::{Error, Session};

use wf_api::{
	admin, auth, groups, guides, itineraries, reviews, AdminStats, AuthResponse, Group,
	GroupInput, Guide, GuideFilters, GuideInput, Itinerary, RequestConfig, Review, ReviewInput,
	ReviewUpdate, Role, User,
};
use wf_config::ClientConfig;
use wf_itinerary::ItineraryPayload;

use async_trait::async_trait;

pub use wf_api::auth::update_profile::Input as ProfileInput;

type ApiResult<T> = Result<T, wf_api::Error>;

/// Everything the page controllers ask of the server.
#[async_trait]
pub trait Backend: Send + Sync {
	async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse>;
	async fn register(&self, username: &str, email: &str, password: &str)
		-> ApiResult<AuthResponse>;
	async fn me(&self, session: &Session) -> ApiResult<User>;
	async fn change_password(&self, session: &Session, current: &str, new: &str) -> ApiResult<()>;
	async fn update_profile(&self, session: &Session, input: &ProfileInput) -> ApiResult<User>;

	async fn list_guides(&self, session: &Session, filters: &GuideFilters) -> ApiResult<Vec<Guide>>;
	async fn guide_suggestions(&self, query: &str, limit: u32) -> ApiResult<Vec<Guide>>;
	async fn create_guide(&self, session: &Session, input: &GuideInput) -> ApiResult<Guide>;
	async fn update_guide(&self, session: &Session, id: &str, input: &GuideInput)
		-> ApiResult<Guide>;
	async fn delete_guide(&self, session: &Session, id: &str) -> ApiResult<()>;

	async fn create_itinerary(
		&self,
		session: &Session,
		payload: &ItineraryPayload,
	) -> ApiResult<Itinerary>;
	async fn update_itinerary(
		&self,
		session: &Session,
		id: &str,
		payload: &ItineraryPayload,
	) -> ApiResult<Itinerary>;
	async fn delete_itinerary(&self, session: &Session, id: &str) -> ApiResult<()>;

	async fn create_review(&self, session: &Session, input: &ReviewInput) -> ApiResult<Review>;
	async fn update_review(&self, session: &Session, id: &str, input: &ReviewUpdate)
		-> ApiResult<Review>;
	async fn delete_review(&self, session: &Session, id: &str) -> ApiResult<()>;

	async fn get_group(&self, session: &Session, id: &str) -> ApiResult<Group>;
	async fn create_group(&self, session: &Session, input: &GroupInput) -> ApiResult<Group>;
	async fn update_group(&self, session: &Session, id: &str, input: &GroupInput) -> ApiResult<()>;
	async fn delete_group(&self, session: &Session, id: &str) -> ApiResult<()>;
	async fn join_group(
		&self,
		session: &Session,
		id: &str,
		invite_code: Option<&str>,
	) -> ApiResult<()>;
	async fn leave_group(&self, session: &Session, id: &str) -> ApiResult<()>;
	async fn create_post(&self, session: &Session, group_id: &str, content: &str) -> ApiResult<()>;
	async fn reply_to_post(
		&self,
		session: &Session,
		group_id: &str,
		post_id: &str,
		content: &str,
	) -> ApiResult<()>;
	async fn group_invite_code(&self, session: &Session, group_id: &str) -> ApiResult<String>;
	async fn send_group_invite(
		&self,
		session: &Session,
		group_id: &str,
		email: &str,
	) -> ApiResult<Option<String>>;

	async fn admin_stats(&self, session: &Session) -> ApiResult<AdminStats>;
	async fn admin_users(&self, session: &Session) -> ApiResult<Vec<User>>;
	async fn admin_reviews(&self, session: &Session) -> ApiResult<Vec<Review>>;
	async fn admin_itineraries(&self, session: &Session) -> ApiResult<Vec<Itinerary>>;
	async fn update_user_role(&self, session: &Session, user_id: &str, role: Role)
		-> ApiResult<()>;
}

/// [`Backend`] over the REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: reqwest::Client,
	api_url: String,
}

impl HttpBackend {
	pub fn new(config: &ClientConfig) -> Result<Self, Error> {
		let client = reqwest::Client::builder()
			.timeout(config.request_timeout())
			.build()
			.map_err(Error::HttpClient)?;

		Ok(Self {
			client,
			api_url: config.api_url.clone(),
		})
	}

	pub fn api_url(&self) -> &str {
		&self.api_url
	}

	fn anonymous(&self) -> RequestConfig {
		RequestConfig {
			client: self.client.clone(),
			api_url: self.api_url.clone(),
			auth_token: None,
		}
	}

	fn request_config(&self, session: &Session) -> RequestConfig {
		RequestConfig {
			auth_token: session.token().map(str::to_string),
			..self.anonymous()
		}
	}
}

#[async_trait]
impl Backend for HttpBackend {
	async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
		auth::login(self.anonymous(), email, password).await
	}

	async fn register(
		&self,
		username: &str,
		email: &str,
		password: &str,
	) -> ApiResult<AuthResponse> {
		auth::register(self.anonymous(), username, email, password).await
	}

	async fn me(&self, session: &Session) -> ApiResult<User> {
		auth::me(self.request_config(session)).await
	}

	async fn change_password(&self, session: &Session, current: &str, new: &str) -> ApiResult<()> {
		auth::change_password(self.request_config(session), current, new).await
	}

	async fn update_profile(&self, session: &Session, input: &ProfileInput) -> ApiResult<User> {
		auth::update_profile(self.request_config(session), input).await
	}

	async fn list_guides(&self, session: &Session, filters: &GuideFilters) -> ApiResult<Vec<Guide>> {
		guides::list(self.request_config(session), filters).await
	}

	async fn guide_suggestions(&self, query: &str, limit: u32) -> ApiResult<Vec<Guide>> {
		guides::search_suggestions(self.anonymous(), query, limit).await
	}

	async fn create_guide(&self, session: &Session, input: &GuideInput) -> ApiResult<Guide> {
		guides::create(self.request_config(session), input).await
	}

	async fn update_guide(
		&self,
		session: &Session,
		id: &str,
		input: &GuideInput,
	) -> ApiResult<Guide> {
		guides::update(self.request_config(session), id, input).await
	}

	async fn delete_guide(&self, session: &Session, id: &str) -> ApiResult<()> {
		guides::delete(self.request_config(session), id).await
	}

	async fn create_itinerary(
		&self,
		session: &Session,
		payload: &ItineraryPayload,
	) -> ApiResult<Itinerary> {
		itineraries::create(self.request_config(session), payload).await
	}

	async fn update_itinerary(
		&self,
		session: &Session,
		id: &str,
		payload: &ItineraryPayload,
	) -> ApiResult<Itinerary> {
		itineraries::update(self.request_config(session), id, payload).await
	}

	async fn delete_itinerary(&self, session: &Session, id: &str) -> ApiResult<()> {
		itineraries::delete(self.request_config(session), id).await
	}

	async fn create_review(&self, session: &Session, input: &ReviewInput) -> ApiResult<Review> {
		reviews::create(self.request_config(session), input).await
	}

	async fn update_review(
		&self,
		session: &Session,
		id: &str,
		input: &ReviewUpdate,
	) -> ApiResult<Review> {
		reviews::update(self.request_config(session), id, input).await
	}

	async fn delete_review(&self, session: &Session, id: &str) -> ApiResult<()> {
		reviews::delete(self.request_config(session), id).await
	}

	async fn get_group(&self, session: &Session, id: &str) -> ApiResult<Group> {
		groups::get(self.request_config(session), id).await
	}

	async fn create_group(&self, session: &Session, input: &GroupInput) -> ApiResult<Group> {
		groups::create(self.request_config(session), input).await
	}

	async fn update_group(&self, session: &Session, id: &str, input: &GroupInput) -> ApiResult<()> {
		groups::update(self.request_config(session), id, input).await
	}

	async fn delete_group(&self, session: &Session, id: &str) -> ApiResult<()> {
		groups::delete(self.request_config(session), id).await
	}

	async fn join_group(
		&self,
		session: &Session,
		id: &str,
		invite_code: Option<&str>,
	) -> ApiResult<()> {
		groups::join(self.request_config(session), id, invite_code).await
	}

	async fn leave_group(&self, session: &Session, id: &str) -> ApiResult<()> {
		groups::leave(self.request_config(session), id).await
	}

	async fn create_post(&self, session: &Session, group_id: &str, content: &str) -> ApiResult<()> {
		groups::create_post(self.request_config(session), group_id, content).await
	}

	async fn reply_to_post(
		&self,
		session: &Session,
		group_id: &str,
		post_id: &str,
		content: &str,
	) -> ApiResult<()> {
		groups::reply_to_post(self.request_config(session), group_id, post_id, content).await
	}

	async fn group_invite_code(&self, session: &Session, group_id: &str) -> ApiResult<String> {
		groups::invite_code(self.request_config(session), group_id).await
	}

	async fn send_group_invite(
		&self,
		session: &Session,
		group_id: &str,
		email: &str,
	) -> ApiResult<Option<String>> {
		groups::send_invite(self.request_config(session), group_id, email).await
	}

	async fn admin_stats(&self, session: &Session) -> ApiResult<AdminStats> {
		admin::stats(self.request_config(session)).await
	}

	async fn admin_users(&self, session: &Session) -> ApiResult<Vec<User>> {
		admin::users(self.request_config(session)).await
	}

	async fn admin_reviews(&self, session: &Session) -> ApiResult<Vec<Review>> {
		admin::reviews(self.request_config(session)).await
	}

	async fn admin_itineraries(&self, session: &Session) -> ApiResult<Vec<Itinerary>> {
		admin::itineraries(self.request_config(session)).await
	}

	async fn update_user_role(
		&self,
		session: &Session,
		user_id: &str,
		role: Role,
	) -> ApiResult<()> {
		admin::update_user_role(self.request_config(session), user_id, role).await
	}
}
