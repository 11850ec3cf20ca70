use crate::{error::record_failure, Backend, Error, Session};

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};
use wf_api::{Group, GroupInput, Id, Post};

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const INVITE_SENT: &str = "Invite sent successfully!";

/// State of a group's detail page.
///
/// Posts are kept in the order the server stores them (oldest first); only
/// [`GroupView::posts_newest_first`] reverses them for display.
#[derive(Debug, Clone)]
pub struct GroupView {
	group: Group,
	expanded_replies: HashSet<Id>,
	replying_to: Option<Id>,
	invite_code: Option<String>,
	invite_error: Option<String>,
	invite_success: Option<String>,
	error: Option<String>,
}

impl GroupView {
	pub fn new(group: Group) -> Self {
		Self {
			group,
			expanded_replies: HashSet::new(),
			replying_to: None,
			invite_code: None,
			invite_error: None,
			invite_success: None,
			error: None,
		}
	}

	pub async fn load(
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		group_id: &str,
	) -> Result<Self, Error> {
		match backend.get_group(session, group_id).await {
			Ok(group) => Ok(Self::new(group)),
			Err(e) => {
				session.handle_error(&e);
				Err(e.into())
			}
		}
	}

	pub fn group(&self) -> &Group {
		&self.group
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn invite_code(&self) -> Option<&str> {
		self.invite_code.as_deref()
	}

	pub fn invite_error(&self) -> Option<&str> {
		self.invite_error.as_deref()
	}

	pub fn invite_success(&self) -> Option<&str> {
		self.invite_success.as_deref()
	}

	pub fn is_member(&self, session: &Session) -> bool {
		session
			.user_id()
			.is_some_and(|id| self.group.members.iter().any(|m| m.id == id))
	}

	pub fn is_creator(&self, session: &Session) -> bool {
		match (session.user_id(), &self.group.creator) {
			(Some(id), Some(creator)) => creator.id == id,
			_ => false,
		}
	}

	pub fn posts_newest_first(&self) -> impl Iterator<Item = &Post> {
		self.group.posts.iter().rev()
	}

	pub fn replies_expanded(&self, post_id: &str) -> bool {
		self.expanded_replies.contains(post_id)
	}

	pub fn toggle_replies(&mut self, post_id: &str) {
		if !self.expanded_replies.remove(post_id) {
			self.expanded_replies.insert(post_id.to_string());
		}
	}

	pub fn replying_to(&self) -> Option<&str> {
		self.replying_to.as_deref()
	}

	/// Opens the reply box under a post, or closes it with `None`.
	pub fn start_reply(&mut self, post_id: Option<&str>) {
		self.replying_to = post_id.map(str::to_string);
	}

	async fn refresh(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &Session,
	) -> Result<(), wf_api::Error> {
		self.group = backend.get_group(session, &self.group.id).await?;
		Ok(())
	}

	/// Private groups need an invite code. Without one the caller gets
	/// [`Error::InviteCodeRequired`] and should ask for it; signed out users get
	/// [`Error::LoginRequired`].
	pub async fn join(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		invite_code: Option<&str>,
	) -> Result<(), Error> {
		if !session.is_authenticated() {
			return Err(Error::LoginRequired);
		}

		let invite_code = invite_code.filter(|code| !code.is_empty());
		if self.group.private && invite_code.is_none() {
			return Err(Error::InviteCodeRequired);
		}

		let code = if self.group.private { invite_code } else { None };
		let res = match backend.join_group(session, &self.group.id, code).await {
			Ok(()) => self.refresh(backend, session).await,
			Err(e) => Err(e),
		};

		res.map_err(|e| record_failure(&mut self.error, session, e, "Failed to join group"))
	}

	pub async fn leave(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<(), Error> {
		let res = match backend.leave_group(session, &self.group.id).await {
			Ok(()) => self.refresh(backend, session).await,
			Err(e) => Err(e),
		};

		res.map_err(|e| record_failure(&mut self.error, session, e, "Failed to leave group"))
	}

	/// The page should navigate away after this succeeds.
	pub async fn delete(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<(), Error> {
		match backend.delete_group(session, &self.group.id).await {
			Ok(()) => {
				info!(id = %self.group.id, "group deleted");
				Ok(())
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, "Failed to delete group")),
		}
	}

	/// Blank content is ignored and nothing is sent. Returns whether a post was
	/// made.
	pub async fn post(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		content: &str,
	) -> Result<bool, Error> {
		let content = content.trim();
		if content.is_empty() {
			return Ok(false);
		}

		let res = match backend.create_post(session, &self.group.id, content).await {
			Ok(()) => self.refresh(backend, session).await,
			Err(e) => Err(e),
		};

		res.map(|()| true)
			.map_err(|e| record_failure(&mut self.error, session, e, "Failed to post"))
	}

	/// Same rules as [`Self::post`]. A successful reply closes the reply box and
	/// expands the post's replies.
	pub async fn reply(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		post_id: &str,
		content: &str,
	) -> Result<bool, Error> {
		let content = content.trim();
		if content.is_empty() {
			return Ok(false);
		}

		let res = match backend
			.reply_to_post(session, &self.group.id, post_id, content)
			.await
		{
			Ok(()) => self.refresh(backend, session).await,
			Err(e) => Err(e),
		};

		match res {
			Ok(()) => {
				self.replying_to = None;
				self.expanded_replies.insert(post_id.to_string());
				Ok(true)
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, "Failed to reply")),
		}
	}

	pub async fn fetch_invite_code(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<&str, Error> {
		match backend.group_invite_code(session, &self.group.id).await {
			Ok(code) => Ok(self.invite_code.insert(code).as_str()),
			Err(e) => Err(record_failure(&mut self.error, session, e, "Failed to get invite code")),
		}
	}

	/// Form contents for the edit dialog.
	pub fn edit_form(&self) -> GroupForm {
		GroupForm::from_group(&self.group)
	}

	pub async fn update(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		form: &GroupForm,
	) -> Result<(), Error> {
		let res = match backend
			.update_group(session, &self.group.id, &form.to_input())
			.await
		{
			Ok(()) => self.refresh(backend, session).await,
			Err(e) => Err(e),
		};

		res.map_err(|e| record_failure(&mut self.error, session, e, "Failed to update group"))
	}

	/// Validates the address locally before sending. Outcome is reported through
	/// [`Self::invite_error`] and [`Self::invite_success`].
	pub async fn send_invite(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
		email: &str,
	) -> Result<(), Error> {
		self.invite_success = None;

		if let Err(e) = validate_email(email) {
			return Err(record_failure(&mut self.invite_error, session, e, "Failed to send invite"));
		}

		self.invite_error = None;

		match backend
			.send_group_invite(session, &self.group.id, email.trim())
			.await
		{
			Ok(message) => {
				debug!(group = %self.group.id, "invite sent");
				self.invite_success = Some(message.unwrap_or_else(|| INVITE_SENT.to_string()));
				Ok(())
			}
			Err(e) => Err(record_failure(&mut self.invite_error, session, e, "Failed to send invite")),
		}
	}
}

fn validate_email(email: &str) -> Result<(), Error> {
	if email.trim().is_empty() {
		return Err(Error::Validation("Please enter an email address".to_string()));
	}

	if !EMAIL.is_match(email) {
		return Err(Error::Validation("Please enter a valid email address".to_string()));
	}

	Ok(())
}

/// Create and edit form for a group.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupForm {
	pub name: String,
	pub description: String,
	pub private: bool,
	error: Option<String>,
}

impl GroupForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_group(group: &Group) -> Self {
		Self {
			name: group.name.clone(),
			description: group.description.clone(),
			private: group.private,
			error: None,
		}
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn validate(&self) -> Result<(), Error> {
		if self.name.is_empty() || self.description.is_empty() {
			return Err(Error::Validation("Please fill in all fields".to_string()));
		}

		Ok(())
	}

	pub fn to_input(&self) -> GroupInput {
		GroupInput {
			name: self.name.clone(),
			description: self.description.clone(),
			private: self.private,
		}
	}

	/// Returns the created group so the page can open it.
	pub async fn create(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<Group, Error> {
		const FAILED: &str = "Error creating group";

		if let Err(e) = self.validate() {
			return Err(record_failure(&mut self.error, session, e, FAILED));
		}

		self.error = None;

		match backend.create_group(session, &self.to_input()).await {
			Ok(group) => {
				info!(id = %group.id, "group created");
				Ok(group)
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, FAILED)),
		}
	}
}
