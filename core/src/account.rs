use crate::{backend::ProfileInput, error::record_failure, Backend, Error, Session};

use tracing::{info, warn};

const MIN_PASSWORD_LEN: usize = 6;

fn check_password_length(password: &str) -> Result<(), Error> {
	if password.chars().count() < MIN_PASSWORD_LEN {
		return Err(Error::Validation(format!(
			"Password must be at least {MIN_PASSWORD_LEN} characters"
		)));
	}

	Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
	pub email: String,
	pub password: String,
	error: Option<String>,
}

impl LoginForm {
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Signs the session in on success.
	pub async fn submit(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<(), Error> {
		self.error = None;

		match backend.login(&self.email, &self.password).await {
			Ok(auth) => {
				session.sign_in(auth);
				Ok(())
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, "Login failed")),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
	pub username: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
	error: Option<String>,
}

impl RegisterForm {
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn validate(&self) -> Result<(), Error> {
		if self.password != self.confirm_password {
			return Err(Error::Validation("Passwords do not match".to_string()));
		}

		check_password_length(&self.password)
	}

	/// Creates the account and signs the session in.
	pub async fn submit(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<(), Error> {
		const FAILED: &str = "Registration failed";

		if let Err(e) = self.validate() {
			return Err(record_failure(&mut self.error, session, e, FAILED));
		}

		self.error = None;

		match backend
			.register(&self.username, &self.email, &self.password)
			.await
		{
			Ok(auth) => {
				info!(user = %auth.user.username, "account registered");
				session.sign_in(auth);
				Ok(())
			}
			Err(e) => Err(record_failure(&mut self.error, session, e, FAILED)),
		}
	}
}

/// Outcome line shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
	Success(String),
	Error(String),
}

/// Profile page: bio editing and password change.
#[derive(Debug, Default, Clone)]
pub struct ProfileForm {
	pub bio: String,
	pub current_password: String,
	pub new_password: String,
	pub confirm_password: String,
	notice: Option<Notice>,
}

impl ProfileForm {
	pub fn for_session(session: &Session) -> Self {
		Self {
			bio: session
				.user()
				.and_then(|u| u.bio.clone())
				.unwrap_or_default(),
			..Self::default()
		}
	}

	pub fn notice(&self) -> Option<&Notice> {
		self.notice.as_ref()
	}

	fn fail(&mut self, session: &mut Session, e: impl Into<Error>, fallback: &str) -> Error {
		let mut message = None;
		let e = record_failure(&mut message, session, e, fallback);
		self.notice = message.map(Notice::Error);
		e
	}

	pub async fn save_bio(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<(), Error> {
		self.notice = None;

		let input = ProfileInput {
			bio: Some(self.bio.clone()),
			..Default::default()
		};

		match backend.update_profile(session, &input).await {
			Ok(user) => {
				session.set_user(user);
				self.notice = Some(Notice::Success("Bio updated successfully!".to_string()));
				Ok(())
			}
			Err(e) => Err(self.fail(session, e, "Failed to update bio")),
		}
	}

	pub fn validate_password_change(&self) -> Result<(), Error> {
		if self.new_password != self.confirm_password {
			return Err(Error::Validation("New passwords do not match".to_string()));
		}

		check_password_length(&self.new_password)
	}

	/// Password fields are cleared on success.
	pub async fn change_password(
		&mut self,
		backend: &(impl Backend + ?Sized),
		session: &mut Session,
	) -> Result<(), Error> {
		const FAILED: &str = "Failed to change password";

		if let Err(e) = self.validate_password_change() {
			return Err(self.fail(session, e, FAILED));
		}

		self.notice = None;

		match backend
			.change_password(session, &self.current_password, &self.new_password)
			.await
		{
			Ok(()) => {
				self.current_password.clear();
				self.new_password.clear();
				self.confirm_password.clear();
				self.notice = Some(Notice::Success("Password changed successfully!".to_string()));
				Ok(())
			}
			Err(e) => Err(self.fail(session, e, FAILED)),
		}
	}
}

/// Fills in the user for a session restored from a stored token. A rejected
/// token signs the session out.
pub async fn restore_session(backend: &(impl Backend + ?Sized), session: &mut Session) {
	if !session.is_authenticated() {
		return;
	}

	match backend.me(session).await {
		Ok(user) => session.set_user(user),
		Err(e) => {
			warn!("Failed to restore session: {e}");
			session.handle_error(&e);
		}
	}
}
