use wf_api::{AuthResponse, User};

use tracing::{debug, info, warn};

/// Who is signed in. Controllers receive it explicitly instead of reading any
/// global state.
#[derive(Debug, Default, Clone)]
pub struct Session {
	token: Option<String>,
	user: Option<User>,
}

impl Session {
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// Restores a persisted token. The user is filled in later by
	/// [`crate::Backend::me`].
	pub fn with_token(token: impl Into<String>) -> Self {
		Self {
			token: Some(token.into()),
			user: None,
		}
	}

	pub fn token(&self) -> Option<&str> {
		self.token.as_deref()
	}

	pub fn user(&self) -> Option<&User> {
		self.user.as_ref()
	}

	pub fn user_id(&self) -> Option<&str> {
		self.user.as_ref().map(|u| u.id.as_str())
	}

	pub fn is_authenticated(&self) -> bool {
		self.token.is_some()
	}

	pub fn is_admin(&self) -> bool {
		self.user.as_ref().is_some_and(User::is_admin)
	}

	pub fn sign_in(&mut self, auth: AuthResponse) {
		info!(user = %auth.user.username, "signed in");
		self.token = Some(auth.token);
		self.user = Some(auth.user);
	}

	pub fn set_user(&mut self, user: User) {
		self.user = Some(user);
	}

	pub fn sign_out(&mut self) {
		if self.token.take().is_some() {
			debug!("session cleared");
		}
		self.user = None;
	}

	/// A 401 means the stored token is no longer accepted.
	pub fn handle_error(&mut self, e: &wf_api::Error) {
		if e.is_unauthorized() && self.is_authenticated() {
			warn!("token rejected by server, signing out");
			self.sign_out();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use reqwest::StatusCode;
	use wf_api::Role;

	fn admin() -> AuthResponse {
		AuthResponse {
			token: "tok".to_string(),
			user: User {
				id: "u1".to_string(),
				username: "ada".to_string(),
				role: Role::Admin,
				..Default::default()
			},
		}
	}

	#[test]
	fn unauthorized_clears_the_session() {
		let mut session = Session::anonymous();
		session.sign_in(admin());
		assert!(session.is_admin());
		assert_eq!(session.user_id(), Some("u1"));

		session.handle_error(&wf_api::Error::Server {
			status: StatusCode::FORBIDDEN,
			message: Some("Not allowed".to_string()),
		});
		assert!(session.is_authenticated());

		session.handle_error(&wf_api::Error::Server {
			status: StatusCode::UNAUTHORIZED,
			message: Some("Token expired".to_string()),
		});
		assert!(!session.is_authenticated());
		assert!(session.user().is_none());
	}
}
