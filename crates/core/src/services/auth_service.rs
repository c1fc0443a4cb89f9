use crate::errors::CoreError;
use crate::models::user::User;

/// Trivial in-memory login state. There is no credential check.
#[derive(Debug, Default)]
pub struct AuthService {
    current_user: Option<User>,
}

impl AuthService {
    pub fn new() -> Self {
        Self { current_user: None }
    }

    /// Mark `name` / `email` as the signed-in user, replacing any previous one.
    pub fn login(&mut self, name: &str, email: &str) -> Result<&User, CoreError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError("User name must not be empty".into()));
        }
        if !email.contains('@') {
            return Err(CoreError::ValidationError(format!(
                "Invalid e-mail address '{email}'"
            )));
        }
        tracing::info!(user = name, "user signed in");
        Ok(&*self.current_user.insert(User::new(name, email)))
    }

    /// Returns `true` if someone was signed in.
    pub fn logout(&mut self) -> bool {
        let was_logged_in = self.current_user.take().is_some();
        if was_logged_in {
            tracing::info!("user signed out");
        }
        was_logged_in
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }
}
