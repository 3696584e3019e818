//! Mock auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no auth backend. Login and signup validate form input and then
//! record the user locally; logout forgets them. The router never reads this
//! state, but pages choose navigation targets from it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Form validation failures, shown inline on the login/signup forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Enter your email address.")]
    MissingEmail,
    #[error("Enter your password.")]
    MissingPassword,
    #[error("Enter your full name.")]
    MissingName,
}

/// Display fields for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    /// Validate login input. The display name is the email's local part.
    ///
    /// # Errors
    ///
    /// Returns the first missing field after trimming.
    pub fn from_login(email: &str, password: &str) -> Result<Self, AuthError> {
        let email = required(email, AuthError::MissingEmail)?;
        required(password, AuthError::MissingPassword)?;
        let name = email.split('@').next().unwrap_or(email).to_owned();
        Ok(Self { name, email: email.to_owned() })
    }

    /// Validate signup input.
    ///
    /// # Errors
    ///
    /// Returns the first missing field (name, email, password) after trimming.
    pub fn from_signup(name: &str, email: &str, password: &str) -> Result<Self, AuthError> {
        let name = required(name, AuthError::MissingName)?;
        let email = required(email, AuthError::MissingEmail)?;
        required(password, AuthError::MissingPassword)?;
        Ok(Self { name: name.to_owned(), email: email.to_owned() })
    }

    /// Uppercased first letter of the name, for the profile avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

fn required(value: &str, missing: AuthError) -> Result<&str, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(missing) } else { Ok(trimmed) }
}

/// Authentication state: signed in iff a user is present.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Validate and sign in with login credentials.
    ///
    /// # Errors
    ///
    /// See [`User::from_login`]; state is unchanged on error.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.user = Some(User::from_login(email, password)?);
        Ok(())
    }

    /// Validate and sign in with signup details.
    ///
    /// # Errors
    ///
    /// See [`User::from_signup`]; state is unchanged on error.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        self.user = Some(User::from_signup(name, email, password)?);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}
