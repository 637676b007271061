//! Signed-in user identity and login input validation.

use crate::backend::api::{AuthError, Credentials, VerifyResponse};

/// Shown when no display name can be derived from the username.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=50;
const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 1..=255;

/// The authenticated user, as confirmed by the verify endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
    display_name: String,
}

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        let display_name = Self::derive_display_name(&username);
        Self {
            username,
            display_name,
        }
    }

    /// Strips the domain part of an email-style username.
    ///
    /// `"alice@example.com"` becomes `"alice"`; an empty local part falls
    /// back to [`DEFAULT_DISPLAY_NAME`].
    pub fn derive_display_name(username: &str) -> String {
        match username.split('@').next() {
            Some(local) if !local.is_empty() => local.to_string(),
            _ => DEFAULT_DISPLAY_NAME.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<VerifyResponse> for Identity {
    fn from(response: VerifyResponse) -> Self {
        Self::new(response.username.unwrap_or_default())
    }
}

/// Checks credentials before they are sent, using the same bounds as the API.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, AuthError> {
    let username = username.trim();

    if !USERNAME_LEN.contains(&username.chars().count()) {
        return Err(AuthError::Invalid(format!(
            "Username must be {}-{} characters long",
            USERNAME_LEN.start(),
            USERNAME_LEN.end()
        )));
    }

    // Length is judged on the trimmed value; the raw password is what gets sent.
    if !PASSWORD_LEN.contains(&password.trim().chars().count()) {
        return Err(AuthError::Invalid(format!(
            "Password must be {}-{} characters long",
            PASSWORD_LEN.start(),
            PASSWORD_LEN.end()
        )));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
