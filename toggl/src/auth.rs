use std::fmt;

use thiserror::Error;

/// Toggl expects the API token as the basic-auth user name and this literal as the password.
pub const API_TOKEN_PASSWORD: &str = "api_token";

#[derive(Clone)]
pub struct Credentials {
    api_token: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Missing API token")]
    MissingApiToken,
}

impl Credentials {
    pub fn new(api_token: impl Into<String>) -> Result<Self, CredentialsError> {
        let api_token = api_token.into().trim().to_string();
        if api_token.is_empty() {
            return Err(CredentialsError::MissingApiToken);
        }

        Ok(Self { api_token })
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn password(&self) -> &'static str {
        API_TOKEN_PASSWORD
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"<redacted>")
            .finish()
    }
}
