//! User registration and login input

use super::validation::{present, ValidationError};

/// Validated registration input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Both name and email must be present and non-blank.
    ///
    /// # Example
    /// ```
    /// use pupfeed_server::models::NewUser;
    ///
    /// assert!(NewUser::new(Some("Rex"), Some("rex@example.com")).is_ok());
    /// assert!(NewUser::new(Some("Rex"), None).is_err());
    /// ```
    pub fn new(name: Option<&str>, email: Option<&str>) -> Result<Self, ValidationError> {
        match (present(name), present(email)) {
            (Some(name), Some(email)) => Ok(Self {
                name: name.to_owned(),
                email: email.to_owned(),
            }),
            _ => Err(ValidationError::Required {
                fields: &["name", "email"],
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Email used to look a user up at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEmail(String);

impl LoginEmail {
    pub fn new(email: Option<&str>) -> Result<Self, ValidationError> {
        present(email)
            .map(|e| Self(e.to_owned()))
            .ok_or(ValidationError::Required { fields: &["email"] })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
