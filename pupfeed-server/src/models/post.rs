//! Post creation input

use super::validation::{present, ValidationError};

/// Validated post creation input.
///
/// The owner id is only checked for presence here; whether it resolves
/// to a user is decided by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    user_id: i64,
    image_url: String,
    text_content: Option<String>,
}

impl NewPost {
    pub fn new(
        user_id: Option<i64>,
        image_url: Option<&str>,
        text_content: Option<String>,
    ) -> Result<Self, ValidationError> {
        let user_id = user_id.ok_or(ValidationError::Required {
            fields: &["user_id"],
        })?;
        let image_url = present(image_url).ok_or(ValidationError::Required {
            fields: &["image_url"],
        })?;

        Ok(Self {
            user_id,
            image_url: image_url.to_owned(),
            text_content,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text_content.as_deref()
    }
}
