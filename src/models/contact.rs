//! Contact message model matching the `contact_messages` table.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A message sent through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub created_at: String,
}

/// Contact form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactMessageRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

impl CreateContactMessageRequest {
    /// Trim every field; an empty phone counts as no phone.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            message: self.message.trim().to_string(),
        }
    }
}
