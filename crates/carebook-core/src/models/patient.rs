//! Patient models.

use serde::{Deserialize, Serialize};

/// A patient registered from this device, with dual-ID support.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Local UUID - always present, generated locally
    pub local_id: String,
    /// Appointment Service ID - null until registration is confirmed
    pub server_id: Option<String>,
    /// Full name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Gender as entered on the registration form
    pub gender: Option<String>,
    /// Date of birth (ISO date)
    pub date_of_birth: Option<String>,
    /// Relationship to the account holder (e.g. "self", "mother")
    pub relation: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(name: String, phone: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            local_id: uuid::Uuid::new_v4().to_string(),
            server_id: None,
            name,
            phone,
            gender: None,
            date_of_birth: None,
            relation: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check if the server has confirmed this registration.
    pub fn is_registered(&self) -> bool {
        self.server_id.is_some()
    }

    /// Phone number with spaces and dashes removed.
    pub fn normalized_phone(&self) -> String {
        self.phone
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    }
}
