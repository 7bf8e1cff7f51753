//! Signed-in user session.

use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated user, persisted so the app can restore it on launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub phone: Option<String>,
    /// Bearer token issued by the Appointment Service
    pub auth_token: String,
    /// RFC 3339 timestamp of sign-in
    pub signed_in_at: String,
}

impl Session {
    pub fn new(user_id: String, display_name: String, auth_token: String) -> Self {
        Self {
            user_id,
            display_name,
            phone: None,
            auth_token,
            signed_in_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// `Authorization` header value for the host's HTTP client.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.auth_token)
    }
}
