//! Client Session Entity
//!
//! Server-side session row referenced by the HMAC-signed cookie token.

use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::entity::client::Client;
use crate::domain::value_object::Email;

/// Client session
#[derive(Debug, Clone)]
pub struct ClientSession {
    /// Session ID (UUID v4); the signed cookie token references this
    pub session_id: Uuid,
    pub cliente_id: i64,
    pub cliente_nome: String,
    pub cliente_email: Email,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl ClientSession {
    /// Create a session for a logged-in client.
    ///
    /// TTL is provided by the application layer (config), not hard-coded
    /// here.
    pub fn for_client(client: &Client, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            cliente_id: client.id,
            cliente_nome: client.nome.clone(),
            cliente_email: client.email.clone(),
            expires_at_ms: now.timestamp_millis() + ttl.as_millis() as i64,
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}
