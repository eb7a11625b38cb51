//! Wire DTOs for the external auth endpoints.
//!
//! DESIGN
//! ======
//! The backend's response shape is trusted, not enforced: every field is
//! optional on decode, `success` accepts any JSON value, and empty strings
//! count as missing, so a sparse or slightly different body still produces
//! a usable `ApiResponse`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::copy::DEFAULT_USER_NAME;

/// Body of `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body shared by both endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    /// Whether the server accepted the request. Missing, `null`, or any
    /// non-boolean value means `false`.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub success: bool,
    /// Human-readable status from the server. Non-strings are dropped.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub message: Option<String>,
    /// Display name, present on successful login. Non-strings are dropped.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,
}

impl ApiResponse {
    /// Server message, or `None` when absent or empty.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Name to greet the user with.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_USER_NAME)
    }
}

/// Any JSON value, keeping only the shape the page understands.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Known(T),
    Other(IgnoredAny),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::<bool>::deserialize(deserializer)? {
        Loose::Known(value) => Ok(value),
        Loose::Other(_) => Ok(false),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::<String>::deserialize(deserializer)? {
        Loose::Known(value) => Ok(Some(value)),
        Loose::Other(_) => Ok(None),
    }
}
