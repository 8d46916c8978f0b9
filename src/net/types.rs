//! JSON DTOs for the photo API boundary.
//!
//! DESIGN
//! ======
//! Shapes mirror the remote service's responses. Optional or null fields are
//! defaulted at decode time so rendering code never has to branch on
//! missing arrays.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A stored photo as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Opaque server identifier. Sent as `_id`; `id` is also accepted.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Publicly fetchable image URL.
    pub url: String,
}

/// Response body of `GET /photos/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_photos")]
    pub photos: Vec<Photo>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Credentials used for the automatic login that follows signup.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Response body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl TokenResponse {
    /// The token, if present and non-empty.
    #[must_use]
    pub fn into_token(self) -> Option<String> {
        self.token.filter(|t| !t.is_empty())
    }
}

/// Response body of `POST /photos/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadPhotoResponse {
    pub photo: Photo,
}

/// Response body of `POST /photos/avatar`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AvatarResponse {
    pub avatar: String,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}

fn deserialize_photos<'de, D>(deserializer: D) -> Result<Vec<Photo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Photo>>::deserialize(deserializer)?.unwrap_or_default())
}
