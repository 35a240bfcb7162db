//! User domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier assigned by the store
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Display name
    #[schema(example = "John Doe")]
    pub name: Option<String>,
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateUser {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Display name
    #[serde(default)]
    #[schema(example = "John Doe")]
    pub name: Option<String>,
}

/// Partial user update.
///
/// Absent fields are left unchanged. For `name`, an explicit `null`
/// clears the stored value, so the field carries two levels of `Option`:
/// `None` (absent), `Some(None)` (null), `Some(Some(_))` (new value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New email address
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// New display name, or `null` to clear it
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>, example = "Jane Doe")]
    pub name: Option<Option<String>>,
}

impl UpdateUser {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none()
    }
}

/// Marks a field as present whenever its key appears, even with `null`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
