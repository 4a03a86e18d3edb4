use serde::{Deserialize, Serialize};

/// The account returned by the current-user endpoint.
///
/// Always fetched from the backend; never decoded out of the access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's login name.
    pub username: String,

    /// Whether the user may access the backend admin.
    pub is_staff: bool,

    /// Whether the user holds every permission.
    pub is_superuser: bool,
}
