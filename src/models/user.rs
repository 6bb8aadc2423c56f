use serde::{Deserialize, Serialize};

use super::exercise::Exercise;

/// A registered user and their exercise history
///
/// Users live for the lifetime of the process; there is no update or delete
/// operation, and the exercise sequence is append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned from the store's monotonic counter
    pub id: String,
    /// Display name, trimmed at creation; not required to be unique
    pub username: String,
    /// Logged exercises in insertion order
    pub exercises: Vec<Exercise>,
}

/// User projection for API responses (`{username, _id}`)
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
            id: self.id.clone(),
        }
    }
}
