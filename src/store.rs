use std::sync::{Arc, Mutex};

use crate::constants::ERR_USERNAME_REQUIRED;
use crate::error::{AppError, Result};
use crate::models::{User, UserSummary};

/// Shared store handle (Arc/Mutex-wrapped for sharing across handlers)
///
/// Request handlers lock the store for the duration of their in-memory work,
/// which keeps mutations serialized under the multithreaded runtime.
pub type Store = Arc<Mutex<UserStore>>;

/// Create a fresh store handle with no users and the id counter at 1
pub fn new_store() -> Store {
    Arc::new(Mutex::new(UserStore::new()))
}

/// All registered users plus the id counter
///
/// Nothing is persisted; state lives exactly as long as the process.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        UserStore {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new user
    ///
    /// Rejects a missing or blank username without touching the store; the
    /// id counter only advances on success and is never reused.
    pub fn create_user(&mut self, username: Option<&str>) -> Result<UserSummary> {
        let username = username.unwrap_or("").trim();
        if username.is_empty() {
            return Err(AppError::Validation(ERR_USERNAME_REQUIRED.to_string()));
        }

        let user = User {
            id: self.next_id.to_string(),
            username: username.to_string(),
            exercises: Vec::new(),
        };
        self.next_id += 1;

        let summary = user.summary();
        self.users.push(user);

        Ok(summary)
    }

    /// All users as `{username, _id}` projections, in creation order
    pub fn list_users(&self) -> Vec<UserSummary> {
        self.users.iter().map(User::summary).collect()
    }

    /// Resolve a user by id
    pub fn find_user(&self, id: &str) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound)
    }

    /// Resolve a user by id for mutation
    pub fn find_user_mut(&mut self, id: &str) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::UserNotFound)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
