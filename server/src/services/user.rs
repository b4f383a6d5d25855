//! User storage keyed by unique username.
//!
//! DESIGN
//! ======
//! Usernames are unique at the schema level; the service maps the unique
//! constraint violation to [`UserError::UsernameTaken`] instead of checking
//! first, so concurrent registrations cannot both succeed.

use models::User;
use models::user::{UsernameError, normalize_username};
use sqlx::SqlitePool;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("username {0:?} already exists")]
    UsernameTaken(String),
    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

type UserRow = (String, String, Option<String>);

fn to_user((user_id, username, photo): UserRow) -> User {
    User { user_id, username, photo }
}

fn map_write_error(err: sqlx::Error, username: &str) -> UserError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => UserError::UsernameTaken(username.to_owned()),
        other => UserError::Database(other),
    }
}

/// New 32-char lowercase hex identifier.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Register a new user.
///
/// # Errors
///
/// Returns [`UserError::InvalidUsername`] for blank input and
/// [`UserError::UsernameTaken`] if the name is in use.
pub async fn create_user(pool: &SqlitePool, username: &str) -> Result<User, UserError> {
    let username = normalize_username(username)?;
    let row = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (user_id, username) VALUES (?, ?) RETURNING user_id, username, photo",
    )
    .bind(new_id())
    .bind(username)
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_error(e, username))?;

    let user = to_user(row);
    info!(user_id = %user.user_id, username = %user.username, "user created");
    Ok(user)
}

/// Fetch one user.
///
/// # Errors
///
/// Returns [`UserError::NotFound`] if no user has this ID.
pub async fn get_user(pool: &SqlitePool, user_id: &str) -> Result<User, UserError> {
    sqlx::query_as::<_, UserRow>("SELECT user_id, username, photo FROM users WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .map(to_user)
        .ok_or_else(|| UserError::NotFound(user_id.to_owned()))
}

/// List all users ordered by username.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, UserError> {
    let rows = sqlx::query_as::<_, UserRow>("SELECT user_id, username, photo FROM users ORDER BY username")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(to_user).collect())
}

/// Rename a user.
///
/// # Errors
///
/// Returns [`UserError::NotFound`] for an unknown ID and
/// [`UserError::UsernameTaken`] if another user holds the name.
pub async fn update_username(pool: &SqlitePool, user_id: &str, new_username: &str) -> Result<User, UserError> {
    let new_username = normalize_username(new_username)?;
    let row = sqlx::query_as::<_, UserRow>(
        "UPDATE users SET username = ? WHERE user_id = ? RETURNING user_id, username, photo",
    )
    .bind(new_username)
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| map_write_error(e, new_username))?
    .ok_or_else(|| UserError::NotFound(user_id.to_owned()))?;

    info!(%user_id, username = %new_username, "username updated");
    Ok(to_user(row))
}

/// Delete a user; their conversation memberships go with them.
///
/// # Errors
///
/// Returns [`UserError::NotFound`] if no user has this ID.
pub async fn delete_user(pool: &SqlitePool, user_id: &str) -> Result<(), UserError> {
    let result = sqlx::query("DELETE FROM users WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(UserError::NotFound(user_id.to_owned()));
    }
    info!(%user_id, "user deleted");
    Ok(())
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
