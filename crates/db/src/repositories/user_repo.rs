//! Repository for the `users` table.

use gatehouse_core::email;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, name, phone, password_hash, is_admin, created_at, updated_at";

/// Provides directory operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// The email is normalized (trimmed, lowercased) before insert so the
    /// unique constraint applies to the canonical form.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, phone, password_hash, is_admin)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email::normalize(&input.email))
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.password_hash)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }

    /// Find a user by email. The lookup key is normalized first, so the
    /// match is effectively case-insensitive.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email::normalize(email))
            .fetch_optional(pool)
            .await
    }
}
