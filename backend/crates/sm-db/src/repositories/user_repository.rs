use crate::row::{timestamp_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use sm_core::{PageRequest, User};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

const USER_COLUMNS: &str = r#"
    id, email, username, first_name, last_name, bio, profile_image, online,
    password_hash, is_staff, is_superuser, is_active, date_joined, updated_at
"#;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    username: Option<String>,
    first_name: String,
    last_name: String,
    bio: Option<String>,
    profile_image: Option<String>,
    online: bool,
    password_hash: String,
    is_staff: bool,
    is_superuser: bool,
    is_active: bool,
    date_joined: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: uuid_column("users", &r.id)?,
            email: r.email,
            username: r.username,
            first_name: r.first_name,
            last_name: r.last_name,
            bio: r.bio,
            profile_image: r.profile_image,
            online: r.online,
            password_hash: r.password_hash,
            is_staff: r.is_staff,
            is_superuser: r.is_superuser,
            is_active: r.is_active,
            date_joined: timestamp_column("users", r.date_joined)?,
            updated_at: timestamp_column("users", r.updated_at)?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account. Email and username collisions come back as
    /// [`DbError::Duplicate`].
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, email, username, first_name, last_name, bio, profile_image, online,
                  password_hash, is_staff, is_superuser, is_active, date_joined, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(&user.profile_image)
        .bind(user.online)
        .bind(&user.password_hash)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(user.is_active)
        .bind(user.date_joined.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(duplicate_or_sqlx)?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE email = ?",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn list(&self, page: PageRequest) -> DbErrorResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users ORDER BY date_joined ASC, rowid ASC LIMIT ? OFFSET ?",
            USER_COLUMNS
        ))
        .bind(page.limit as i64)
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    pub async fn exists(&self, id: Uuid) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Persist the editable profile fields. Returns false if the user is gone.
    pub async fn update(&self, user: &User) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET username = ?, first_name = ?, last_name = ?, bio = ?,
                  profile_image = ?, online = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(&user.profile_image)
        .bind(user.online)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(duplicate_or_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Posts, comments, likes and follow edges go with the row.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn duplicate_or_sqlx(err: sqlx::Error) -> DbError {
    let unique_message = match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => Some(db.message()),
        _ => None,
    };

    if let Some(message) = unique_message {
        let field = if message.contains("users.username") {
            "username"
        } else {
            "email"
        };
        return DbError::Duplicate {
            field: field.to_string(),
            message: format!("a user with this {} already exists", field),
            location: ErrorLocation::from(Location::caller()),
        };
    }

    DbError::from(err)
}
