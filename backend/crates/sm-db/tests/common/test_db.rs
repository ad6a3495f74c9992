#![allow(dead_code)]

use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = sm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    sm_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed pool with several connections, for tests that need real
/// concurrency. Keep the `TempDir` alive for as long as the pool.
pub async fn create_file_pool() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = sm_db::connect(&dir.path().join("test.db"))
        .await
        .expect("Failed to open file pool");

    sm_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    (dir, pool)
}

/// Inserts a minimal user row for foreign key constraints
pub async fn create_test_user(pool: &SqlitePool) -> Uuid {
    let user_id = Uuid::new_v4();

    sqlx::query(
        r#"
          INSERT INTO users (id, email, password_hash, date_joined, updated_at)
          VALUES (?, ?, 'x', 0, 0)
          "#,
    )
    .bind(user_id.to_string())
    .bind(format!("test-{}@example.com", user_id))
    .execute(pool)
    .await
    .expect("Failed to create test user");

    user_id
}
