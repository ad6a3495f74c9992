#![allow(dead_code)]

use sm_core::{Comment, NewUser, Post, User};

use uuid::Uuid;

/// Creates a test User with a unique email and username
pub fn create_test_account(name: &str) -> User {
    let suffix = Uuid::new_v4().simple().to_string();
    NewUser::regular(format!("{}-{}@Example.com", name, suffix), "secret")
        .with_username(format!("{}-{}", name, &suffix[..8]))
        .into_user("$argon2id$test-hash".to_string())
}

/// Creates a test Post with sensible defaults
pub fn create_test_post(author_id: Uuid) -> Post {
    Post::new(author_id, "Test post content".to_string())
}

/// Creates a test Comment with sensible defaults
pub fn create_test_comment(post_id: Uuid, author_id: Uuid) -> Comment {
    Comment::new(post_id, author_id, "Test comment content".to_string())
}
