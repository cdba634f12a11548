//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Post, User};

/// Request body for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
}

/// Request body for updating a post. Absent fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A post as returned to clients.
///
/// The author rides along as a bare id reference; user records (and their
/// credential hash) have no field to leak through here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Id of the owning author.
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user's public information. The password hash stays in the persistence
/// layer; this shape has no field for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_response_exposes_author_as_id() {
        let post = Post {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            title: "A".to_string(),
            content: "B".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let author_id = post.author_id;

        let value = serde_json::to_value(PostResponse::from(post)).unwrap();

        assert_eq!(value["author"], serde_json::json!(author_id));
        assert!(value.get("author_id").is_none());
    }

    #[test]
    fn test_user_response_has_no_credential_field() {
        let user = User::new("reader@example.com".to_string(), "hash".to_string());

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(value["email"], "reader@example.com");
        assert!(value.get("password_hash").is_none());
    }

    #[test]
    fn test_update_dto_fields_default_to_none() {
        let dto: UpdatePostDto = serde_json::from_str(r#"{"title":"New"}"#).unwrap();

        assert_eq!(dto.title.as_deref(), Some("New"));
        assert!(dto.content.is_none());
    }
}
