//! In-memory repositories - used as fallback when no database is configured
//! and as the backing store for handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostChanges, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory post store using a HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.store.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        Ok(match self.store.write().await.remove(&id) {
            Some(_) => 1,
            None => 0,
        })
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            author_id: draft.author_id,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };

        self.store.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_by_id(&self, id: Uuid, changes: PostChanges) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&id) {
            Some(post) => {
                if let Some(title) = changes.title {
                    post.title = title;
                }
                if let Some(content) = changes.content {
                    post.content = content;
                }
                post.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// In-memory user store, mirroring [`InMemoryPostRepository`].
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.store.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        self.store.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        Ok(match self.store.write().await.remove(&id) {
            Some(_) => 1,
            None => 0,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> NewPost {
        NewPost {
            author_id: Uuid::new_v4(),
            title: title.to_string(),
            content: "Content".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create(draft("First")).await.unwrap();
        let second = repo.create(draft("Second")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_only_submitted_fields() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("Original")).await.unwrap();

        let affected = repo
            .update_by_id(
                post.id,
                PostChanges {
                    title: Some("Changed".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(affected, 1);
        let updated = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(updated.title, "Changed");
        assert_eq!(updated.content, "Content");
    }

    #[tokio::test]
    async fn test_update_missing_post_touches_nothing() {
        let repo = InMemoryPostRepository::new();

        let affected = repo
            .update_by_id(Uuid::new_v4(), PostChanges::default())
            .await
            .unwrap();

        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("Doomed")).await.unwrap();

        assert_eq!(repo.delete_by_id(post.id).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(post.id).await.unwrap(), 0);
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("reader@example.com".to_string(), "hash".to_string());
        repo.save(user.clone()).await.unwrap();

        let found = repo.find_by_email("reader@example.com").await.unwrap();

        assert_eq!(found.unwrap().id, user.id);
        assert!(repo.find_by_email("other@example.com").await.unwrap().is_none());
    }
}
