use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostChanges, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Fetch every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist an entity whose identifier the caller already owns.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, reporting how many rows went away.
    async fn delete_by_id(&self, id: ID) -> Result<u64, RepoError>;
}

/// Post repository.
///
/// Creation goes through [`PostRepository::create`] so that the persistence
/// side assigns identifiers, never the caller.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Store a draft, assigning its identifier and timestamps.
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError>;

    /// Merge changes into a stored post, reporting affected rows.
    async fn update_by_id(&self, id: Uuid, changes: PostChanges) -> Result<u64, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}
