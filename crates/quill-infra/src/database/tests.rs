#[cfg(test)]
mod tests {
    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use quill_core::domain::{NewPost, Post, PostChanges};
    use quill_core::ports::{BaseRepository, PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn post_row(title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            author_id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            content: "Content".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let row = post_row("Test Post");
        let post_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
    }

    #[tokio::test]
    async fn test_find_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_row("First"), post_row("Second")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts: Vec<Post> = repo.find_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[1].title, "Second");
    }

    #[tokio::test]
    async fn test_create_returns_the_stored_row() {
        // Postgres inserts go through RETURNING, so the mock answers with a
        // query result carrying the stored row.
        let row = post_row("Draft");
        let stored_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo
            .create(NewPost {
                author_id: uuid::Uuid::new_v4(),
                title: "Draft".to_owned(),
                content: "Content".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(post.id, stored_id);
        assert_eq!(post.title, "Draft");
    }

    #[tokio::test]
    async fn test_update_by_id_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let affected = repo
            .update_by_id(
                uuid::Uuid::new_v4(),
                PostChanges {
                    title: Some("Changed".to_owned()),
                    content: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(affected, 1);
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_zero_for_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let affected =
            BaseRepository::<Post, _>::delete_by_id(&repo, uuid::Uuid::new_v4()).await.unwrap();

        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let now = chrono::Utc::now();
        let row = user::Model {
            id: uuid::Uuid::new_v4(),
            email: "reader@example.com".to_owned(),
            password_hash: "hash".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = repo.find_by_email("reader@example.com").await.unwrap();

        assert_eq!(user.unwrap().email, "reader@example.com");
    }
}
