//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/health", web::get().to(health::health_check))
        // Auth routes
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(auth::register))
                .route("/login", web::post().to(auth::login))
                .route("/me", web::get().to(auth::me)),
        )
        // Post routes
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web::Data};
    use std::sync::Arc;

    use quill_core::ports::{BaseRepository, TokenService};
    use quill_infra::{
        InMemoryPostRepository, InMemoryUserRepository, JwtConfig, JwtTokenService,
    };

    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            posts: Arc::new(InMemoryPostRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    fn test_tokens() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }))
    }

    #[actix_web::test]
    async fn test_mutations_without_token_are_rejected() {
        let state = test_state();

        let app = test::init_service(
            App::new()
                .app_data(Data::new(state.clone()))
                .app_data(Data::new(test_tokens()))
                .configure(configure_routes),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/posts")
                .set_json(serde_json::json!({"title": "A", "content": "B"}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(state.posts.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_with_bearer_token_succeeds() {
        let state = test_state();
        let tokens = test_tokens();
        let user_id = uuid::Uuid::new_v4();
        let token = tokens
            .generate_token(user_id, "author@example.com")
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(Data::new(state.clone()))
                .app_data(Data::new(tokens))
                .configure(configure_routes),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/posts")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(serde_json::json!({"title": "A", "content": "B"}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["author"], serde_json::json!(user_id));
        assert!(body["id"].is_string());
    }

    #[actix_web::test]
    async fn test_malformed_path_id_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(test_state()))
                .app_data(Data::new(test_tokens()))
                .configure(configure_routes),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/posts/not-a-uuid").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
