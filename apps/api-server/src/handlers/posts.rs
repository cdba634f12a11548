//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::{NewPost, PostChanges};
use quill_core::ports::{BaseRepository, PostRepository};
use quill_shared::dto::{CreatePostDto, PostResponse, UpdatePostDto};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts - Protected route
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostDto>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            author_id: identity.user_id,
            title: req.title,
            content: req.content,
        })
        .await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// PUT /posts/{id} - Protected route
pub async fn update_post(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostDto>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    state
        .posts
        .update_by_id(
            id,
            PostChanges {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    // Re-read so the response reflects exactly what is stored
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /posts/{id} - Protected route
pub async fn delete_post(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let affected = state.posts.delete_by_id(id).await?;
    if affected == 1 {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(post_not_found(id))
    }
}
