//! # ブログ記事ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/blog` - 記事一覧
//! - `GET /api/v1/blog/comments` - コメント付き記事一覧
//! - `GET /api/v1/blog/{blog_id}` - コメント付き記事詳細
//! - `POST /api/v1/blog` - 記事作成
//! - `PUT /api/v1/blog/{blog_id}` - 記事更新
//! - `DELETE /api/v1/blog/{blog_id}` - 記事と紐づくコメントの削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use blogapi_domain::blog::{Blog, BlogChanges, BlogDraft, BlogWithComments};
use blogapi_shared::{ApiResponse, MessageResponse};
use serde::{Deserialize, Serialize};

use super::comment::CommentDto;
use crate::{
   error::BlogServiceError,
   extract::{AppJson, parse_blog_id},
   usecase::BlogUseCaseImpl,
};

/// ブログ記事 API の共有状態
pub struct BlogState {
   pub usecase: BlogUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 記事作成リクエスト
///
/// 欠落したフィールドはバリデーションで「未入力」として扱う。
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
   pub title:  Option<String>,
   pub body:   Option<String>,
   pub author: Option<String>,
}

/// 記事更新リクエスト
///
/// `author` が送られても無視する。
#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
   pub title: Option<String>,
   pub body:  Option<String>,
}

/// 記事 DTO
///
/// `comments` は一覧 API では省略し、詳細・コメント付き一覧 API でのみ出力する。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
   pub id:         String,
   pub title:      String,
   pub body:       String,
   pub author:     String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub comments:   Option<Vec<CommentDto>>,
   pub created_at: String,
   pub updated_at: String,
}

impl From<Blog> for BlogDto {
   fn from(blog: Blog) -> Self {
      Self {
         id:         blog.id().to_string(),
         title:      blog.title().to_string(),
         body:       blog.body().to_string(),
         author:     blog.author().to_string(),
         comments:   None,
         created_at: blog.created_at().to_rfc3339(),
         updated_at: blog.updated_at().to_rfc3339(),
      }
   }
}

impl From<BlogWithComments> for BlogDto {
   fn from(value: BlogWithComments) -> Self {
      Self {
         comments: Some(value.comments.into_iter().map(CommentDto::from).collect()),
         ..Self::from(value.blog)
      }
   }
}

/// 記事更新レスポンス
#[derive(Debug, Serialize)]
pub struct UpdateBlogResponse {
   pub success: bool,
   pub blog:    BlogDto,
}

// --- ハンドラ ---

/// GET /api/v1/blog
pub async fn list_blogs(
   State(state): State<Arc<BlogState>>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blogs = state.usecase.list_blogs().await?;

   let items: Vec<BlogDto> = blogs.into_iter().map(BlogDto::from).collect();
   Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /api/v1/blog/comments
///
/// 各記事に、その記事を参照するコメントを結合して返す。
pub async fn list_blogs_with_comments(
   State(state): State<Arc<BlogState>>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blogs = state.usecase.list_blogs_with_comments().await?;

   let items: Vec<BlogDto> = blogs.into_iter().map(BlogDto::from).collect();
   Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /api/v1/blog/{blog_id}
pub async fn get_blog(
   State(state): State<Arc<BlogState>>,
   Path(blog_id): Path<String>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&blog_id)?;

   let blog = state.usecase.get_blog(&blog_id).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(BlogDto::from(blog)))))
}

/// POST /api/v1/blog
///
/// ## レスポンス
///
/// - `201 Created`: 作成された記事
/// - `400 Bad Request`: 入力値の制約違反、不正な JSON
pub async fn create_blog(
   State(state): State<Arc<BlogState>>,
   AppJson(req): AppJson<CreateBlogRequest>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let draft = BlogDraft {
      title:  req.title,
      body:   req.body,
      author: req.author,
   };

   let blog = state.usecase.create_blog(draft).await?;

   Ok((StatusCode::CREATED, Json(ApiResponse::new(BlogDto::from(blog)))))
}

/// PUT /api/v1/blog/{blog_id}
///
/// ## レスポンス
///
/// - `201 Created`: 更新後の記事
/// - `400 Bad Request`: 入力値の制約違反
/// - `404 Not Found`: 記事が見つからない
/// - `500 Internal Server Error`: 更新結果が返らない
pub async fn update_blog(
   State(state): State<Arc<BlogState>>,
   Path(blog_id): Path<String>,
   AppJson(req): AppJson<UpdateBlogRequest>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&blog_id)?;
   let changes = BlogChanges {
      title: req.title,
      body:  req.body,
   };

   let blog = state.usecase.update_blog(&blog_id, changes).await?;

   let response = UpdateBlogResponse {
      success: true,
      blog:    BlogDto::from(blog),
   };
   Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/v1/blog/{blog_id}
///
/// 記事を参照するコメントもすべて削除する。
pub async fn delete_blog(
   State(state): State<Arc<BlogState>>,
   Path(blog_id): Path<String>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&blog_id)?;

   state.usecase.delete_blog(&blog_id).await?;

   let response =
      MessageResponse::new("Blog successfully deleted alongside all related comments");
   Ok((StatusCode::OK, Json(response)))
}
