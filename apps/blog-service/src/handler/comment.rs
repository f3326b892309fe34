//! # コメントハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/comment/{blog_id}` - 記事のコメント一覧
//! - `POST /api/v1/comment/{blog_id}` - コメント投稿
//! - `GET /api/v1/comment/{blog_id}/comment/{comment_id}` - コメント詳細
//! - `PUT /api/v1/comment/{blog_id}/comment/{comment_id}` - コメント本文の更新
//! - `DELETE /api/v1/comment/{blog_id}/comment/{comment_id}` - コメント削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use blogapi_domain::comment::{Comment, CommentChanges, CommentDraft};
use blogapi_shared::{ApiResponse, MessageResponse};
use serde::{Deserialize, Serialize};

use crate::{
   error::BlogServiceError,
   extract::{AppJson, parse_blog_id, parse_comment_id},
   usecase::CommentUseCaseImpl,
};

/// コメント API の共有状態
pub struct CommentState {
   pub usecase: CommentUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// コメント投稿リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
   pub comment_body:   Option<String>,
   pub comment_author: Option<String>,
}

/// コメント更新リクエスト
///
/// `commentAuthor` が送られても無視する。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
   pub comment_body: Option<String>,
}

/// コメント DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
   pub id:             String,
   /// 親記事 ID
   pub blog:           String,
   pub comment_body:   String,
   pub comment_author: String,
   pub created_at:     String,
   pub updated_at:     String,
}

impl From<Comment> for CommentDto {
   fn from(comment: Comment) -> Self {
      Self {
         id:             comment.id().to_string(),
         blog:           comment.blog_id().to_string(),
         comment_body:   comment.body().to_string(),
         comment_author: comment.author().to_string(),
         created_at:     comment.created_at().to_rfc3339(),
         updated_at:     comment.updated_at().to_rfc3339(),
      }
   }
}

/// 記事のコメント一覧 DTO
#[derive(Debug, Serialize)]
pub struct BlogCommentsDto {
   #[serde(rename = "blogID")]
   pub blog_id:  String,
   pub comments: Vec<CommentDto>,
}

/// 記事のコメント詳細 DTO
#[derive(Debug, Serialize)]
pub struct BlogCommentDto {
   #[serde(rename = "blogID")]
   pub blog_id: String,
   pub comment: CommentDto,
}

/// コメント更新レスポンス
#[derive(Debug, Serialize)]
pub struct UpdateCommentResponse {
   pub success: bool,
   pub comment: CommentDto,
}

// --- ハンドラ ---

/// GET /api/v1/comment/{blog_id}
///
/// 記事の存在は確認せず、該当するコメントがなければ空の一覧を返す。
pub async fn list_comments(
   State(state): State<Arc<CommentState>>,
   Path(raw_blog_id): Path<String>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&raw_blog_id)?;

   let comments = state.usecase.list_comments(&blog_id).await?;

   let response = ApiResponse::new(BlogCommentsDto {
      blog_id:  raw_blog_id,
      comments: comments.into_iter().map(CommentDto::from).collect(),
   });
   Ok((StatusCode::OK, Json(response)))
}

/// POST /api/v1/comment/{blog_id}
///
/// ## レスポンス
///
/// - `201 Created`: 投稿されたコメント
/// - `400 Bad Request`: 入力値の制約違反
/// - `404 Not Found`: 記事が見つからない
pub async fn create_comment(
   State(state): State<Arc<CommentState>>,
   Path(blog_id): Path<String>,
   AppJson(req): AppJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&blog_id)?;
   let draft = CommentDraft {
      body:   req.comment_body,
      author: req.comment_author,
   };

   let comment = state.usecase.create_comment(&blog_id, draft).await?;

   Ok((
      StatusCode::CREATED,
      Json(ApiResponse::new(CommentDto::from(comment))),
   ))
}

/// GET /api/v1/comment/{blog_id}/comment/{comment_id}
pub async fn get_comment(
   State(state): State<Arc<CommentState>>,
   Path((raw_blog_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&raw_blog_id)?;
   let comment_id = parse_comment_id(&comment_id)?;

   let comment = state.usecase.get_comment(&blog_id, &comment_id).await?;

   let response = ApiResponse::new(BlogCommentDto {
      blog_id: raw_blog_id,
      comment: CommentDto::from(comment),
   });
   Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/v1/comment/{blog_id}/comment/{comment_id}
///
/// 本文のみ更新する。コメント ID は記事の解決後にユースケースでパースする。
pub async fn update_comment(
   State(state): State<Arc<CommentState>>,
   Path((blog_id, comment_id)): Path<(String, String)>,
   AppJson(req): AppJson<UpdateCommentRequest>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&blog_id)?;
   let changes = CommentChanges {
      body: req.comment_body,
   };

   let comment = state
      .usecase
      .update_comment(&blog_id, &comment_id, changes)
      .await?;

   let response = UpdateCommentResponse {
      success: true,
      comment: CommentDto::from(comment),
   };
   Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/v1/comment/{blog_id}/comment/{comment_id}
pub async fn delete_comment(
   State(state): State<Arc<CommentState>>,
   Path((blog_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, BlogServiceError> {
   let blog_id = parse_blog_id(&blog_id)?;

   state.usecase.delete_comment(&blog_id, &comment_id).await?;

   Ok((
      StatusCode::OK,
      Json(MessageResponse::new("Comment successfully deleted.")),
   ))
}
