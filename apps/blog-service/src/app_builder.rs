//! # ルーター構築
//!
//! 本番起動（`main.rs`）と HTTP テストで同じルーティングを使うため、
//! ルーターの組み立てをここに集約する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{
   BlogState,
   CommentState,
   create_blog,
   create_comment,
   delete_blog,
   delete_comment,
   get_blog,
   get_comment,
   health_check,
   list_blogs,
   list_blogs_with_comments,
   list_comments,
   route_not_found,
   update_blog,
   update_comment,
};

/// 記事 API のベースパス
pub const BLOG_BASE_PATH: &str = "/api/v1/blog";
/// コメント API のベースパス
pub const COMMENT_BASE_PATH: &str = "/api/v1/comment";

/// アプリケーション全体のルーターを構築する
///
/// 一致するルートがないリクエストは `404 Route not found` を返す。
pub fn build_app(blog_state: Arc<BlogState>, comment_state: Arc<CommentState>) -> Router {
   let blog_routes = Router::new()
      .route("/", get(list_blogs).post(create_blog))
      .route("/comments", get(list_blogs_with_comments))
      .route(
         "/{blog_id}",
         get(get_blog).put(update_blog).delete(delete_blog),
      )
      .with_state(blog_state);

   let comment_routes = Router::new()
      .route("/{blog_id}", get(list_comments).post(create_comment))
      .route(
         "/{blog_id}/comment/{comment_id}",
         get(get_comment).put(update_comment).delete(delete_comment),
      )
      .with_state(comment_state);

   Router::new()
      .route("/health", get(health_check))
      .nest(BLOG_BASE_PATH, blog_routes)
      .nest(COMMENT_BASE_PATH, comment_routes)
      .fallback(route_not_found)
      .layer(TraceLayer::new_for_http())
}
