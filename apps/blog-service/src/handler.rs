//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラはパスパラメータのパースと DTO 変換のみを行い、ロジックはユースケースに委譲

pub mod blog;
pub mod comment;
pub mod health;

pub use blog::{
   BlogState,
   create_blog,
   delete_blog,
   get_blog,
   list_blogs,
   list_blogs_with_comments,
   update_blog,
};
pub use comment::{
   CommentState,
   create_comment,
   delete_comment,
   get_comment,
   list_comments,
   update_comment,
};
pub use health::{health_check, route_not_found};
