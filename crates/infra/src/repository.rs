//! # リポジトリ実装
//!
//! ブログ記事・コメントを永続化するストアアダプタを提供する。
//!
//! ## 設計方針
//!
//! - **トレイト境界**: ユースケース層は `Arc<dyn Trait>` 経由でのみ利用する
//! - **明示的な接続**: `PgPool` をコンストラクタで受け取る
//! - **弱参照**: コメントは `blog_id` で親を参照するだけで、DB 上の外部キーは持たない

pub mod blog_repository;
pub mod comment_repository;

pub use blog_repository::{BlogRepository, PostgresBlogRepository};
pub use comment_repository::{CommentRepository, PostgresCommentRepository};
