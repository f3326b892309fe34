//! # ユースケース層
//!
//! Blog Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時刻プロバイダを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは ID のパースと DTO 変換のみ、ロジックはユースケースに集約
//! - **明示的なカスケード**: 記事削除時のコメント削除はリポジトリのフックではなくユースケースで行う

pub mod blog;
pub mod comment;

pub use blog::BlogUseCaseImpl;
pub use comment::CommentUseCaseImpl;

/// 記事が解決できないときのメッセージ
pub const BLOG_NOT_FOUND: &str = "Blog not found. It has either been deleted or not created yet";

/// コメントが解決できないときのメッセージ
pub const COMMENT_NOT_FOUND: &str =
   "Comment not found. It has either been deleted or not created yet";
