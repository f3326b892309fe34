//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use blogapi_domain::{
   blog::{Blog, BlogDraft, BlogId},
   comment::{Comment, CommentDraft, CommentId},
};
use chrono::{DateTime, TimeDelta, Utc};

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
   DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// 基準時刻から `seconds` 秒後
pub fn test_now_plus(seconds: i64) -> DateTime<Utc> {
   test_now() + TimeDelta::seconds(seconds)
}

/// デフォルト値で Blog を作成
pub fn create_test_blog(title: &str) -> Blog {
   create_test_blog_at(title, test_now())
}

pub fn create_test_blog_at(title: &str, now: DateTime<Utc>) -> Blog {
   Blog::create(
      BlogId::new(),
      BlogDraft {
         title:  Some(title.to_string()),
         body:   Some(
            "This is my first blog post. it was created for the technical assessment"
               .to_string(),
         ),
         author: Some("Tobiloba Owolabi".to_string()),
      },
      now,
   )
   .unwrap()
}

/// 指定記事に紐づく Comment を作成
pub fn create_test_comment(blog_id: &BlogId, body: &str, now: DateTime<Utc>) -> Comment {
   Comment::create(
      CommentId::new(),
      blog_id.clone(),
      CommentDraft {
         body:   Some(body.to_string()),
         author: Some("Samuel Peter".to_string()),
      },
      now,
   )
   .unwrap()
}
