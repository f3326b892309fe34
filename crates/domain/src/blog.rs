//! # ブログ記事
//!
//! ブログ記事エンティティと、記事に紐づくコメントの結合を定義する。
//!
//! ## コメントとの関係
//!
//! ブログはコメントの一覧を保持しない。コメント側が親ブログの ID を持ち、
//! 記事とコメントの組は [`join_comments`] でクエリ時に組み立てる。
//! ブログ削除時のコメント削除（カスケード）はユースケース層が明示的に行う。

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{DomainError, comment::Comment, validation::FieldErrors};

define_uuid_id! {
   /// ブログ記事 ID
   pub struct BlogId;
}

define_bounded_string! {
   /// 記事タイトル（3〜50 文字）
   pub struct BlogTitle {
      min_length: 3,
      max_length: 50,
      required: "Please provide a title",
      too_short: "Title cannot be less than 3 characters",
      too_long: "Title cannot be more than 50 characters",
   }
}

define_bounded_string! {
   /// 記事本文（30〜1,000 文字）
   pub struct BlogBody {
      min_length: 30,
      max_length: 1000,
      required: "Please provide a blog body",
      too_short: "Blog text cannot be less than 30 characters",
      too_long: "Blog text cannot be more than 1000 characters",
   }
}

define_bounded_string! {
   /// 著者名（3〜50 文字）
   pub struct BlogAuthor {
      min_length: 3,
      max_length: 50,
      required: "Please provide an author name",
      too_short: "Author name cannot be less than 3 characters",
      too_long: "Author name cannot be more than 50 characters",
   }
}

/// ブログ記事エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
   id:         BlogId,
   title:      BlogTitle,
   body:       BlogBody,
   author:     BlogAuthor,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

/// 記事作成リクエストの未検証入力
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
   pub title:  Option<String>,
   pub body:   Option<String>,
   pub author: Option<String>,
}

/// 記事更新の未検証入力
///
/// 著者名は作成後に変更できないため、タイトルと本文のみを受け付ける。
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
   pub title: Option<String>,
   pub body:  Option<String>,
}

/// ブログ記事の新規作成パラメータ
pub struct NewBlog {
   pub id:     BlogId,
   pub title:  BlogTitle,
   pub body:   BlogBody,
   pub author: BlogAuthor,
   pub now:    DateTime<Utc>,
}

/// ブログ記事の DB 復元パラメータ
pub struct BlogRecord {
   pub id:         BlogId,
   pub title:      BlogTitle,
   pub body:       BlogBody,
   pub author:     BlogAuthor,
   pub created_at: DateTime<Utc>,
   pub updated_at: DateTime<Utc>,
}

impl Blog {
   /// 検証済みの値から新しい記事を作成する
   pub fn new(params: NewBlog) -> Self {
      Self {
         id:         params.id,
         title:      params.title,
         body:       params.body,
         author:     params.author,
         created_at: params.now,
         updated_at: params.now,
      }
   }

   /// 未検証の入力を検証して記事を作成する
   ///
   /// 全フィールドを検証し、違反はタイトル・本文・著者名の順にまとめて返す。
   pub fn create(id: BlogId, draft: BlogDraft, now: DateTime<Utc>) -> Result<Self, DomainError> {
      let mut errors = FieldErrors::new();
      let title = errors.check(BlogTitle::from_input(draft.title));
      let body = errors.check(BlogBody::from_input(draft.body));
      let author = errors.check(BlogAuthor::from_input(draft.author));

      match (title, body, author) {
         (Some(title), Some(body), Some(author)) => Ok(Self::new(NewBlog {
            id,
            title,
            body,
            author,
            now,
         })),
         _ => Err(errors.into_error()),
      }
   }

   /// 既存のデータから復元する
   pub fn from_db(record: BlogRecord) -> Self {
      Self {
         id:         record.id,
         title:      record.title,
         body:       record.body,
         author:     record.author,
         created_at: record.created_at,
         updated_at: record.updated_at,
      }
   }

   /// 変更内容を検証して適用した新しい記事を返す
   ///
   /// 指定されたフィールドのみ検証・変更する。著者名は変更しない。
   pub fn apply_changes(self, changes: BlogChanges, now: DateTime<Utc>) -> Result<Self, DomainError> {
      let mut errors = FieldErrors::new();
      let title = changes
         .title
         .map(|title| errors.check(BlogTitle::new(title)));
      let body = changes.body.map(|body| errors.check(BlogBody::new(body)));

      let title = match title {
         Some(Some(title)) => title,
         Some(None) => return Err(errors.into_error()),
         None => self.title,
      };
      let body = match body {
         Some(Some(body)) => body,
         Some(None) => return Err(errors.into_error()),
         None => self.body,
      };

      Ok(Self {
         title,
         body,
         updated_at: now,
         ..self
      })
   }

   // Getter メソッド

   pub fn id(&self) -> &BlogId {
      &self.id
   }

   pub fn title(&self) -> &BlogTitle {
      &self.title
   }

   pub fn body(&self) -> &BlogBody {
      &self.body
   }

   pub fn author(&self) -> &BlogAuthor {
      &self.author
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}

/// コメントを結合したブログ記事
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogWithComments {
   pub blog:     Blog,
   pub comments: Vec<Comment>,
}

/// 記事一覧にコメントを結合する
///
/// 各記事の `comments` は `blog_id` がその記事の ID に一致するコメントの集合。
/// 記事の順序と、記事ごとのコメントの順序は入力の順序を保つ。
/// どの記事にも属さないコメントは捨てる。
pub fn join_comments(blogs: Vec<Blog>, comments: Vec<Comment>) -> Vec<BlogWithComments> {
   let mut by_blog: HashMap<BlogId, Vec<Comment>> = comments
      .into_iter()
      .into_group_map_by(|comment| comment.blog_id().clone());

   blogs
      .into_iter()
      .map(|blog| {
         let comments = by_blog.remove(blog.id()).unwrap_or_default();
         BlogWithComments { blog, comments }
      })
      .collect()
}
