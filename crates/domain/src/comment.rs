//! # コメント
//!
//! ブログ記事に紐づくコメントを表現する。
//!
//! コメントは親ブログを ID で参照する（弱参照）。ブログ側はコメントの
//! リストを保持せず、一覧が必要な場合はクエリ時に結合する
//! （[`crate::blog::join_comments`]）。

use chrono::{DateTime, Utc};

use crate::{DomainError, blog::BlogId, validation::FieldErrors};

define_uuid_id! {
   /// コメント ID
   pub struct CommentId;
}

define_bounded_string! {
   /// コメント本文（1〜1,000 文字）
   pub struct CommentBody {
      min_length: 1,
      max_length: 1000,
      required: "Please provide a comment body",
      too_short: "Comment text cannot be less than 1 character",
      too_long: "Comment text cannot be more than 1000 characters",
   }
}

define_bounded_string! {
   /// コメント投稿者名（3〜50 文字）
   pub struct CommentAuthor {
      min_length: 3,
      max_length: 50,
      required: "Please provide comment author name",
      too_short: "Comment author name cannot be less than 3 characters",
      too_long: "Comment author name cannot be more than 50 characters",
   }
}

/// コメントエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
   id:         CommentId,
   blog_id:    BlogId,
   body:       CommentBody,
   author:     CommentAuthor,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

/// コメント作成リクエストの未検証入力
#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
   pub body:   Option<String>,
   pub author: Option<String>,
}

/// コメント更新の未検証入力
///
/// 投稿者名は作成後に変更できないため、本文のみを受け付ける。
#[derive(Debug, Clone, Default)]
pub struct CommentChanges {
   pub body: Option<String>,
}

/// コメントの新規作成パラメータ
pub struct NewComment {
   pub id:      CommentId,
   pub blog_id: BlogId,
   pub body:    CommentBody,
   pub author:  CommentAuthor,
   pub now:     DateTime<Utc>,
}

/// コメントの DB 復元パラメータ
pub struct CommentRecord {
   pub id:         CommentId,
   pub blog_id:    BlogId,
   pub body:       CommentBody,
   pub author:     CommentAuthor,
   pub created_at: DateTime<Utc>,
   pub updated_at: DateTime<Utc>,
}

impl Comment {
   /// 検証済みの値から新しいコメントを作成する
   pub fn new(params: NewComment) -> Self {
      Self {
         id:         params.id,
         blog_id:    params.blog_id,
         body:       params.body,
         author:     params.author,
         created_at: params.now,
         updated_at: params.now,
      }
   }

   /// 未検証の入力を検証してコメントを作成する
   ///
   /// 全フィールドを検証し、違反はまとめて返す。
   pub fn create(
      id: CommentId,
      blog_id: BlogId,
      draft: CommentDraft,
      now: DateTime<Utc>,
   ) -> Result<Self, DomainError> {
      let mut errors = FieldErrors::new();
      let body = errors.check(CommentBody::from_input(draft.body));
      let author = errors.check(CommentAuthor::from_input(draft.author));

      match (body, author) {
         (Some(body), Some(author)) => Ok(Self::new(NewComment {
            id,
            blog_id,
            body,
            author,
            now,
         })),
         _ => Err(errors.into_error()),
      }
   }

   /// 既存のデータから復元する
   pub fn from_db(record: CommentRecord) -> Self {
      Self {
         id:         record.id,
         blog_id:    record.blog_id,
         body:       record.body,
         author:     record.author,
         created_at: record.created_at,
         updated_at: record.updated_at,
      }
   }

   /// 変更内容を検証して適用した新しいコメントを返す
   ///
   /// 指定されたフィールドのみ検証・変更する。投稿者名は変更しない。
   pub fn apply_changes(
      self,
      changes: CommentChanges,
      now: DateTime<Utc>,
   ) -> Result<Self, DomainError> {
      let body = match changes.body {
         Some(body) => CommentBody::new(body)?,
         None => self.body,
      };

      Ok(Self {
         body,
         updated_at: now,
         ..self
      })
   }

   // Getter メソッド

   pub fn id(&self) -> &CommentId {
      &self.id
   }

   pub fn blog_id(&self) -> &BlogId {
      &self.blog_id
   }

   pub fn body(&self) -> &CommentBody {
      &self.body
   }

   pub fn author(&self) -> &CommentAuthor {
      &self.author
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::{fixture, rstest};

   use super::*;

   #[fixture]
   fn now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   #[rstest]
   #[case::空文字("", "Please provide a comment body")]
   #[case::上限超過(&"x".repeat(1001), "Comment text cannot be more than 1000 characters")]
   fn test_comment_bodyの制約違反(#[case] input: &str, #[case] expected: &str) {
      let result = CommentBody::new(input);
      assert_eq!(result, Err(DomainError::validation(expected)));
   }

   #[rstest]
   #[case::下限("x")]
   #[case::上限(&"あ".repeat(1000))]
   fn test_comment_bodyの境界値は成功(#[case] input: &str) {
      assert_eq!(CommentBody::new(input).unwrap().as_str(), input);
   }

   #[rstest]
   #[case::短すぎる("Sa", "Comment author name cannot be less than 3 characters")]
   #[case::長すぎる(&"a".repeat(51), "Comment author name cannot be more than 50 characters")]
   #[case::空文字("", "Please provide comment author name")]
   fn test_comment_authorの制約違反(#[case] input: &str, #[case] expected: &str) {
      assert_eq!(
         CommentAuthor::new(input),
         Err(DomainError::validation(expected))
      );
   }

   #[rstest]
   fn test_createは未指定フィールドを必須エラーにする(now: DateTime<Utc>) {
      let result = Comment::create(
         CommentId::new(),
         BlogId::new(),
         CommentDraft::default(),
         now,
      );

      assert_eq!(
         result,
         Err(DomainError::Validation(vec![
            "Please provide a comment body".to_string(),
            "Please provide comment author name".to_string(),
         ]))
      );
   }

   #[rstest]
   fn test_createで親ブログを参照するコメントができる(now: DateTime<Utc>) {
      let blog_id = BlogId::new();

      let sut = Comment::create(
         CommentId::new(),
         blog_id.clone(),
         CommentDraft {
            body:   Some("My First Blog Post Comment".to_string()),
            author: Some("Samuel Peter".to_string()),
         },
         now,
      )
      .unwrap();

      assert_eq!(sut.blog_id(), &blog_id);
      assert_eq!(sut.body().as_str(), "My First Blog Post Comment");
      assert_eq!(sut.author().as_str(), "Samuel Peter");
      assert_eq!(sut.created_at(), now);
      assert_eq!(sut.updated_at(), now);
   }

   #[rstest]
   fn test_apply_changesは本文のみ更新する(now: DateTime<Utc>) {
      let original = Comment::create(
         CommentId::new(),
         BlogId::new(),
         CommentDraft {
            body:   Some("before".to_string()),
            author: Some("Samuel Peter".to_string()),
         },
         now,
      )
      .unwrap();
      let later = now + chrono::TimeDelta::seconds(60);

      let sut = original
         .clone()
         .apply_changes(
            CommentChanges {
               body: Some("after".to_string()),
            },
            later,
         )
         .unwrap();

      assert_eq!(sut.id(), original.id());
      assert_eq!(sut.body().as_str(), "after");
      assert_eq!(sut.author(), original.author());
      assert_eq!(sut.created_at(), now);
      assert_eq!(sut.updated_at(), later);
   }

   #[rstest]
   fn test_apply_changesで空の本文はエラー(now: DateTime<Utc>) {
      let original = Comment::create(
         CommentId::new(),
         BlogId::new(),
         CommentDraft {
            body:   Some("before".to_string()),
            author: Some("Samuel Peter".to_string()),
         },
         now,
      )
      .unwrap();

      let result = original.apply_changes(
         CommentChanges {
            body: Some(String::new()),
         },
         now,
      );

      assert_eq!(
         result,
         Err(DomainError::validation("Please provide a comment body"))
      );
   }
}
