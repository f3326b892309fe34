//! # CommentRepository
//!
//! コメントの永続化を担当するリポジトリ。
//!
//! - すべての単体操作は親ブログ ID でスコープする（別ブログのコメント ID は解決しない）
//! - 一覧は `created_at ASC, id ASC` で返す
//! - 親ブログの存在確認は行わない（ユースケース層の責務）

use async_trait::async_trait;
use blogapi_domain::{
   blog::BlogId,
   comment::{Comment, CommentAuthor, CommentBody, CommentId, CommentRecord},
};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// コメントリポジトリトレイト
#[async_trait]
pub trait CommentRepository: Send + Sync {
   /// 記事に紐づくコメント一覧を取得する
   async fn find_by_blog(&self, blog_id: &BlogId) -> Result<Vec<Comment>, InfraError>;

   /// 複数記事に紐づくコメントをまとめて取得する
   async fn find_by_blogs(&self, blog_ids: &[BlogId]) -> Result<Vec<Comment>, InfraError>;

   /// 記事内のコメントを ID で取得する
   async fn find_by_id_in_blog(
      &self,
      blog_id: &BlogId,
      id: &CommentId,
   ) -> Result<Option<Comment>, InfraError>;

   /// 新規コメントを挿入する
   async fn insert(&self, comment: &Comment) -> Result<(), InfraError>;

   /// 本文・更新日時を書き込み、書き込み後の行を返す
   ///
   /// 投稿者名は書き込まない。対象行がなければ `None`。
   async fn update(&self, comment: &Comment) -> Result<Option<Comment>, InfraError>;

   /// コメントを削除する。削除した行があれば `true`
   async fn delete(&self, blog_id: &BlogId, id: &CommentId) -> Result<bool, InfraError>;

   /// 記事に紐づくコメントをすべて削除し、削除件数を返す
   async fn delete_by_blog(&self, blog_id: &BlogId) -> Result<u64, InfraError>;
}

/// DB の comments テーブルの行を表す中間構造体
#[derive(sqlx::FromRow)]
struct CommentRow {
   id:             Uuid,
   blog_id:        Uuid,
   comment_body:   String,
   comment_author: String,
   created_at:     DateTime<Utc>,
   updated_at:     DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
   type Error = InfraError;

   fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
      Ok(Comment::from_db(CommentRecord {
         id:         CommentId::from_uuid(row.id),
         blog_id:    BlogId::from_uuid(row.blog_id),
         body:       CommentBody::new(row.comment_body)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         author:     CommentAuthor::new(row.comment_author)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         created_at: row.created_at,
         updated_at: row.updated_at,
      }))
   }
}

/// PostgreSQL 実装の CommentRepository
#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
   pool: PgPool,
}

impl PostgresCommentRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(blog_id = %blog_id))]
   async fn find_by_blog(&self, blog_id: &BlogId) -> Result<Vec<Comment>, InfraError> {
      let rows = sqlx::query_as::<_, CommentRow>(
         r#"
         SELECT id, blog_id, comment_body, comment_author, created_at, updated_at
         FROM comments
         WHERE blog_id = $1
         ORDER BY created_at ASC, id ASC
         "#,
      )
      .bind(blog_id.as_uuid())
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(Comment::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(count = blog_ids.len()))]
   async fn find_by_blogs(&self, blog_ids: &[BlogId]) -> Result<Vec<Comment>, InfraError> {
      if blog_ids.is_empty() {
         return Ok(Vec::new());
      }

      let ids: Vec<Uuid> = blog_ids.iter().map(|id| *id.as_uuid()).collect();
      let rows = sqlx::query_as::<_, CommentRow>(
         r#"
         SELECT id, blog_id, comment_body, comment_author, created_at, updated_at
         FROM comments
         WHERE blog_id = ANY($1)
         ORDER BY created_at ASC, id ASC
         "#,
      )
      .bind(ids)
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(Comment::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(blog_id = %blog_id, id = %id))]
   async fn find_by_id_in_blog(
      &self,
      blog_id: &BlogId,
      id: &CommentId,
   ) -> Result<Option<Comment>, InfraError> {
      let row = sqlx::query_as::<_, CommentRow>(
         r#"
         SELECT id, blog_id, comment_body, comment_author, created_at, updated_at
         FROM comments
         WHERE id = $1 AND blog_id = $2
         "#,
      )
      .bind(id.as_uuid())
      .bind(blog_id.as_uuid())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Comment::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %comment.id()))]
   async fn insert(&self, comment: &Comment) -> Result<(), InfraError> {
      sqlx::query(
         r#"
         INSERT INTO comments (
            id, blog_id, comment_body, comment_author, created_at, updated_at
         )
         VALUES ($1, $2, $3, $4, $5, $6)
         "#,
      )
      .bind(comment.id().as_uuid())
      .bind(comment.blog_id().as_uuid())
      .bind(comment.body().as_str())
      .bind(comment.author().as_str())
      .bind(comment.created_at())
      .bind(comment.updated_at())
      .execute(&self.pool)
      .await?;

      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %comment.id()))]
   async fn update(&self, comment: &Comment) -> Result<Option<Comment>, InfraError> {
      let row = sqlx::query_as::<_, CommentRow>(
         r#"
         UPDATE comments
         SET comment_body = $3, updated_at = $4
         WHERE id = $1 AND blog_id = $2
         RETURNING id, blog_id, comment_body, comment_author, created_at, updated_at
         "#,
      )
      .bind(comment.id().as_uuid())
      .bind(comment.blog_id().as_uuid())
      .bind(comment.body().as_str())
      .bind(comment.updated_at())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Comment::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(blog_id = %blog_id, id = %id))]
   async fn delete(&self, blog_id: &BlogId, id: &CommentId) -> Result<bool, InfraError> {
      let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND blog_id = $2")
         .bind(id.as_uuid())
         .bind(blog_id.as_uuid())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected() > 0)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(blog_id = %blog_id))]
   async fn delete_by_blog(&self, blog_id: &BlogId) -> Result<u64, InfraError> {
      let result = sqlx::query("DELETE FROM comments WHERE blog_id = $1")
         .bind(blog_id.as_uuid())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected())
   }
}
