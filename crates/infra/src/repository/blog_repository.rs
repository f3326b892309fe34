//! # BlogRepository
//!
//! ブログ記事の永続化を担当するリポジトリ。
//!
//! 一覧は `created_at ASC, id ASC` で返す。
//! コメントの結合・削除はこのリポジトリの責務ではない（ユースケース層で組み立てる）。

use async_trait::async_trait;
use blogapi_domain::blog::{Blog, BlogAuthor, BlogBody, BlogId, BlogRecord, BlogTitle};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// ブログ記事リポジトリトレイト
#[async_trait]
pub trait BlogRepository: Send + Sync {
   /// 全記事を取得する
   async fn find_all(&self) -> Result<Vec<Blog>, InfraError>;

   /// ID で記事を取得する
   async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, InfraError>;

   /// 新規記事を挿入する
   async fn insert(&self, blog: &Blog) -> Result<(), InfraError>;

   /// タイトル・本文・更新日時を書き込み、書き込み後の行を返す
   ///
   /// 著者名と作成日時は書き込まない。対象行がなければ `None`。
   async fn update(&self, blog: &Blog) -> Result<Option<Blog>, InfraError>;

   /// 記事を削除する。削除した行があれば `true`
   async fn delete(&self, id: &BlogId) -> Result<bool, InfraError>;
}

/// DB の blogs テーブルの行を表す中間構造体
#[derive(sqlx::FromRow)]
struct BlogRow {
   id:         Uuid,
   title:      String,
   body:       String,
   author:     String,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
   type Error = InfraError;

   fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
      Ok(Blog::from_db(BlogRecord {
         id:         BlogId::from_uuid(row.id),
         title:      BlogTitle::new(row.title)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         body:       BlogBody::new(row.body).map_err(|e| InfraError::unexpected(e.to_string()))?,
         author:     BlogAuthor::new(row.author)
            .map_err(|e| InfraError::unexpected(e.to_string()))?,
         created_at: row.created_at,
         updated_at: row.updated_at,
      }))
   }
}

/// PostgreSQL 実装の BlogRepository
#[derive(Debug, Clone)]
pub struct PostgresBlogRepository {
   pool: PgPool,
}

impl PostgresBlogRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Blog>, InfraError> {
      let rows = sqlx::query_as::<_, BlogRow>(
         r#"
         SELECT id, title, body, author, created_at, updated_at
         FROM blogs
         ORDER BY created_at ASC, id ASC
         "#,
      )
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(Blog::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
   async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, InfraError> {
      let row = sqlx::query_as::<_, BlogRow>(
         r#"
         SELECT id, title, body, author, created_at, updated_at
         FROM blogs
         WHERE id = $1
         "#,
      )
      .bind(id.as_uuid())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Blog::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %blog.id()))]
   async fn insert(&self, blog: &Blog) -> Result<(), InfraError> {
      sqlx::query(
         r#"
         INSERT INTO blogs (id, title, body, author, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         "#,
      )
      .bind(blog.id().as_uuid())
      .bind(blog.title().as_str())
      .bind(blog.body().as_str())
      .bind(blog.author().as_str())
      .bind(blog.created_at())
      .bind(blog.updated_at())
      .execute(&self.pool)
      .await?;

      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %blog.id()))]
   async fn update(&self, blog: &Blog) -> Result<Option<Blog>, InfraError> {
      let row = sqlx::query_as::<_, BlogRow>(
         r#"
         UPDATE blogs
         SET title = $2, body = $3, updated_at = $4
         WHERE id = $1
         RETURNING id, title, body, author, created_at, updated_at
         "#,
      )
      .bind(blog.id().as_uuid())
      .bind(blog.title().as_str())
      .bind(blog.body().as_str())
      .bind(blog.updated_at())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Blog::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
   async fn delete(&self, id: &BlogId) -> Result<bool, InfraError> {
      let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
         .bind(id.as_uuid())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected() > 0)
   }
}
