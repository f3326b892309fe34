//! ブログ記事ユースケース

use std::sync::Arc;

use blogapi_domain::{
   blog::{Blog, BlogChanges, BlogDraft, BlogId, BlogWithComments, join_comments},
   clock::Clock,
};
use blogapi_infra::repository::{BlogRepository, CommentRepository};

use super::BLOG_NOT_FOUND;
use crate::error::BlogServiceError;

/// ブログ記事ユースケース
pub struct BlogUseCaseImpl {
   blog_repository:    Arc<dyn BlogRepository>,
   comment_repository: Arc<dyn CommentRepository>,
   clock:              Arc<dyn Clock>,
}

impl BlogUseCaseImpl {
   pub fn new(
      blog_repository: Arc<dyn BlogRepository>,
      comment_repository: Arc<dyn CommentRepository>,
      clock: Arc<dyn Clock>,
   ) -> Self {
      Self {
         blog_repository,
         comment_repository,
         clock,
      }
   }

   /// 記事一覧を取得する（コメントは含まない）
   #[tracing::instrument(skip_all)]
   pub async fn list_blogs(&self) -> Result<Vec<Blog>, BlogServiceError> {
      Ok(self.blog_repository.find_all().await?)
   }

   /// コメントを結合した記事一覧を取得する
   #[tracing::instrument(skip_all)]
   pub async fn list_blogs_with_comments(
      &self,
   ) -> Result<Vec<BlogWithComments>, BlogServiceError> {
      let blogs = self.blog_repository.find_all().await?;
      if blogs.is_empty() {
         return Ok(Vec::new());
      }

      let blog_ids: Vec<BlogId> = blogs.iter().map(|b| b.id().clone()).collect();
      let comments = self.comment_repository.find_by_blogs(&blog_ids).await?;

      Ok(join_comments(blogs, comments))
   }

   /// コメント付きで記事を 1 件取得する
   #[tracing::instrument(skip_all, fields(blog_id = %id))]
   pub async fn get_blog(&self, id: &BlogId) -> Result<BlogWithComments, BlogServiceError> {
      let blog = self.find_blog(id).await?;
      let comments = self.comment_repository.find_by_blog(id).await?;

      Ok(BlogWithComments { blog, comments })
   }

   /// 記事を作成する
   ///
   /// 全フィールドを検証し、違反はまとめて `Validation` として返す。
   #[tracing::instrument(skip_all)]
   pub async fn create_blog(&self, draft: BlogDraft) -> Result<Blog, BlogServiceError> {
      let blog = Blog::create(BlogId::new(), draft, self.clock.now())?;
      self.blog_repository.insert(&blog).await?;

      tracing::info!(blog_id = %blog.id(), "記事を作成しました");
      Ok(blog)
   }

   /// 記事を更新する
   ///
   /// 1. 記事を解決（なければ `NotFound`）
   /// 2. 指定されたタイトル・本文のみ検証して適用（著者名は変更しない）
   /// 3. 保存し、保存後の記事を返す（書き込み結果がなければ `Persistence`）
   #[tracing::instrument(skip_all, fields(blog_id = %id))]
   pub async fn update_blog(
      &self,
      id: &BlogId,
      changes: BlogChanges,
   ) -> Result<Blog, BlogServiceError> {
      let blog = self.find_blog(id).await?;
      let blog = blog.apply_changes(changes, self.clock.now())?;

      self.blog_repository
         .update(&blog)
         .await?
         .ok_or_else(|| BlogServiceError::Persistence("Blog could not be updated".to_string()))
   }

   /// 記事を削除する
   ///
   /// 記事に紐づくコメントを先に削除し、その後に記事を削除する。
   /// 途中で失敗した場合、削除済みのコメントは戻らない。
   #[tracing::instrument(skip_all, fields(blog_id = %id))]
   pub async fn delete_blog(&self, id: &BlogId) -> Result<(), BlogServiceError> {
      self.find_blog(id).await?;

      let deleted_comments = self.comment_repository.delete_by_blog(id).await?;
      tracing::info!(deleted_comments, "記事に紐づくコメントを削除しました");

      if !self.blog_repository.delete(id).await? {
         return Err(BlogServiceError::NotFound(BLOG_NOT_FOUND.to_string()));
      }

      tracing::info!("記事を削除しました");
      Ok(())
   }

   async fn find_blog(&self, id: &BlogId) -> Result<Blog, BlogServiceError> {
      self.blog_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| BlogServiceError::NotFound(BLOG_NOT_FOUND.to_string()))
   }
}
