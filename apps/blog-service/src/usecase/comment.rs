//! コメントユースケース
//!
//! コメントは常に親記事 ID とセットで扱う。別の記事に属するコメント ID は解決しない。

use std::sync::Arc;

use blogapi_domain::{
   blog::BlogId,
   clock::Clock,
   comment::{Comment, CommentChanges, CommentDraft, CommentId},
};
use blogapi_infra::repository::{BlogRepository, CommentRepository};

use super::{BLOG_NOT_FOUND, COMMENT_NOT_FOUND};
use crate::{error::BlogServiceError, extract::parse_comment_id};

/// コメントユースケース
pub struct CommentUseCaseImpl {
   blog_repository:    Arc<dyn BlogRepository>,
   comment_repository: Arc<dyn CommentRepository>,
   clock:              Arc<dyn Clock>,
}

impl CommentUseCaseImpl {
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

   /// 記事のコメント一覧を取得する
   ///
   /// 記事の存在は確認しない。該当がなければ空の一覧を返す。
   #[tracing::instrument(skip_all, fields(blog_id = %blog_id))]
   pub async fn list_comments(&self, blog_id: &BlogId) -> Result<Vec<Comment>, BlogServiceError> {
      Ok(self.comment_repository.find_by_blog(blog_id).await?)
   }

   /// コメントを 1 件取得する
   #[tracing::instrument(skip_all, fields(blog_id = %blog_id, comment_id = %id))]
   pub async fn get_comment(
      &self,
      blog_id: &BlogId,
      id: &CommentId,
   ) -> Result<Comment, BlogServiceError> {
      self.find_comment(blog_id, id).await
   }

   /// コメントを投稿する
   ///
   /// 親記事を解決してから入力を検証する。
   #[tracing::instrument(skip_all, fields(blog_id = %blog_id))]
   pub async fn create_comment(
      &self,
      blog_id: &BlogId,
      draft: CommentDraft,
   ) -> Result<Comment, BlogServiceError> {
      self.ensure_blog_exists(blog_id).await?;

      let comment = Comment::create(CommentId::new(), blog_id.clone(), draft, self.clock.now())?;
      self.comment_repository.insert(&comment).await?;

      tracing::info!(comment_id = %comment.id(), "コメントを投稿しました");
      Ok(comment)
   }

   /// コメント本文を更新する
   ///
   /// 記事、コメントの順に解決する。コメント ID のパースも記事の解決後に行うため、
   /// 記事がなければコメント ID の形式に関係なく記事の `NotFound` になる。
   /// 投稿者名は変更しない。
   #[tracing::instrument(skip_all, fields(blog_id = %blog_id, comment_id = raw_id))]
   pub async fn update_comment(
      &self,
      blog_id: &BlogId,
      raw_id: &str,
      changes: CommentChanges,
   ) -> Result<Comment, BlogServiceError> {
      self.ensure_blog_exists(blog_id).await?;
      let id = parse_comment_id(raw_id)?;
      let comment = self.find_comment(blog_id, &id).await?;
      let comment = comment.apply_changes(changes, self.clock.now())?;

      self.comment_repository
         .update(&comment)
         .await?
         .ok_or_else(|| {
            BlogServiceError::Persistence("Comment could not be updated".to_string())
         })
   }

   /// コメントを削除する
   ///
   /// 解決順は [`update_comment`](Self::update_comment) と同じ。
   #[tracing::instrument(skip_all, fields(blog_id = %blog_id, comment_id = raw_id))]
   pub async fn delete_comment(
      &self,
      blog_id: &BlogId,
      raw_id: &str,
   ) -> Result<(), BlogServiceError> {
      self.ensure_blog_exists(blog_id).await?;
      let id = parse_comment_id(raw_id)?;

      if !self.comment_repository.delete(blog_id, &id).await? {
         return Err(BlogServiceError::NotFound(COMMENT_NOT_FOUND.to_string()));
      }

      tracing::info!("コメントを削除しました");
      Ok(())
   }

   async fn ensure_blog_exists(&self, blog_id: &BlogId) -> Result<(), BlogServiceError> {
      match self.blog_repository.find_by_id(blog_id).await? {
         Some(_) => Ok(()),
         None => Err(BlogServiceError::NotFound(BLOG_NOT_FOUND.to_string())),
      }
   }

   async fn find_comment(
      &self,
      blog_id: &BlogId,
      id: &CommentId,
   ) -> Result<Comment, BlogServiceError> {
      self.comment_repository
         .find_by_id_in_blog(blog_id, id)
         .await?
         .ok_or_else(|| BlogServiceError::NotFound(COMMENT_NOT_FOUND.to_string()))
   }
}
