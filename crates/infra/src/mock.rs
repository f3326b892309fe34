//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! blogapi-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 一覧は PostgreSQL 実装と同じく挿入順（= 作成日時順）で返す。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blogapi_domain::{
   blog::{Blog, BlogId},
   comment::{Comment, CommentId},
};

use crate::{
   error::InfraError,
   repository::{BlogRepository, CommentRepository},
};

// ===== MockBlogRepository =====

#[derive(Clone, Default)]
pub struct MockBlogRepository {
   blogs: Arc<Mutex<Vec<Blog>>>,
}

impl MockBlogRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 保存されている記事数
   pub fn len(&self) -> usize {
      self.blogs.lock().unwrap().len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl BlogRepository for MockBlogRepository {
   async fn find_all(&self) -> Result<Vec<Blog>, InfraError> {
      Ok(self.blogs.lock().unwrap().clone())
   }

   async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, InfraError> {
      Ok(self
         .blogs
         .lock()
         .unwrap()
         .iter()
         .find(|b| b.id() == id)
         .cloned())
   }

   async fn insert(&self, blog: &Blog) -> Result<(), InfraError> {
      self.blogs.lock().unwrap().push(blog.clone());
      Ok(())
   }

   async fn update(&self, blog: &Blog) -> Result<Option<Blog>, InfraError> {
      let mut blogs = self.blogs.lock().unwrap();
      let Some(stored) = blogs.iter_mut().find(|b| b.id() == blog.id()) else {
         return Ok(None);
      };
      // 著者名と作成日時は書き込まない（PostgreSQL 実装と同じ列のみ更新）
      let updated = stored
         .clone()
         .apply_changes(
            blogapi_domain::blog::BlogChanges {
               title: Some(blog.title().as_str().to_string()),
               body:  Some(blog.body().as_str().to_string()),
            },
            blog.updated_at(),
         )
         .map_err(|e| InfraError::unexpected(e.to_string()))?;
      *stored = updated.clone();
      Ok(Some(updated))
   }

   async fn delete(&self, id: &BlogId) -> Result<bool, InfraError> {
      let mut blogs = self.blogs.lock().unwrap();
      let before = blogs.len();
      blogs.retain(|b| b.id() != id);
      Ok(blogs.len() < before)
   }
}

// ===== MockCommentRepository =====

#[derive(Clone, Default)]
pub struct MockCommentRepository {
   comments: Arc<Mutex<Vec<Comment>>>,
}

impl MockCommentRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 保存されている全コメント（親ブログを問わない）
   pub fn all(&self) -> Vec<Comment> {
      self.comments.lock().unwrap().clone()
   }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
   async fn find_by_blog(&self, blog_id: &BlogId) -> Result<Vec<Comment>, InfraError> {
      Ok(self
         .comments
         .lock()
         .unwrap()
         .iter()
         .filter(|c| c.blog_id() == blog_id)
         .cloned()
         .collect())
   }

   async fn find_by_blogs(&self, blog_ids: &[BlogId]) -> Result<Vec<Comment>, InfraError> {
      Ok(self
         .comments
         .lock()
         .unwrap()
         .iter()
         .filter(|c| blog_ids.contains(c.blog_id()))
         .cloned()
         .collect())
   }

   async fn find_by_id_in_blog(
      &self,
      blog_id: &BlogId,
      id: &CommentId,
   ) -> Result<Option<Comment>, InfraError> {
      Ok(self
         .comments
         .lock()
         .unwrap()
         .iter()
         .find(|c| c.id() == id && c.blog_id() == blog_id)
         .cloned())
   }

   async fn insert(&self, comment: &Comment) -> Result<(), InfraError> {
      self.comments.lock().unwrap().push(comment.clone());
      Ok(())
   }

   async fn update(&self, comment: &Comment) -> Result<Option<Comment>, InfraError> {
      let mut comments = self.comments.lock().unwrap();
      let Some(stored) = comments
         .iter_mut()
         .find(|c| c.id() == comment.id() && c.blog_id() == comment.blog_id())
      else {
         return Ok(None);
      };
      let updated = stored
         .clone()
         .apply_changes(
            blogapi_domain::comment::CommentChanges {
               body: Some(comment.body().as_str().to_string()),
            },
            comment.updated_at(),
         )
         .map_err(|e| InfraError::unexpected(e.to_string()))?;
      *stored = updated.clone();
      Ok(Some(updated))
   }

   async fn delete(&self, blog_id: &BlogId, id: &CommentId) -> Result<bool, InfraError> {
      let mut comments = self.comments.lock().unwrap();
      let before = comments.len();
      comments.retain(|c| !(c.id() == id && c.blog_id() == blog_id));
      Ok(comments.len() < before)
   }

   async fn delete_by_blog(&self, blog_id: &BlogId) -> Result<u64, InfraError> {
      let mut comments = self.comments.lock().unwrap();
      let before = comments.len();
      comments.retain(|c| c.blog_id() != blog_id);
      Ok((before - comments.len()) as u64)
   }
}
