//! HTTP テスト共通ヘルパー
//!
//! インメモリのモックリポジトリで本番と同じルーターを組み立て、
//! `tower::ServiceExt::oneshot` でリクエストを送る。

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Method, Request, StatusCode, header},
};
use blogapi_blog_service::{
   app_builder::build_app,
   handler::{BlogState, CommentState},
   usecase::{BlogUseCaseImpl, CommentUseCaseImpl},
};
use blogapi_domain::clock::{Clock, SystemClock};
use blogapi_infra::{
   mock::{MockBlogRepository, MockCommentRepository},
   repository::{BlogRepository, CommentRepository},
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const VALID_BODY: &str =
   "This is my first blog post. it was created for the chiji14exchange technical assessment";

/// テスト対象のアプリケーション
///
/// `router` は `Clone` で共有し、リポジトリは検証用に外から覗ける。
pub struct TestApp {
   pub router:   Router,
   pub blogs:    MockBlogRepository,
   pub comments: MockCommentRepository,
}

impl TestApp {
   pub fn new() -> Self {
      let blogs = MockBlogRepository::new();
      let comments = MockCommentRepository::new();
      let blog_repository: Arc<dyn BlogRepository> = Arc::new(blogs.clone());
      let comment_repository: Arc<dyn CommentRepository> = Arc::new(comments.clone());
      let clock: Arc<dyn Clock> = Arc::new(SystemClock);

      let blog_state = Arc::new(BlogState {
         usecase: BlogUseCaseImpl::new(
            blog_repository.clone(),
            comment_repository.clone(),
            clock.clone(),
         ),
      });
      let comment_state = Arc::new(CommentState {
         usecase: CommentUseCaseImpl::new(blog_repository, comment_repository, clock),
      });

      Self {
         router: build_app(blog_state, comment_state),
         blogs,
         comments,
      }
   }

   /// リクエストを送り、ステータスと JSON ボディを返す
   pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
      let request = match body {
         Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
         None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
      };

      self.send_request(request).await
   }

   pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
      let response = self.router.clone().oneshot(request).await.unwrap();
      let status = response.status();
      let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      (status, serde_json::from_slice(&bytes).unwrap())
   }

   /// 記事を作成し、その ID を返す
   pub async fn create_blog(&self) -> String {
      let (status, body) = self
         .send(Method::POST, "/api/v1/blog", Some(valid_blog_payload()))
         .await;
      assert_eq!(status, StatusCode::CREATED);
      body["data"]["id"].as_str().unwrap().to_string()
   }

   /// コメントを投稿し、その ID を返す
   pub async fn create_comment(&self, blog_id: &str, comment_body: &str) -> String {
      let (status, body) = self
         .send(
            Method::POST,
            &format!("/api/v1/comment/{blog_id}"),
            Some(json!({ "commentBody": comment_body, "commentAuthor": "Sam Reader" })),
         )
         .await;
      assert_eq!(status, StatusCode::CREATED);
      body["data"]["id"].as_str().unwrap().to_string()
   }
}

pub fn valid_blog_payload() -> Value {
   json!({
      "title": "My First Blog Post",
      "body": VALID_BODY,
      "author": "Tobiloba Owolabi"
   })
}
