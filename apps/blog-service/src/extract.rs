//! # リクエスト抽出ヘルパー
//!
//! JSON ボディとパスパラメータを、サービス共通のエラーに変換しながら取り出す。

use std::str::FromStr;

use axum::{
   Json,
   extract::{FromRequest, Request, rejection::JsonRejection},
};
use blogapi_domain::{blog::BlogId, comment::CommentId};
use serde::de::DeserializeOwned;

use crate::error::BlogServiceError;

/// JSON のパース失敗を [`BlogServiceError::Validation`] に変換する `Json<T>` ラッパー
///
/// axum 標準の `Json` はプレーンテキストで 4xx を返すため、
/// エラーレスポンスの形式を揃えるためにこちらを使う。
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
   Json<T>: FromRequest<S, Rejection = JsonRejection>,
   T: DeserializeOwned,
   S: Send + Sync,
{
   type Rejection = BlogServiceError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let Json(value) = Json::<T>::from_request(req, state)
         .await
         .map_err(|e| BlogServiceError::Validation(e.body_text()))?;
      Ok(AppJson(value))
   }
}

/// パスの記事 ID をパースする
///
/// - 空白のみ: `MissingParameter`
/// - UUID として解釈できない: `NotFound`（存在しない ID と同じ扱い）
pub fn parse_blog_id(raw: &str) -> Result<BlogId, BlogServiceError> {
   parse_id(raw, "Please provide blog ID", "Blog")
}

/// パスのコメント ID をパースする
pub fn parse_comment_id(raw: &str) -> Result<CommentId, BlogServiceError> {
   parse_id(raw, "Please provide comment ID", "Comment")
}

fn parse_id<T: FromStr>(
   raw: &str,
   missing_message: &str,
   entity: &str,
) -> Result<T, BlogServiceError> {
   if raw.trim().is_empty() {
      return Err(BlogServiceError::MissingParameter(missing_message.to_string()));
   }
   raw.parse()
      .map_err(|_| BlogServiceError::NotFound(format!("{entity} with ID {raw} not found")))
}
