//! # Blog Service エラー定義
//!
//! Blog Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスは常に `{ "success": false, "error": "<message>" }` 形式。
//! データベース由来の 500 エラーは内部情報を返さず、ログにのみ詳細を残す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use blogapi_domain::DomainError;
use blogapi_infra::InfraError;
use blogapi_shared::ErrorResponse;
use thiserror::Error;

/// 一意制約違反時にクライアントへ返すメッセージ
pub const DUPLICATE_FIELD_VALUE: &str = "A duplicate field value entered";

/// Blog Service で発生するエラー
#[derive(Debug, Error)]
pub enum BlogServiceError {
   /// パスパラメータが空
   #[error("パラメータがありません: {0}")]
   MissingParameter(String),

   /// 入力値の制約違反、または不正な JSON ボディ
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 書き込み結果が返らなかった
   #[error("永続化エラー: {0}")]
   Persistence(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for BlogServiceError {
   fn from(err: DomainError) -> Self {
      Self::Validation(err.to_string())
   }
}

impl IntoResponse for BlogServiceError {
   fn into_response(self) -> Response {
      let (status, message) = match self {
         BlogServiceError::MissingParameter(msg) | BlogServiceError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, msg)
         }
         BlogServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
         BlogServiceError::Persistence(msg) => {
            tracing::error!("永続化エラー: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, msg)
         }
         BlogServiceError::Database(e) if e.is_unique_violation() => {
            tracing::error!(span_trace = %e.span_trace(), "一意制約違反: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               DUPLICATE_FIELD_VALUE.to_string(),
            )
         }
         BlogServiceError::Database(e) => {
            tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::unknown()))
               .into_response();
         }
      };

      (status, Json(ErrorResponse::new(message))).into_response()
   }
}
