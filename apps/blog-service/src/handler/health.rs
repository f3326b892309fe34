//! # ヘルスチェック・フォールバックハンドラ
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! どのルートにも一致しないリクエストは [`route_not_found`] が 404 を返す。

use axum::Json;
use blogapi_shared::HealthResponse;

use crate::error::BlogServiceError;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// 未定義ルートのフォールバック
pub async fn route_not_found() -> BlogServiceError {
   BlogServiceError::NotFound("Route not found".to_string())
}
