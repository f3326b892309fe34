//! # API レスポンスエンベロープ
//!
//! 成功時の統一レスポンス形式 `{ "success": true, "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 成功レスポンスの統一型
///
/// 読み取り・作成系のエンドポイントは `{ "success": true, "data": T }` 形式で返す。
///
/// ## 使用例
///
/// ```
/// use blogapi_shared::ApiResponse;
///
/// let response = ApiResponse::new("hello");
/// assert!(response.success);
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
   pub success: bool,
   pub data:    T,
}

impl<T> ApiResponse<T> {
   /// 新しい `ApiResponse` を作成する
   pub fn new(data: T) -> Self {
      Self {
         success: true,
         data,
      }
   }
}

/// ペイロードを持たず、メッセージのみを返す成功レスポンス
///
/// 削除系のエンドポイントで使用する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
   pub success: bool,
   pub message: String,
}

impl MessageResponse {
   pub fn new(message: impl Into<String>) -> Self {
      Self {
         success: true,
         message: message.into(),
      }
   }
}
