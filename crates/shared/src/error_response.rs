//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換とステータスコードの決定はサービスの責務
//! - エラーは常に 1 件のみ返す（複数のバリデーションメッセージは呼び出し側で結合済み）

use serde::{Deserialize, Serialize};

/// 内部エラー時にクライアントへ返す固定メッセージ
pub const UNKNOWN_SERVER_ERROR: &str = "Unknown server error";

/// エラーレスポンス
///
/// `{ "success": false, "error": "<message>" }` 形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub success: bool,
   pub error:   String,
}

impl ErrorResponse {
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         success: false,
         error:   error.into(),
      }
   }

   /// 500 Internal Server Error 用
   ///
   /// 内部情報を漏らさないため、メッセージは固定値。
   pub fn unknown() -> Self {
      Self::new(UNKNOWN_SERVER_ERROR)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_jsonシリアライズでsuccessがfalseになる() {
      let error = ErrorResponse::new("Title cannot be less than 3 characters");
      let json = serde_json::to_value(&error).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "success": false,
            "error": "Title cannot be less than 3 characters",
         })
      );
      // message キーは存在しない
      assert!(json.get("message").is_none());
   }

   #[test]
   fn test_unknownは固定メッセージを返す() {
      let error = ErrorResponse::unknown();

      assert!(!error.success);
      assert_eq!(error.error, "Unknown server error");
   }

   #[test]
   fn test_jsonデシリアライズが正しく動作する() {
      let json = r#"{ "success": false, "error": "見つかりません" }"#;
      let error: ErrorResponse = serde_json::from_str(json).unwrap();

      assert_eq!(error, ErrorResponse::new("見つかりません"));
   }
}
