//! # ドメイン層エラー定義
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | フィールドの必須・文字数制約違反 |
//!
//! ## 使用例
//!
//! ```rust
//! use blogapi_domain::DomainError;
//!
//! let error = DomainError::Validation(vec![
//!     "Title cannot be less than 3 characters".to_string(),
//!     "Please provide an author name".to_string(),
//! ]);
//! assert_eq!(
//!     error.to_string(),
//!     "Title cannot be less than 3 characters, Please provide an author name"
//! );
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 違反したフィールドごとのメッセージを宣言順に保持する。
   /// 表示時は `", "` で結合する。
   #[error("{}", .0.join(", "))]
   Validation(Vec<String>),
}

impl DomainError {
   /// 単一メッセージのバリデーションエラーを生成する
   pub fn validation(message: impl Into<String>) -> Self {
      Self::Validation(vec![message.into()])
   }

   /// バリデーションメッセージの一覧を取得する
   pub fn messages(&self) -> &[String] {
      match self {
         Self::Validation(messages) => messages,
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_単一メッセージはそのまま表示される() {
      let error = DomainError::validation("Please provide a title");
      assert_eq!(error.to_string(), "Please provide a title");
      assert_eq!(error.messages(), ["Please provide a title".to_string()]);
   }
}
