//! # フィールドバリデーションの集約
//!
//! エンティティ作成時に複数フィールドを検証し、違反をまとめて
//! 1 つの [`DomainError::Validation`] として返すためのヘルパー。

use crate::DomainError;

/// フィールド単位の検証結果を宣言順に集める
///
/// ```rust
/// use blogapi_domain::{blog::BlogTitle, validation::FieldErrors};
///
/// let mut errors = FieldErrors::new();
/// let title = errors.check(BlogTitle::new("ab"));
/// assert!(title.is_none());
/// assert_eq!(
///     errors.into_error().to_string(),
///     "Title cannot be less than 3 characters"
/// );
/// ```
#[derive(Debug, Default)]
pub struct FieldErrors {
   messages: Vec<String>,
}

impl FieldErrors {
   pub fn new() -> Self {
      Self::default()
   }

   /// 検証結果を取り込み、成功時は値を返す
   pub fn check<T>(&mut self, result: Result<T, DomainError>) -> Option<T> {
      match result {
         Ok(value) => Some(value),
         Err(DomainError::Validation(messages)) => {
            self.messages.extend(messages);
            None
         }
      }
   }

   /// 集めた違反を 1 つのエラーにまとめる
   pub fn into_error(self) -> DomainError {
      DomainError::Validation(self.messages)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_成功した値はそのまま返る() {
      let mut sut = FieldErrors::new();
      assert_eq!(sut.check(Ok::<_, DomainError>(1)), Some(1));
      assert_eq!(sut.into_error(), DomainError::Validation(vec![]));
   }

   #[test]
   fn test_違反は取り込んだ順に保持される() {
      let mut sut = FieldErrors::new();
      sut.check::<()>(Err(DomainError::validation("first")));
      sut.check::<()>(Err(DomainError::validation("second")));

      assert_eq!(
         sut.into_error(),
         DomainError::Validation(vec!["first".to_string(), "second".to_string()])
      );
   }
}
