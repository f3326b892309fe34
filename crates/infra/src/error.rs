//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From` 実装や convenience constructor でエラーを生成すると、
//! その時点のスパン情報（どのユースケース・リポジトリを経由したか）が記録される。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベースエラー
   ///
   /// SQL クエリの実行失敗、接続エラー、制約違反（重複キーを含む）など。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// 予期しないエラー
   ///
   /// 保存済みの行がドメインの制約を満たさない場合など。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// 一意制約違反かどうか
   pub fn is_unique_violation(&self) -> bool {
      match &self.kind {
         InfraErrorKind::Database(e) => e
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation()),
         InfraErrorKind::Unexpected(_) => false,
      }
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      std::error::Error::source(&self.kind)
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(source),
         span_trace: SpanTrace::capture(),
      }
   }
}

#[cfg(test)]
mod tests {
   use tracing_subscriber::layer::SubscriberExt as _;

   use super::*;

   /// テスト用に ErrorLayer 付き subscriber を設定する
   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   #[test]
   fn test_from_sqlx_errorでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("test_repo", blog_id = "B-001");
         let _enter = span.enter();

         let err: InfraError = sqlx::Error::RowNotFound.into();

         assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
         let trace_str = format!("{}", err.span_trace());
         assert!(
            trace_str.contains("test_repo"),
            "SpanTrace がスパン名を含むこと: {trace_str}",
         );
      });
   }

   #[test]
   fn test_unexpectedでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("test_row_conversion");
         let _enter = span.enter();

         let err = InfraError::unexpected("不正な行");

         assert!(matches!(err.kind(), InfraErrorKind::Unexpected(msg) if msg == "不正な行"));
         assert!(format!("{}", err.span_trace()).contains("test_row_conversion"));
      });
   }

   #[test]
   fn test_displayがinfra_error_kindのメッセージを出力する() {
      let err = InfraError::unexpected("壊れたデータ");
      assert_eq!(format!("{err}"), "予期しないエラー: 壊れたデータ");
   }

   #[test]
   fn test_sourceがinfra_error_kindに委譲する() {
      use std::error::Error;

      let err: InfraError = sqlx::Error::RowNotFound.into();
      assert!(err.source().is_some());
      assert!(InfraError::unexpected("x").source().is_none());
   }

   #[test]
   fn test_一意制約違反以外はfalseを返す() {
      let err: InfraError = sqlx::Error::RowNotFound.into();
      assert!(!err.is_unique_violation());
      assert!(!InfraError::unexpected("x").is_unique_violation());
   }
}
