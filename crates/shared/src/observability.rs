//! # Observability 基盤
//!
//! サービス起動時に一度だけ呼ぶトレーシング初期化と、その設定を提供する。
//!
//! - 出力形式は `LOG_FORMAT`（`json` / `pretty`）で選ぶ
//! - ログレベルは `RUST_LOG` で上書きできる
//! - サービス名はルートスパン（[`TracingConfig::service_span`]）のフィールドとして全イベントに付く

use std::str::FromStr;

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// 1 イベント 1 行の JSON（本番環境向け）
   Json,
   /// 人間向けのテキスト（開発環境向け）
   #[default]
   Pretty,
}

impl FromStr for LogFormat {
   type Err = String;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      match s {
         "json" => Ok(Self::Json),
         "pretty" => Ok(Self::Pretty),
         other => Err(format!("unknown LOG_FORMAT={other:?}")),
      }
   }
}

impl LogFormat {
   /// 環境変数 `LOG_FORMAT` から読み取る
   pub fn from_env() -> Self {
      Self::from_setting(std::env::var("LOG_FORMAT").ok().as_deref())
   }

   /// 設定値からログ形式を決める
   ///
   /// 未設定ならデフォルト。解釈できない値は subscriber 初期化前なので
   /// stderr に警告を出してデフォルトに戻す。
   fn from_setting(value: Option<&str>) -> Self {
      match value.map(str::parse) {
         None => Self::default(),
         Some(Ok(format)) => format,
         Some(Err(message)) => {
            eprintln!("WARNING: {message}, falling back to pretty");
            Self::default()
         }
      }
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
   /// ルートスパンに付けるサービス名
   pub service_name: String,
   pub log_format:   LogFormat,
}

impl TracingConfig {
   pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         service_name: service_name.into(),
         log_format,
      }
   }

   /// `LOG_FORMAT` を読んで設定を作る
   pub fn from_env(service_name: impl Into<String>) -> Self {
      Self::new(service_name, LogFormat::from_env())
   }

   /// サービス全体を包むルートスパン
   ///
   /// サーバーの future をこのスパンで instrument すると、
   /// JSON 出力の `span.service` にサービス名が入る。
   #[cfg(feature = "observability")]
   pub fn service_span(&self) -> tracing::Span {
      tracing::info_span!("app", service = %self.service_name)
   }
}

/// グローバル subscriber を登録する
///
/// フィルタは `RUST_LOG`、未設定なら `"info,blogapi=debug"`。
/// `tracing_error::ErrorLayer` も積むので、`InfraError` の `SpanTrace` に
/// ユースケースとリポジトリのスパンが残る。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
   use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let filter =
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,blogapi=debug"));

   let output = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(filter)
      .with(output)
      .with(tracing_error::ErrorLayer::default())
      .init();
}
