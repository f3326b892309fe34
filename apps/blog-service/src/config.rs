//! # Blog Service 設定
//!
//! 環境変数から Blog Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// `BLOG_HOST` 未設定時のバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";
/// `BLOG_PORT` 未設定時のポート番号
const DEFAULT_PORT: u16 = 5000;

/// Blog Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
   /// バインドアドレス
   pub host:         String,
   /// ポート番号
   pub port:         u16,
   /// データベース接続 URL
   pub database_url: String,
}

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   #[error("{name} は有効なポート番号である必要があります: {value}")]
   InvalidPort { name: &'static str, value: String },
}

impl BlogConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の key-value ソースから設定を読み込む
   fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let port = match lookup("BLOG_PORT") {
         Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
            name: "BLOG_PORT",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      Ok(Self {
         host: lookup("BLOG_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
      })
   }
}
