//! # BlogApi ドメイン層
//!
//! ブログ記事とコメントのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`blog::Blog`], [`comment::Comment`]）
//! - **値オブジェクト**: 文字数制約をコンストラクタで強制する Newtype
//!   （[`blog::BlogTitle`] など）
//! - **ドメインエラー**: 入力値の検証失敗を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! blog-service → infra → domain
//!       ↘                  ↑
//!         ────────────────
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`blog`] - ブログ記事エンティティとコメントの結合
//! - [`comment`] - コメントエンティティ
//! - [`validation`] - フィールド単位のバリデーション結果の集約
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層エラー

#[macro_use]
mod macros;

pub mod blog;
pub mod clock;
pub mod comment;
pub mod error;
pub mod validation;

pub use error::DomainError;
