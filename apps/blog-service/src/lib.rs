//! # Blog Service ライブラリ
//!
//! ブログ記事・コメント API のユースケース、ハンドラ、ルーターを公開する。
//! `main.rs` と統合テストの双方から同じルーターを組み立てる。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;
