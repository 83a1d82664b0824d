//! # Employee API ライブラリ
//!
//! 設定、ユースケース、ハンドラ、ルーター構築を公開する。
//! HTTP テストから実際のルーターを組み立てられるようにライブラリとして切り出している。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

pub use app_builder::build_app;
