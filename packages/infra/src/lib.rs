//! # HRMS インフラ層
//!
//! ドキュメントストア（MongoDB）との接続・通信を担当する。
//!
//! ## 依存関係
//!
//! ```text
//! employee-api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - Storage Gateway（接続と従業員コレクション）
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと MongoDB 実装
//! - `mock` - インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use hrms_infra::{db::MongoGateway, repository::{EmployeeRepository, MongoEmployeeRepository}};
//!
//! let gateway = MongoGateway::connect("mongodb://localhost:27017", "fiber-hrms").await?;
//! let repo = MongoEmployeeRepository::new(&gateway);
//! let employees = repo.find_all().await?;
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
