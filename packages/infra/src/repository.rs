//! # リポジトリ実装
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **ストア抽象化**: MongoDB 固有の処理（フィルタ・更新ドキュメント）をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod employee_repository;

pub use employee_repository::{EmployeeDocument, EmployeeRepository, MongoEmployeeRepository};
