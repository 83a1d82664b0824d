//! # HRMS ドメイン層
//!
//! 従業員レコードのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! employee-api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB ドライバ、HTTP）に依存しない。
//! 識別子の表現にのみ `bson` の `ObjectId` を使う（ドキュメントストアのネイティブ ID 形式）。
//!
//! ## モジュール構成
//!
//! - [`employee`] - 従業員エンティティと識別子
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use hrms_domain::employee::{Employee, EmployeeId, EmployeeProfile};
//!
//! let id = EmployeeId::parse_str("65f1c0ffee00000000000001").unwrap();
//! let employee = Employee::from_db(id, EmployeeProfile::new("Alice", 1000.0, 30.0));
//! assert_eq!(employee.name(), "Alice");
//! ```

pub mod employee;
pub mod error;

pub use error::DomainError;
