//! # HRMS 共有ユーティリティ
//!
//! HRMS ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - domain / infra / employee-api のいずれからも依存できる
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - tracing 関連の依存は `observability` feature の背後に置く

pub mod health;
pub mod observability;

pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
