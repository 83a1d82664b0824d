//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ロジックはユースケース層に委譲

pub mod employee;
pub mod health;

pub use employee::{
   EmployeeDto,
   EmployeeRequest,
   EmployeeState,
   create_employee,
   delete_employee,
   list_employees,
   update_employee,
};
pub use health::{ReadinessState, health_check, readiness_check};
