//! # アプリケーション構築
//!
//! State を受け取ってルーターを組み立てる。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, put},
};
use hrms_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::handler::{
   EmployeeState,
   ReadinessState,
   create_employee,
   delete_employee,
   health_check,
   list_employees,
   readiness_check,
   update_employee,
};

/// ルーターを構築する
///
/// Request ID レイヤーは最外周に置き、すべてのログに `request_id` が付くようにする。
pub fn build_app(
   employee_state: Arc<EmployeeState>,
   readiness_state: Arc<ReadinessState>,
) -> Router {
   let readiness = Router::new()
      .route("/health/ready", get(readiness_check))
      .with_state(readiness_state);

   Router::new()
      .route("/health", get(health_check))
      .route(
         "/api/v1/employee",
         get(list_employees).post(create_employee),
      )
      .route(
         "/api/v1/employee/{id}",
         put(update_employee).delete(delete_employee),
      )
      .with_state(employee_state)
      .merge(readiness)
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
