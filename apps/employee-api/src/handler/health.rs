//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（MongoDB への ping で接続状態を確認）
//!
//! レスポンス型は [`hrms_shared::HealthResponse`] / [`hrms_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use hrms_infra::db::MongoGateway;
use hrms_shared::{CheckStatus, HealthResponse, ReadinessResponse};

const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
   pub gateway: MongoGateway,
}

/// Readiness Check エンドポイント
///
/// MongoDB に到達できれば 200、できなければ 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let mut checks = HashMap::new();
   checks.insert("database".to_string(), check_database(&state.gateway).await);

   let response = ReadinessResponse::from_checks(checks);
   let http_status = if response.is_ready() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (http_status, Json(response))
}

/// MongoDB への接続を ping で確認する（タイムアウト: 5 秒）
async fn check_database(gateway: &MongoGateway) -> CheckStatus {
   match tokio::time::timeout(PING_TIMEOUT, gateway.ping()).await {
      Ok(Ok(())) => CheckStatus::Ok,
      Ok(Err(e)) => {
         tracing::warn!(error = %e, "readiness check: database ping failed");
         CheckStatus::Error
      }
      Err(_) => {
         tracing::warn!("readiness check: database check timed out");
         CheckStatus::Error
      }
   }
}
