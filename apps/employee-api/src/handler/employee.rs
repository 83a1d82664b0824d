//! # 従業員ハンドラ
//!
//! 従業員レコードの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/employee` - 従業員一覧
//! - `POST /api/v1/employee` - 従業員作成
//! - `PUT /api/v1/employee/{id}` - 従業員更新（name / salary / age の全置換）
//! - `DELETE /api/v1/employee/{id}` - 従業員削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   http::StatusCode,
   response::IntoResponse,
};
use hrms_domain::employee::{Employee, EmployeeId, EmployeeProfile};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, usecase::EmployeeUseCaseImpl};

/// 削除成功時のレスポンスボディ
const DELETED_MESSAGE: &str = "Record deleted";

/// 従業員 API の共有状態
pub struct EmployeeState {
   pub usecase: EmployeeUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 従業員の作成・更新リクエスト
///
/// 欠けたフィールドと `null` はゼロ値になる。`id` を含めても無視する。
/// 先頭大文字のキー（`Name` など）も受け付ける。
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeRequest {
   #[serde(default, alias = "Name")]
   pub name:   Option<String>,
   #[serde(default, alias = "Salary")]
   pub salary: Option<f64>,
   #[serde(default, alias = "Age")]
   pub age:    Option<f64>,
}

impl From<EmployeeRequest> for EmployeeProfile {
   fn from(req: EmployeeRequest) -> Self {
      EmployeeProfile::new(
         req.name.unwrap_or_default(),
         req.salary.unwrap_or_default(),
         req.age.unwrap_or_default(),
      )
   }
}

/// 従業員 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EmployeeDto {
   pub name:   String,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub id:     Option<String>,
   pub salary: f64,
   pub age:    f64,
}

impl From<&Employee> for EmployeeDto {
   fn from(employee: &Employee) -> Self {
      Self {
         name:   employee.name().to_string(),
         id:     Some(employee.id().to_hex()),
         salary: employee.salary(),
         age:    employee.age(),
      }
   }
}

// --- ハンドラ ---

/// GET /api/v1/employee
///
/// 全従業員を返す。0 件なら空配列。
#[tracing::instrument(skip_all)]
pub async fn list_employees(
   State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, ApiError> {
   let employees = state.usecase.list_employees().await?;

   let items: Vec<EmployeeDto> = employees.iter().map(EmployeeDto::from).collect();

   Ok((StatusCode::OK, Json(items)))
}

/// POST /api/v1/employee
///
/// ## レスポンス
///
/// - `200 OK`: 作成された従業員（ストアが採番した ID を含む）
/// - `400 Bad Request`: ボディを解釈できない
/// - `500 Internal Server Error`: ストアのエラー
#[tracing::instrument(skip_all)]
pub async fn create_employee(
   State(state): State<Arc<EmployeeState>>,
   payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(req) = payload?;

   let employee = state.usecase.create_employee(req.into()).await?;

   Ok((StatusCode::OK, Json(EmployeeDto::from(&employee))))
}

/// PUT /api/v1/employee/{id}
///
/// ## レスポンス
///
/// - `200 OK`: リクエストの ID と入力値
/// - `400 Bad Request`: ID またはボディを解釈できない
/// - `404 Not Found`: ID に一致する従業員がいない
/// - `500 Internal Server Error`: ストアのエラー（ボディなし）
#[tracing::instrument(skip_all)]
pub async fn update_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(raw_id): Path<String>,
   payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let id = EmployeeId::parse_str(&raw_id)?;
   let Json(req) = payload?;

   let employee = state.usecase.update_employee(id, req.into()).await?;

   Ok((StatusCode::OK, Json(EmployeeDto::from(&employee))))
}

/// DELETE /api/v1/employee/{id}
///
/// ## レスポンス
///
/// - `200 OK`: `"Record deleted"`
/// - `400 Bad Request`: ID を解釈できない、または削除件数が 0 件
/// - `500 Internal Server Error`: ストアのエラー
#[tracing::instrument(skip_all)]
pub async fn delete_employee(
   State(state): State<Arc<EmployeeState>>,
   Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let id = EmployeeId::parse_str(&raw_id)?;

   state.usecase.delete_employee(id).await?;

   Ok((StatusCode::OK, Json(DELETED_MESSAGE)))
}
