//! 従業員管理ユースケース

use std::sync::Arc;

use hrms_domain::employee::{Employee, EmployeeId, EmployeeProfile};
use hrms_infra::{InfraError, repository::EmployeeRepository};

use crate::error::ApiError;

/// 従業員管理ユースケース
pub struct EmployeeUseCaseImpl {
   employee_repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeUseCaseImpl {
   pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
      Self {
         employee_repository,
      }
   }

   /// 全従業員を取得する（ストアのカーソル順）
   pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
      let employees = self.employee_repository.find_all().await?;
      Ok(employees)
   }

   /// 従業員を作成する
   ///
   /// 1. 新しいドキュメントとして挿入（ID はストアが採番）
   /// 2. 採番された ID で読み直し、その結果を返す
   pub async fn create_employee(&self, profile: EmployeeProfile) -> Result<Employee, ApiError> {
      let id = self.employee_repository.insert(&profile).await?;

      let employee = self
         .employee_repository
         .find_by_id(&id)
         .await?
         .ok_or_else(|| {
            InfraError::unexpected(format!("挿入したドキュメントが見つかりません: {id}"))
         })?;

      tracing::info!(employee_id = %employee.id(), "従業員を作成しました");
      Ok(employee)
   }

   /// 従業員の name / salary / age を丸ごと置き換える
   ///
   /// 戻り値はリクエストの ID と入力値を合わせたもの。永続化後の読み直しはしない。
   pub async fn update_employee(
      &self,
      id: EmployeeId,
      profile: EmployeeProfile,
   ) -> Result<Employee, ApiError> {
      let matched = self
         .employee_repository
         .replace_profile(&id, &profile)
         .await
         .map_err(|e| ApiError::Internal(e.to_string()))?;

      if !matched {
         return Err(ApiError::NotFound);
      }

      Ok(Employee::from_db(id, profile))
   }

   /// 従業員を削除する
   ///
   /// 削除件数が 0 件なら `NothingDeleted`。
   pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
      let deleted = self.employee_repository.delete(&id).await?;

      if deleted == 0 {
         return Err(ApiError::NothingDeleted);
      }

      tracing::info!(employee_id = %id, "従業員を削除しました");
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use hrms_infra::mock::MockEmployeeRepository;
   use pretty_assertions::assert_eq;

   use super::*;

   fn sut_with(repo: &MockEmployeeRepository) -> EmployeeUseCaseImpl {
      EmployeeUseCaseImpl::new(Arc::new(repo.clone()))
   }

   #[tokio::test]
   async fn test_空のストアで一覧は空() {
      let repo = MockEmployeeRepository::new();
      let sut = sut_with(&repo);

      let employees = sut.list_employees().await.unwrap();

      assert!(employees.is_empty());
   }

   #[tokio::test]
   async fn test_作成はストアから読み直した値を返す() {
      let repo = MockEmployeeRepository::new();
      let sut = sut_with(&repo);
      let profile = EmployeeProfile::new("Alice", 1000.0, 30.0);

      let created = sut.create_employee(profile.clone()).await.unwrap();

      assert_eq!(created.profile(), &profile);
      assert_eq!(repo.employees(), vec![created]);
      // insert + find_by_id
      assert_eq!(repo.call_count(), 2);
   }

   #[tokio::test]
   async fn test_更新は入力値をそのまま返しidは変わらない() {
      let repo = MockEmployeeRepository::new();
      let existing = Employee::from_db(EmployeeId::new(), EmployeeProfile::new("Alice", 1.0, 2.0));
      repo.add_employee(existing.clone());
      let sut = sut_with(&repo);
      let profile = EmployeeProfile::new("Bob", 2000.0, 40.0);

      let updated = sut
         .update_employee(*existing.id(), profile.clone())
         .await
         .unwrap();

      assert_eq!(updated.id(), existing.id());
      assert_eq!(updated.profile(), &profile);
      assert_eq!(repo.employees()[0].profile(), &profile);
   }

   #[tokio::test]
   async fn test_存在しないidの更新はnot_found() {
      let repo = MockEmployeeRepository::new();
      let sut = sut_with(&repo);

      let result = sut
         .update_employee(EmployeeId::new(), EmployeeProfile::default())
         .await;

      assert!(matches!(result, Err(ApiError::NotFound)));
   }

   #[tokio::test]
   async fn test_更新時のストア障害は内部エラー() {
      let repo = MockEmployeeRepository::new();
      repo.set_failing(true);
      let sut = sut_with(&repo);

      let result = sut
         .update_employee(EmployeeId::new(), EmployeeProfile::default())
         .await;

      assert!(matches!(result, Err(ApiError::Internal(_))));
   }

   #[tokio::test]
   async fn test_削除済みのidを再度削除するとnothing_deleted() {
      let repo = MockEmployeeRepository::new();
      let existing = Employee::from_db(EmployeeId::new(), EmployeeProfile::default());
      repo.add_employee(existing.clone());
      let sut = sut_with(&repo);

      sut.delete_employee(*existing.id()).await.unwrap();
      let second = sut.delete_employee(*existing.id()).await;

      assert!(matches!(second, Err(ApiError::NothingDeleted)));
      assert!(repo.employees().is_empty());
   }

   #[tokio::test]
   async fn test_一覧取得時のストア障害はデータベースエラー() {
      let repo = MockEmployeeRepository::new();
      repo.set_failing(true);
      let sut = sut_with(&repo);

      let result = sut.list_employees().await;

      assert!(matches!(result, Err(ApiError::Database(_))));
   }
}
