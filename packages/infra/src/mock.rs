//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! hrms-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use hrms_domain::employee::{Employee, EmployeeId, EmployeeProfile};

use crate::{error::InfraError, repository::EmployeeRepository};

/// インメモリの EmployeeRepository
///
/// - 挿入時に ID を採番する（ストアの採番を再現）
/// - 呼び出し回数を記録する（「ストアを呼ばないこと」の検証用）
/// - `set_failing(true)` で以降の全呼び出しをエラーにする
/// - `set_dropping_inserts(true)` で挿入を受け付けたふりをして保存しない
/// - `set_failing_lookups(true)` で `find_by_id` だけをエラーにする
#[derive(Clone, Default)]
pub struct MockEmployeeRepository {
   employees:        Arc<Mutex<Vec<Employee>>>,
   calls:            Arc<AtomicUsize>,
   failing:          Arc<AtomicBool>,
   dropping_inserts: Arc<AtomicBool>,
   failing_lookups:  Arc<AtomicBool>,
}

impl MockEmployeeRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 既存レコードを直接追加する
   pub fn add_employee(&self, employee: Employee) {
      self.employees.lock().unwrap().push(employee);
   }

   /// 現在保持しているレコードのスナップショット
   pub fn employees(&self) -> Vec<Employee> {
      self.employees.lock().unwrap().clone()
   }

   /// トレイトメソッドが呼ばれた回数
   pub fn call_count(&self) -> usize {
      self.calls.load(Ordering::SeqCst)
   }

   pub fn set_failing(&self, failing: bool) {
      self.failing.store(failing, Ordering::SeqCst);
   }

   pub fn set_dropping_inserts(&self, dropping: bool) {
      self.dropping_inserts.store(dropping, Ordering::SeqCst);
   }

   pub fn set_failing_lookups(&self, failing: bool) {
      self.failing_lookups.store(failing, Ordering::SeqCst);
   }

   fn record_call(&self) -> Result<(), InfraError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if self.failing.load(Ordering::SeqCst) {
         return Err(InfraError::unexpected("server selection timeout"));
      }
      Ok(())
   }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
   async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
      self.record_call()?;
      Ok(self.employees())
   }

   async fn insert(&self, profile: &EmployeeProfile) -> Result<EmployeeId, InfraError> {
      self.record_call()?;
      let id = EmployeeId::new();
      if !self.dropping_inserts.load(Ordering::SeqCst) {
         self.add_employee(Employee::from_db(id, profile.clone()));
      }
      Ok(id)
   }

   async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
      self.record_call()?;
      if self.failing_lookups.load(Ordering::SeqCst) {
         return Err(InfraError::unexpected("cursor killed during lookup"));
      }
      Ok(self
         .employees
         .lock()
         .unwrap()
         .iter()
         .find(|e| e.id() == id)
         .cloned())
   }

   async fn replace_profile(
      &self,
      id: &EmployeeId,
      profile: &EmployeeProfile,
   ) -> Result<bool, InfraError> {
      self.record_call()?;
      let mut employees = self.employees.lock().unwrap();
      let Some(pos) = employees.iter().position(|e| e.id() == id) else {
         return Ok(false);
      };
      employees[pos] = employees[pos].clone().with_profile(profile.clone());
      Ok(true)
   }

   async fn delete(&self, id: &EmployeeId) -> Result<u64, InfraError> {
      self.record_call()?;
      let mut employees = self.employees.lock().unwrap();
      let before = employees.len();
      employees.retain(|e| e.id() != id);
      Ok((before - employees.len()) as u64)
   }
}
