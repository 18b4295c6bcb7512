//! # テスト用インメモリリポジトリ
//!
//! ハンドラテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! meibo-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 採番には MongoDB と同じ `ObjectId::new()` を使い、
//! 一致なしの更新・削除をエラーにしない点も MongoDB 実装に揃える。

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use meibo_domain::{
    department::{Department, DepartmentId, DepartmentPatch, NewDepartment},
    employee::{Employee, EmployeeId, EmployeePatch, NewEmployee},
};
use mongodb::bson::oid::ObjectId;

use crate::{
    error::InfraError,
    repository::{DepartmentRepository, EmployeeRepository},
};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, InfraError> {
    mutex
        .lock()
        .map_err(|_| InfraError::unexpected("インメモリストアのロックが汚染されています"))
}

// ===== InMemoryEmployeeRepository =====

#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<Mutex<Vec<Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn insert(&self, input: &NewEmployee) -> Result<Employee, InfraError> {
        let employee = Employee::new(
            EmployeeId::from_bytes(ObjectId::new().bytes()),
            input.clone(),
        );
        lock(&self.employees)?.push(employee.clone());
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        Ok(lock(&self.employees)?.clone())
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
        Ok(lock(&self.employees)?
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }

    async fn update(&self, id: &EmployeeId, patch: &EmployeePatch) -> Result<(), InfraError> {
        let mut employees = lock(&self.employees)?;
        if let Some(slot) = employees.iter_mut().find(|e| e.id() == id) {
            *slot = slot.clone().patched(patch);
        }
        Ok(())
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), InfraError> {
        lock(&self.employees)?.retain(|e| e.id() != id);
        Ok(())
    }
}

// ===== InMemoryDepartmentRepository =====

#[derive(Clone, Default)]
pub struct InMemoryDepartmentRepository {
    departments: Arc<Mutex<Vec<Department>>>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn insert(&self, input: &NewDepartment) -> Result<Department, InfraError> {
        let department = Department::new(
            DepartmentId::from_bytes(ObjectId::new().bytes()),
            input.clone(),
        );
        lock(&self.departments)?.push(department.clone());
        Ok(department)
    }

    async fn find_all(&self) -> Result<Vec<Department>, InfraError> {
        Ok(lock(&self.departments)?.clone())
    }

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, InfraError> {
        Ok(lock(&self.departments)?
            .iter()
            .find(|d| d.id() == id)
            .cloned())
    }

    async fn update(&self, id: &DepartmentId, patch: &DepartmentPatch) -> Result<(), InfraError> {
        let mut departments = lock(&self.departments)?;
        if let Some(slot) = departments.iter_mut().find(|d| d.id() == id) {
            *slot = slot.clone().patched(patch);
        }
        Ok(())
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), InfraError> {
        lock(&self.departments)?.retain(|d| d.id() != id);
        Ok(())
    }
}

// ===== FailingRepository =====

/// すべての操作でストレージエラーを返すリポジトリ
///
/// 500 Internal Server Error の経路をテストするために使用する。
#[derive(Clone, Copy, Default)]
pub struct FailingRepository;

fn storage_down() -> InfraError {
    InfraError::unexpected("ストレージに接続できません")
}

#[async_trait]
impl EmployeeRepository for FailingRepository {
    async fn insert(&self, _input: &NewEmployee) -> Result<Employee, InfraError> {
        Err(storage_down())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        Err(storage_down())
    }

    async fn find_by_id(&self, _id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
        Err(storage_down())
    }

    async fn update(&self, _id: &EmployeeId, _patch: &EmployeePatch) -> Result<(), InfraError> {
        Err(storage_down())
    }

    async fn delete(&self, _id: &EmployeeId) -> Result<(), InfraError> {
        Err(storage_down())
    }
}

#[async_trait]
impl DepartmentRepository for FailingRepository {
    async fn insert(&self, _input: &NewDepartment) -> Result<Department, InfraError> {
        Err(storage_down())
    }

    async fn find_all(&self) -> Result<Vec<Department>, InfraError> {
        Err(storage_down())
    }

    async fn find_by_id(&self, _id: &DepartmentId) -> Result<Option<Department>, InfraError> {
        Err(storage_down())
    }

    async fn update(
        &self,
        _id: &DepartmentId,
        _patch: &DepartmentPatch,
    ) -> Result<(), InfraError> {
        Err(storage_down())
    }

    async fn delete(&self, _id: &DepartmentId) -> Result<(), InfraError> {
        Err(storage_down())
    }
}
