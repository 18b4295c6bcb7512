//! # EmployeeRepository
//!
//! 社員の永続化を担当するリポジトリ。
//!
//! ## ドキュメント形式
//!
//! ```json
//! {
//!   "_id": ObjectId("..."),
//!   "first_name": "Ada",
//!   "last_name": "Lovelace",
//!   "position": "Engineer",
//!   "salary": 120000.0,
//!   "full_time": true,
//!   "department_id": ObjectId("...")
//! }
//! ```
//!
//! `department_id` は `departments` コレクションへの参照だが、存在確認はしない。

use async_trait::async_trait;
use meibo_domain::{
    department::DepartmentId,
    employee::{Employee, EmployeeId, EmployeePatch, NewEmployee},
};
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{DocumentStore, EMPLOYEE_COLLECTION},
    error::InfraError,
};

/// 社員リポジトリトレイト
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 識別子を採番して社員を挿入し、挿入した社員を返す
    async fn insert(&self, input: &NewEmployee) -> Result<Employee, InfraError>;

    /// 全社員を取得する（順序はストレージ任せ）
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

    /// ID で社員を検索する
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError>;

    /// 社員を部分更新する
    ///
    /// 一致するドキュメントがなくてもエラーにしない。
    async fn update(&self, id: &EmployeeId, patch: &EmployeePatch) -> Result<(), InfraError>;

    /// 社員を削除する
    ///
    /// 一致するドキュメントがなくてもエラーにしない。
    async fn delete(&self, id: &EmployeeId) -> Result<(), InfraError>;
}

/// `employees` コレクションのドキュメント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EmployeeDocument {
    #[serde(rename = "_id")]
    id:            ObjectId,
    first_name:    String,
    last_name:     String,
    position:      String,
    salary:        f64,
    full_time:     bool,
    department_id: ObjectId,
}

impl EmployeeDocument {
    fn new(id: ObjectId, input: &NewEmployee) -> Self {
        Self {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            position: input.position.clone(),
            salary: input.salary,
            full_time: input.full_time,
            department_id: ObjectId::from_bytes(input.department_id.bytes()),
        }
    }

    fn into_entity(self) -> Employee {
        Employee::new(
            EmployeeId::from_bytes(self.id.bytes()),
            NewEmployee {
                first_name:    self.first_name,
                last_name:     self.last_name,
                position:      self.position,
                salary:        self.salary,
                full_time:     self.full_time,
                department_id: DepartmentId::from_bytes(self.department_id.bytes()),
            },
        )
    }
}

fn object_id(id: &EmployeeId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

/// 部分更新の `$set` ドキュメントを組み立てる
fn set_document(patch: &EmployeePatch) -> Document {
    let mut set = Document::new();
    if let Some(first_name) = &patch.first_name {
        set.insert("first_name", first_name.as_str());
    }
    if let Some(last_name) = &patch.last_name {
        set.insert("last_name", last_name.as_str());
    }
    if let Some(position) = &patch.position {
        set.insert("position", position.as_str());
    }
    if let Some(salary) = patch.salary {
        set.insert("salary", salary);
    }
    if let Some(full_time) = patch.full_time {
        set.insert("full_time", full_time);
    }
    if let Some(department_id) = &patch.department_id {
        set.insert(
            "department_id",
            ObjectId::from_bytes(department_id.bytes()),
        );
    }
    set
}

/// MongoDB 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct MongoEmployeeRepository {
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.collection(EMPLOYEE_COLLECTION),
        }
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, input: &NewEmployee) -> Result<Employee, InfraError> {
        let document = EmployeeDocument::new(ObjectId::new(), input);
        self.collection.insert_one(&document).await?;

        Ok(document.into_entity())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut employees = Vec::new();
        while cursor.advance().await? {
            employees.push(cursor.deserialize_current()?.into_entity());
        }

        Ok(employees)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
        let document = self
            .collection
            .find_one(doc! { "_id": object_id(id) })
            .await?;

        Ok(document.map(EmployeeDocument::into_entity))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &EmployeeId, patch: &EmployeePatch) -> Result<(), InfraError> {
        let set = set_document(patch);
        // 空の $set はサーバーがエラーにするため書き込み自体を省く
        if set.is_empty() {
            return Ok(());
        }

        self.collection
            .update_one(doc! { "_id": object_id(id) }, doc! { "$set": set })
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &EmployeeId) -> Result<(), InfraError> {
        self.collection
            .delete_one(doc! { "_id": object_id(id) })
            .await?;

        Ok(())
    }
}
