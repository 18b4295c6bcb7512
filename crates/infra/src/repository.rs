//! # リポジトリ実装
//!
//! 社員・部署コレクションへのアクセスを提供する。
//!
//! ## 設計方針
//!
//! - **1 メソッド 1 ストレージ呼び出し**: 各メソッドは MongoDB への単一の操作に対応する
//! - **識別子の変換**: ドメインの ID と `ObjectId` の変換はこの層に閉じ込める
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod department_repository;
pub mod employee_repository;

pub use department_repository::{DepartmentRepository, MongoDepartmentRepository};
pub use employee_repository::{EmployeeRepository, MongoEmployeeRepository};
