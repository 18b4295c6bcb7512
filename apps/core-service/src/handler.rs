//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、永続化はリポジトリに委譲
//! - リクエストボディは生のバイト列で受け取り、`Content-Type` に関係なく JSON としてデコードする

pub mod department;
pub mod employee;
pub mod health;

use axum::body::Bytes;
pub use department::{
    DepartmentDto,
    DepartmentState,
    create_department,
    delete_department,
    get_department,
    list_departments,
    update_department,
};
pub use employee::{
    EmployeeDto,
    EmployeeState,
    create_employee,
    delete_employee,
    get_employee,
    list_employees,
    update_employee,
};
pub use health::{ReadinessState, health_check, readiness_check};
use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// リクエストボディを JSON としてデコードする
///
/// 構文エラーと型の不一致はすべて 400 Bad Request になる。
pub(crate) fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, CoreError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "リクエストボディのデコードに失敗しました");
        CoreError::BadRequest("Invalid input")
    })
}
