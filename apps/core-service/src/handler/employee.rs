//! # 社員ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /employees` - 社員作成
//! - `GET /employees` - 社員一覧
//! - `GET /employees/{id}` - 社員取得
//! - `PUT /employees/{id}` - 社員の部分更新
//! - `DELETE /employees/{id}` - 社員削除
//!
//! `department_id` が実在する部署を指すかは検証しない。

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use meibo_domain::{
    department::DepartmentId,
    employee::{Employee, EmployeeId, EmployeePatch, NewEmployee},
};
use meibo_infra::repository::EmployeeRepository;
use serde::{Deserialize, Serialize};

use super::decode_json;
use crate::error::CoreError;

/// 社員 API の共有状態
pub struct EmployeeState {
    pub repository: Arc<dyn EmployeeRepository>,
}

/// 社員 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EmployeeDto {
    pub id:            EmployeeId,
    pub first_name:    String,
    pub last_name:     String,
    pub position:      String,
    pub salary:        f64,
    pub full_time:     bool,
    pub department_id: DepartmentId,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id:            *employee.id(),
            first_name:    employee.first_name().to_string(),
            last_name:     employee.last_name().to_string(),
            position:      employee.position().to_string(),
            salary:        employee.salary(),
            full_time:     employee.full_time(),
            department_id: *employee.department_id(),
        }
    }
}

fn parse_id(raw: &str) -> Result<EmployeeId, CoreError> {
    EmployeeId::parse(raw).map_err(|e| {
        tracing::debug!(error = %e, "識別子のパースに失敗しました");
        CoreError::BadRequest("Invalid employee ID")
    })
}

/// POST /employees
///
/// ## レスポンス
///
/// - `201 Created`: 採番された `id` を含む社員
/// - `400 Bad Request`: ボディのデコード失敗（型の不一致、`department_id` の形式不正を含む）。
///   省略したフィールドはゼロ値で補われる
/// - `500 Internal Server Error`: 保存失敗
#[tracing::instrument(skip_all)]
pub async fn create_employee(
    State(state): State<Arc<EmployeeState>>,
    body: Bytes,
) -> Result<impl IntoResponse, CoreError> {
    let input: NewEmployee = decode_json(&body)?;

    let employee = state
        .repository
        .insert(&input)
        .await
        .map_err(CoreError::storage("Failed to add employee"))?;

    tracing::info!(employee_id = %employee.id(), "社員を作成しました");
    Ok((StatusCode::CREATED, Json(EmployeeDto::from(&employee))))
}

/// GET /employees
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, CoreError> {
    let employees = state
        .repository
        .find_all()
        .await
        .map_err(CoreError::storage("Failed to retrieve employees"))?;

    let items: Vec<EmployeeDto> = employees.iter().map(EmployeeDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /employees/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
    let id = parse_id(&id)?;

    let employee = state
        .repository
        .find_by_id(&id)
        .await
        .map_err(CoreError::storage("Failed to retrieve employee"))?
        .ok_or(CoreError::NotFound("Employee not found"))?;

    Ok((StatusCode::OK, Json(EmployeeDto::from(&employee))))
}

/// PUT /employees/{id}
///
/// 6 つの更新可能フィールドのうちボディに含まれるものだけを書き換え、
/// 更新後の社員を再取得して返す。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の社員
/// - `400 Bad Request`: 識別子の形式不正、ボディのデコード失敗
/// - `500 Internal Server Error`: 更新失敗、再取得失敗（存在しない識別子を含む）
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, CoreError> {
    let id = parse_id(&id)?;
    let patch: EmployeePatch = decode_json(&body)?;

    state
        .repository
        .update(&id, &patch)
        .await
        .map_err(CoreError::storage("Failed to update employee"))?;

    let employee = state
        .repository
        .find_by_id(&id)
        .await
        .map_err(CoreError::storage("Failed to retrieve updated employee"))?
        .ok_or(CoreError::Internal("Failed to retrieve updated employee"))?;

    Ok((StatusCode::OK, Json(EmployeeDto::from(&employee))))
}

/// DELETE /employees/{id}
///
/// 一致する社員がなくても 204 No Content を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
    let id = parse_id(&id)?;

    state
        .repository
        .delete(&id)
        .await
        .map_err(CoreError::storage("Failed to delete employee"))?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn employee() -> Employee {
        Employee::new(
            EmployeeId::from_bytes([0xab; 12]),
            NewEmployee {
                first_name:    "Ada".to_string(),
                last_name:     "Lovelace".to_string(),
                position:      "Engineer".to_string(),
                salary:        120000.5,
                full_time:     true,
                department_id: DepartmentId::from_bytes([0x01; 12]),
            },
        )
    }

    #[test]
    fn test_dtoはsnake_caseのフィールド名と16進の識別子で直列化される() {
        let json = serde_json::to_value(EmployeeDto::from(&employee())).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abababababababababababab",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "position": "Engineer",
                "salary": 120000.5,
                "full_time": true,
                "department_id": "010101010101010101010101",
            })
        );
    }

    #[rstest]
    #[case::短すぎる("abc")]
    #[case::十六進以外("zzzzzzzzzzzzzzzzzzzzzzzz")]
    #[case::空文字列("")]
    fn test_不正な識別子はbad_requestになる(#[case] raw: &str) {
        let result = parse_id(raw);

        assert!(matches!(result, Err(CoreError::BadRequest("Invalid employee ID"))));
    }
}
