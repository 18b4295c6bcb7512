//! # 部署ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /departments` - 部署作成
//! - `GET /departments` - 部署一覧
//! - `GET /departments/{id}` - 部署取得
//! - `PUT /departments/{id}` - 部署の部分更新
//! - `DELETE /departments/{id}` - 部署削除

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use meibo_domain::department::{Department, DepartmentId, DepartmentPatch, NewDepartment};
use meibo_infra::repository::DepartmentRepository;
use serde::{Deserialize, Serialize};

use super::decode_json;
use crate::error::CoreError;

/// 部署 API の共有状態
pub struct DepartmentState {
    pub repository: Arc<dyn DepartmentRepository>,
}

/// 部署 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DepartmentDto {
    pub id:       DepartmentId,
    pub name:     String,
    pub location: String,
}

impl From<&Department> for DepartmentDto {
    fn from(department: &Department) -> Self {
        Self {
            id:       *department.id(),
            name:     department.name().to_string(),
            location: department.location().to_string(),
        }
    }
}

fn parse_id(raw: &str) -> Result<DepartmentId, CoreError> {
    DepartmentId::parse(raw).map_err(|e| {
        tracing::debug!(error = %e, "識別子のパースに失敗しました");
        CoreError::BadRequest("Invalid department ID")
    })
}

/// POST /departments
///
/// ## レスポンス
///
/// - `201 Created`: 採番された `id` を含む部署
/// - `400 Bad Request`: ボディのデコード失敗
/// - `500 Internal Server Error`: 保存失敗
#[tracing::instrument(skip_all)]
pub async fn create_department(
    State(state): State<Arc<DepartmentState>>,
    body: Bytes,
) -> Result<impl IntoResponse, CoreError> {
    let input: NewDepartment = decode_json(&body)?;

    let department = state
        .repository
        .insert(&input)
        .await
        .map_err(CoreError::storage("Failed to add department"))?;

    tracing::info!(department_id = %department.id(), "部署を作成しました");
    Ok((StatusCode::CREATED, Json(DepartmentDto::from(&department))))
}

/// GET /departments
#[tracing::instrument(skip_all)]
pub async fn list_departments(
    State(state): State<Arc<DepartmentState>>,
) -> Result<impl IntoResponse, CoreError> {
    let departments = state
        .repository
        .find_all()
        .await
        .map_err(CoreError::storage("Failed to retrieve departments"))?;

    let items: Vec<DepartmentDto> = departments.iter().map(DepartmentDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /departments/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 部署
/// - `400 Bad Request`: 識別子の形式不正
/// - `404 Not Found`: 部署が存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_department(
    State(state): State<Arc<DepartmentState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
    let id = parse_id(&id)?;

    let department = state
        .repository
        .find_by_id(&id)
        .await
        .map_err(CoreError::storage("Failed to retrieve department"))?
        .ok_or(CoreError::NotFound("Department not found"))?;

    Ok((StatusCode::OK, Json(DepartmentDto::from(&department))))
}

/// PUT /departments/{id}
///
/// `name` と `location` のうちボディに含まれるものだけを書き換え、
/// 更新後の部署を再取得して返す。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の部署
/// - `400 Bad Request`: 識別子の形式不正、ボディのデコード失敗
/// - `500 Internal Server Error`: 更新失敗、再取得失敗（存在しない識別子を含む）
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_department(
    State(state): State<Arc<DepartmentState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, CoreError> {
    let id = parse_id(&id)?;
    let patch: DepartmentPatch = decode_json(&body)?;

    state
        .repository
        .update(&id, &patch)
        .await
        .map_err(CoreError::storage("Failed to update department"))?;

    let department = state
        .repository
        .find_by_id(&id)
        .await
        .map_err(CoreError::storage("Failed to retrieve updated department"))?
        .ok_or(CoreError::Internal("Failed to retrieve updated department"))?;

    Ok((StatusCode::OK, Json(DepartmentDto::from(&department))))
}

/// DELETE /departments/{id}
///
/// 一致する部署がなくても 204 No Content を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_department(
    State(state): State<Arc<DepartmentState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
    let id = parse_id(&id)?;

    state
        .repository
        .delete(&id)
        .await
        .map_err(CoreError::storage("Failed to delete department"))?;

    Ok(StatusCode::NO_CONTENT)
}
