//! # Core Service アプリケーション構築
//!
//! State の受け取りとルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{
    DepartmentState,
    EmployeeState,
    ReadinessState,
    create_department,
    create_employee,
    delete_department,
    delete_employee,
    get_department,
    get_employee,
    health_check,
    list_departments,
    list_employees,
    readiness_check,
    update_department,
    update_employee,
};

/// 社員・部署リソースのルーターを構築する
///
/// ヘルスチェックとミドルウェアを含まない。ハンドラテストでも使用する。
pub fn resource_routes(
    employee_state: Arc<EmployeeState>,
    department_state: Arc<DepartmentState>,
) -> Router {
    Router::new()
        // 社員 API
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .with_state(employee_state)
        // 部署 API
        .route(
            "/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .with_state(department_state)
}

/// ルーター全体を構築する
///
/// リソース API にヘルスチェックを加え、リクエストログ用の `TraceLayer` を被せる。
pub fn build_app(
    employee_state: Arc<EmployeeState>,
    department_state: Arc<DepartmentState>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(resource_routes(employee_state, department_state))
        .layer(TraceLayer::new_for_http())
}
