use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models::{Auto, UpdateAuto};
use serde::Deserialize;
use service::errors::ServiceError;
use tracing::{debug, info};

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AutosQuery {
    /// Exact color, case-insensitive
    pub color: Option<String>,
    /// Exact make, case-insensitive
    pub make: Option<String>,
}

// 空字符串参数视为未传
fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[utoipa::path(
    get, path = "/api/autos", tag = "autos",
    params(AutosQuery),
    responses(
        (status = 200, description = "Matching autos", body = crate::openapi::AutosListDoc),
        (status = 204, description = "No autos match"),
        (status = 400, description = "Invalid Query")
    )
)]
/// 列出车辆，按 color/make 过滤
pub async fn list_autos(
    State(state): State<AppState>,
    query: Result<Query<AutosQuery>, QueryRejection>,
) -> Result<Response, JsonApiError> {
    let Query(q) = query.map_err(|e| JsonApiError::bad_request("Invalid Query", e.body_text()))?;
    let svc = &state.autos;
    let list = match (present(&q.color), present(&q.make)) {
        (None, None) => svc.get_all_autos().await,
        (Some(color), Some(make)) => svc.get_all_autos_filtered(color, make).await,
        (Some(color), None) => svc.get_all_autos_by_color(color).await,
        (None, Some(make)) => svc.get_all_autos_by_make(make).await,
    }?;
    debug!(count = list.len(), "list autos");
    if list.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(list).into_response())
}

#[utoipa::path(
    post, path = "/api/autos", tag = "autos",
    request_body = crate::openapi::AutoDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AutoDoc),
        (status = 400, description = "Invalid Auto")
    )
)]
/// 创建车辆记录；请求体解析失败同样返回 400
pub async fn add_auto(
    State(state): State<AppState>,
    payload: Result<Json<Auto>, JsonRejection>,
) -> Result<Json<Auto>, JsonApiError> {
    let Json(auto) = payload.map_err(|e| JsonApiError::bad_request("Invalid Auto", e.body_text()))?;
    let created = state.autos.add_auto(auto).await?;
    info!(vin = %created.vin, "auto added");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/autos/{vin}", tag = "autos",
    params(("vin" = String, Path, description = "Vehicle identification number")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AutoDoc),
        (status = 204, description = "No auto with this VIN")
    )
)]
/// 按 VIN 获取车辆
pub async fn get_auto(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Response, JsonApiError> {
    match state.autos.get_auto(&vin).await? {
        Some(auto) => Ok(Json(auto).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[utoipa::path(
    patch, path = "/api/autos/{vin}", tag = "autos",
    params(("vin" = String, Path, description = "Vehicle identification number")),
    request_body = crate::openapi::UpdateAutoDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AutoDoc),
        (status = 204, description = "No auto with this VIN"),
        (status = 400, description = "Invalid Update")
    )
)]
/// 部分更新颜色/车主
pub async fn update_auto(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    payload: Result<Json<UpdateAuto>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let Json(update) = payload.map_err(|e| JsonApiError::bad_request("Invalid Update", e.body_text()))?;
    let updated = state
        .autos
        .update_auto(&vin, update.color.as_deref(), update.owner.as_deref())
        .await?;
    match updated {
        Some(auto) => {
            info!(vin = %auto.vin, "auto updated");
            Ok(Json(auto).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[utoipa::path(
    delete, path = "/api/autos/{vin}", tag = "autos",
    params(("vin" = String, Path, description = "Vehicle identification number")),
    responses(
        (status = 202, description = "Deleted"),
        (status = 204, description = "No auto with this VIN")
    )
)]
/// 删除车辆；不存在时返回 204
pub async fn delete_auto(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    match state.autos.delete_auto(&vin).await {
        Ok(()) => {
            info!(vin = %vin, "auto deleted");
            Ok(StatusCode::ACCEPTED)
        }
        Err(ServiceError::AutoNotFound(_)) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into()),
    }
}
