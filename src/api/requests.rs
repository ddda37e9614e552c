//! Maintenance request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        enums::Stage,
        request::{
            CalendarEntry, CompleteRequest, CreateRequest, KanbanBoard, MaintenanceRequest,
            UpdateStage,
        },
    },
};

/// Create response
#[derive(Serialize, ToSchema)]
pub struct CreateResponse {
    /// Status message
    pub message: String,
    /// ID of the new request
    pub id: i32,
}

/// Stage update response
#[derive(Serialize, ToSchema)]
pub struct StageResponse {
    /// Status message
    pub message: String,
    /// The stage that was applied
    pub stage: Stage,
}

/// Completion response
#[derive(Serialize, ToSchema)]
pub struct CompleteResponse {
    /// Status message
    pub message: String,
    /// Hours recorded on the request
    pub duration_hours: Decimal,
}

/// Create a new maintenance request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = CreateResponse),
        (status = 400, description = "Missing field or invalid equipment")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<CreateResponse>)> {
    let id = state.services.requests.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            message: "Request created successfully".to_string(),
            id,
        }),
    ))
}

/// Kanban board grouped by stage
#[utoipa::path(
    get,
    path = "/requests/kanban",
    tag = "requests",
    responses(
        (status = 200, description = "All requests in four stage buckets", body = KanbanBoard)
    )
)]
pub async fn kanban_board(
    State(state): State<crate::AppState>,
) -> AppResult<Json<KanbanBoard>> {
    let board = state.services.requests.kanban().await?;
    Ok(Json(board))
}

/// Calendar of scheduled preventive requests
#[utoipa::path(
    get,
    path = "/requests/calendar",
    tag = "requests",
    responses(
        (status = 200, description = "Scheduled preventive work", body = Vec<CalendarEntry>)
    )
)]
pub async fn calendar_view(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<CalendarEntry>>> {
    let entries = state.services.requests.calendar().await?;
    Ok(Json(entries))
}

/// Move a request to another stage
#[utoipa::path(
    put,
    path = "/requests/{id}/stage",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateStage,
    responses(
        (status = 200, description = "Stage updated", body = StageResponse),
        (status = 400, description = "Missing or invalid stage")
    )
)]
pub async fn update_stage(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateStage>,
) -> AppResult<Json<StageResponse>> {
    let stage = state.services.requests.set_stage(id, request).await?;

    Ok(Json(StageResponse {
        message: "Stage updated".to_string(),
        stage,
    }))
}

/// Complete a request, recording the hours spent
#[utoipa::path(
    put,
    path = "/requests/{id}/complete",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = CompleteRequest,
    responses(
        (status = 200, description = "Request completed", body = CompleteResponse),
        (status = 400, description = "Missing or non-positive duration")
    )
)]
pub async fn complete_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CompleteRequest>,
) -> AppResult<Json<CompleteResponse>> {
    let duration_hours = state.services.requests.complete(id, request).await?;

    Ok(Json(CompleteResponse {
        message: "Request completed".to_string(),
        duration_hours,
    }))
}

/// Requests assigned to a technician
#[utoipa::path(
    get,
    path = "/technicians/{id}/requests",
    tag = "requests",
    params(("id" = i32, Path, description = "Technician user ID")),
    responses(
        (status = 200, description = "Requests assigned to this technician", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn technician_requests(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.requests.for_technician(id).await?;
    Ok(Json(requests))
}
