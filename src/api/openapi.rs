//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, requests, stats, teams, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "1.0.0",
        description = "Maintenance work-order tracking REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Requests
        requests::create_request,
        requests::kanban_board,
        requests::calendar_view,
        requests::update_stage,
        requests::complete_request,
        requests::technician_requests,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::equipment_requests,
        // Users
        users::list_users,
        users::get_user,
        // Teams
        teams::list_teams,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Requests
            crate::models::request::MaintenanceRequest,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateStage,
            crate::models::request::CompleteRequest,
            crate::models::request::KanbanCard,
            crate::models::request::KanbanBoard,
            crate::models::request::CalendarEntry,
            crate::models::request::RequestStats,
            crate::models::enums::Stage,
            crate::models::enums::RequestType,
            requests::CreateResponse,
            requests::StageResponse,
            requests::CompleteResponse,
            // Equipment
            crate::models::equipment::Equipment,
            // Users
            crate::models::user::User,
            // Teams
            crate::models::team::MaintenanceTeam,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "requests", description = "Maintenance request lifecycle"),
        (name = "equipment", description = "Equipment directory"),
        (name = "users", description = "User directory"),
        (name = "teams", description = "Maintenance teams"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
