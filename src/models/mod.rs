//! Data models for GearGuard

pub mod enums;
pub mod equipment;
pub mod request;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use enums::{RequestType, Stage};
pub use equipment::Equipment;
pub use request::{
    CalendarEntry, CompleteRequest, CreateRequest, KanbanBoard, KanbanCard, MaintenanceRequest,
    RequestStats, UpdateStage,
};
pub use team::MaintenanceTeam;
pub use user::{User, UserQuery};
