//! API handlers for GearGuard REST endpoints

pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod stats;
pub mod teams;
pub mod users;
