//! REST API controllers.

pub mod friend_controller;
pub mod health_controller;
pub mod stats_controller;
pub mod user_controller;
