pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{InMemoryStore, JsonFileStore};
pub use crate::app::report::OutputFormat;
pub use crate::config::Settings;
pub use crate::core::planner::DeliveryService;
pub use crate::domain::model::{Behavior, Child, Coordinates, Delivery, Place, PlaceId, RoutePlan};
pub use crate::utils::error::{PlannerError, Result};
