pub mod geo;
pub mod planner;
pub mod ranking;
pub mod registry;
pub mod route;

pub use crate::domain::model::{Behavior, Child, Coordinates, Delivery, Place, PlaceId, RoutePlan};
pub use crate::domain::ports::{ChildStore, ConfigProvider, PlaceStore};
pub use crate::utils::error::Result;
