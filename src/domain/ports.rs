use crate::domain::model::{Behavior, Child, NewChild, NewPlace, Place, PlaceId};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;

/// Persistence for places. Implementations enforce name uniqueness at write
/// time and list places in creation order.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    async fn create_place(&self, place: NewPlace) -> Result<Place>;
    async fn list_places(&self) -> Result<Vec<Place>>;
    async fn find_place(&self, id: &PlaceId) -> Result<Option<Place>>;
    async fn find_place_by_name(&self, name: &str) -> Result<Option<Place>>;

    async fn resolve_place(&self, id: &PlaceId) -> Result<Place> {
        self.find_place(id)
            .await?
            .ok_or_else(|| PlannerError::UnresolvedReference {
                place_id: id.to_string(),
            })
    }
}

/// Persistence for children. Implementations enforce name uniqueness at
/// write time and list children in creation order.
#[async_trait]
pub trait ChildStore: Send + Sync {
    async fn create_child(&self, child: NewChild) -> Result<Child>;
    async fn list_children(&self, behavior: Option<Behavior>) -> Result<Vec<Child>>;
    async fn find_child_by_name(&self, name: &str) -> Result<Option<Child>>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;
    fn log_level(&self) -> &str;
    fn json_logs(&self) -> bool;
}
