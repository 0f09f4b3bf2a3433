use crate::core::ranking::rank_places;
use crate::core::registry;
use crate::core::route::{plan_route, route_distance};
use crate::domain::model::{Behavior, Child, Delivery, NewChild, NewPlace, Place, PlaceId, RoutePlan};
use crate::domain::ports::{ChildStore, PlaceStore};
use crate::utils::error::Result;
use serde_json::Value;

/// Entry point for every request-level operation. Holds the store handles it
/// reads from; each call works on a fresh snapshot and keeps nothing between
/// calls.
pub struct DeliveryService<C: ChildStore, P: PlaceStore> {
    children: C,
    places: P,
}

impl<C: ChildStore, P: PlaceStore> DeliveryService<C, P> {
    pub fn new(children: C, places: P) -> Self {
        Self { children, places }
    }

    pub fn child_store(&self) -> &C {
        &self.children
    }

    pub fn place_store(&self) -> &P {
        &self.places
    }

    pub async fn create_place(&self, payload: &Value) -> Result<Place> {
        registry::create_place(&self.places, payload)
            .await
            .inspect_err(|e| tracing::warn!("Place rejected: {}", e))
    }

    pub async fn add_place(&self, new_place: NewPlace) -> Result<Place> {
        registry::create_place_from(&self.places, new_place)
            .await
            .inspect_err(|e| tracing::warn!("Place rejected: {}", e))
    }

    pub async fn create_child(&self, payload: &Value) -> Result<Child> {
        registry::create_child(&self.children, &self.places, payload)
            .await
            .inspect_err(|e| tracing::warn!("Child rejected: {}", e))
    }

    pub async fn add_child(&self, new_child: NewChild) -> Result<Child> {
        registry::create_child_from(&self.children, &self.places, new_child)
            .await
            .inspect_err(|e| tracing::warn!("Child rejected: {}", e))
    }

    pub async fn list_places(&self) -> Result<Vec<Place>> {
        self.places.list_places().await
    }

    pub async fn find_place(&self, id: &PlaceId) -> Result<Option<Place>> {
        self.places.find_place(id).await
    }

    pub async fn find_place_by_name(&self, name: &str) -> Result<Option<Place>> {
        self.places.find_place_by_name(name).await
    }

    pub async fn list_children(&self) -> Result<Vec<Child>> {
        self.children.list_children(None).await
    }

    pub async fn children_by_behavior(&self, behavior: Behavior) -> Result<Vec<Child>> {
        self.children.list_children(Some(behavior)).await
    }

    /// Places ranked by good-child count, recomputed from the live stores.
    pub async fn deliveries(&self) -> Result<Vec<Delivery>> {
        let places = self.places.list_places().await?;
        let children = self.children.list_children(None).await?;
        tracing::debug!(
            "Ranking {} places against {} children",
            places.len(),
            children.len()
        );
        Ok(rank_places(&places, &children))
    }

    pub async fn route_distance(&self) -> Result<f64> {
        let ranked = self.deliveries().await?;
        let total = route_distance(&ranked);
        tracing::debug!("Route over {} stops: {:.3} km", ranked.len(), total);
        Ok(total)
    }

    pub async fn route_plan(&self) -> Result<RoutePlan> {
        let ranked = self.deliveries().await?;
        Ok(plan_route(&ranked))
    }
}
