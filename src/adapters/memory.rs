use crate::domain::model::{Behavior, Child, ChildId, NewChild, NewPlace, Place, PlaceId};
use crate::domain::ports::{ChildStore, PlaceStore};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Both collections in creation order. This is also the on-disk document of
/// the JSON file store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl StoreState {
    pub fn insert_place(&mut self, new_place: NewPlace) -> Result<Place> {
        if self.places.iter().any(|p| p.name == new_place.name) {
            return Err(PlannerError::DuplicateName {
                entity: "place".to_string(),
                name: new_place.name,
            });
        }

        let place = Place {
            id: PlaceId::generate(),
            name: new_place.name,
            coordinates: new_place.coordinates,
        };
        self.places.push(place.clone());
        self.updated_at = Some(Utc::now());
        Ok(place)
    }

    pub fn insert_child(&mut self, new_child: NewChild) -> Result<Child> {
        if self.children.iter().any(|c| c.name == new_child.name) {
            return Err(PlannerError::DuplicateName {
                entity: "child".to_string(),
                name: new_child.name,
            });
        }

        let child = Child {
            id: ChildId::generate(),
            name: new_child.name,
            behavior: new_child.behavior,
            place_id: new_child.place_id,
        };
        self.children.push(child.clone());
        self.updated_at = Some(Utc::now());
        Ok(child)
    }

    pub fn find_place(&self, id: &PlaceId) -> Option<Place> {
        self.places.iter().find(|p| &p.id == id).cloned()
    }

    pub fn find_place_by_name(&self, name: &str) -> Option<Place> {
        self.places.iter().find(|p| p.name == name).cloned()
    }

    pub fn find_child_by_name(&self, name: &str) -> Option<Child> {
        self.children.iter().find(|c| c.name == name).cloned()
    }

    pub fn children_matching(&self, behavior: Option<Behavior>) -> Vec<Child> {
        self.children
            .iter()
            .filter(|c| behavior.map_or(true, |b| c.behavior == b))
            .cloned()
            .collect()
    }
}

/// Process-local store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl PlaceStore for InMemoryStore {
    async fn create_place(&self, place: NewPlace) -> Result<Place> {
        self.state.write().await.insert_place(place)
    }

    async fn list_places(&self) -> Result<Vec<Place>> {
        Ok(self.state.read().await.places.clone())
    }

    async fn find_place(&self, id: &PlaceId) -> Result<Option<Place>> {
        Ok(self.state.read().await.find_place(id))
    }

    async fn find_place_by_name(&self, name: &str) -> Result<Option<Place>> {
        Ok(self.state.read().await.find_place_by_name(name))
    }
}

#[async_trait]
impl ChildStore for InMemoryStore {
    async fn create_child(&self, child: NewChild) -> Result<Child> {
        self.state.write().await.insert_child(child)
    }

    async fn list_children(&self, behavior: Option<Behavior>) -> Result<Vec<Child>> {
        Ok(self.state.read().await.children_matching(behavior))
    }

    async fn find_child_by_name(&self, name: &str) -> Result<Option<Child>> {
        Ok(self.state.read().await.find_child_by_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Coordinates;

    fn new_place(name: &str) -> NewPlace {
        NewPlace {
            name: name.to_string(),
            coordinates: Coordinates::new(1.0, 2.0),
        }
    }

    #[test]
    fn test_duplicate_place_name() {
        tokio_test::block_on(async {
            let store = InMemoryStore::new();
            store.create_place(new_place("Quito")).await.unwrap();

            let err = store.create_place(new_place("Quito")).await.unwrap_err();
            assert!(matches!(err, PlannerError::DuplicateName { ref entity, .. } if entity == "place"));
            assert_eq!(store.list_places().await.unwrap().len(), 1);
        });
    }

    #[tokio::test]
    async fn test_list_children_filter_and_order() {
        let store = InMemoryStore::new();
        let place = store.create_place(new_place("Quito")).await.unwrap();

        for (name, behavior) in [("a", Behavior::Good), ("b", Behavior::Bad), ("c", Behavior::Good)] {
            store
                .create_child(NewChild {
                    name: name.to_string(),
                    behavior,
                    place_id: place.id.clone(),
                })
                .await
                .unwrap();
        }

        let good: Vec<String> = store
            .list_children(Some(Behavior::Good))
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(good, vec!["a", "c"]);
        assert_eq!(store.list_children(None).await.unwrap().len(), 3);
        assert_eq!(store.list_children(Some(Behavior::Bad)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_place() {
        let store = InMemoryStore::new();
        let place = store.create_place(new_place("Oslo")).await.unwrap();

        assert_eq!(store.resolve_place(&place.id).await.unwrap().name, "Oslo");
        assert!(matches!(
            store.resolve_place(&PlaceId::from("missing")).await,
            Err(PlannerError::UnresolvedReference { .. })
        ));
        assert!(store.find_place_by_name("Oslo").await.unwrap().is_some());
    }
}
