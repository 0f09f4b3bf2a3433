use crate::adapters::memory::StoreState;
use crate::domain::model::{Behavior, Child, NewChild, NewPlace, Place, PlaceId};
use crate::domain::ports::{ChildStore, PlaceStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Keeps places and children in one JSON document on disk. The file is
/// rewritten after every successful create; a missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    state: Arc<Mutex<StoreState>>,
}

impl JsonFileStore {
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let state = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => StoreState::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, starting empty", path.display());
                StoreState::default()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            "Loaded {} places and {} children from {}",
            state.places.len(),
            state.children.len(),
            path.display()
        );

        Ok(Self {
            path,
            state: Arc::new(Mutex::new(state)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, state: &StoreState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &data).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), self.path.display());
        Ok(())
    }

    /// Applies `op` to a copy of the state and only keeps it once it is on disk.
    async fn write_with<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut StoreState) -> Result<T> + Send,
        T: Send,
    {
        let mut guard = self.state.lock().await;
        let mut next = guard.clone();
        let value = op(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(value)
    }
}

#[async_trait]
impl PlaceStore for JsonFileStore {
    async fn create_place(&self, place: NewPlace) -> Result<Place> {
        self.write_with(|state| state.insert_place(place)).await
    }

    async fn list_places(&self) -> Result<Vec<Place>> {
        Ok(self.state.lock().await.places.clone())
    }

    async fn find_place(&self, id: &PlaceId) -> Result<Option<Place>> {
        Ok(self.state.lock().await.find_place(id))
    }

    async fn find_place_by_name(&self, name: &str) -> Result<Option<Place>> {
        Ok(self.state.lock().await.find_place_by_name(name))
    }
}

#[async_trait]
impl ChildStore for JsonFileStore {
    async fn create_child(&self, child: NewChild) -> Result<Child> {
        self.write_with(|state| state.insert_child(child)).await
    }

    async fn list_children(&self, behavior: Option<Behavior>) -> Result<Vec<Child>> {
        Ok(self.state.lock().await.children_matching(behavior))
    }

    async fn find_child_by_name(&self, name: &str) -> Result<Option<Child>> {
        Ok(self.state.lock().await.find_child_by_name(name))
    }
}
