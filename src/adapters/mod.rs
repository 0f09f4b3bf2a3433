// Adapters layer: concrete store implementations behind the domain ports.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::{InMemoryStore, StoreState};
