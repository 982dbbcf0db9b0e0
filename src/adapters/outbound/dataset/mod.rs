/// Dataset adapters standing in for the measures database
mod component_types;
mod dataset;
mod in_memory_database;

pub use component_types::DefaultComponentTypes;
pub use dataset::{Dataset, DatasetLoader};
pub use in_memory_database::InMemoryDatabase;
