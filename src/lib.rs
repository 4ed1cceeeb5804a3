pub mod app;
pub mod catalog;
pub mod coach;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod state;
pub mod storage;
pub mod tracker;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_path, JsonFileRepository, MemoryRepository, TrackerRepository};
