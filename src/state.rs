use crate::models::TrackerData;
use crate::storage::TrackerRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TrackerRepository>,
    pub data: Arc<Mutex<TrackerData>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn TrackerRepository>, data: TrackerData) -> Self {
        Self {
            repository,
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Loads the current document from the repository and wraps it.
    pub async fn load(repository: Arc<dyn TrackerRepository>) -> Self {
        let data = repository.load().await;
        Self::new(repository, data)
    }
}
