use crate::errors::AppError;
use crate::models::TrackerData;
use async_trait::async_trait;
use std::{env, path::Path, path::PathBuf};
use tokio::{fs, sync::Mutex};
use tracing::error;

/// Whole-document persistence for the progress tracker. There are no partial
/// updates: `save` always receives the complete collection.
#[async_trait]
pub trait TrackerRepository: Send + Sync {
    async fn load(&self) -> TrackerData;
    async fn save(&self, data: &TrackerData) -> Result<(), AppError>;
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/tracker.json"))
}

pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TrackerRepository for JsonFileRepository {
    async fn load(&self) -> TrackerData {
        load_data(&self.path).await
    }

    async fn save(&self, data: &TrackerData) -> Result<(), AppError> {
        persist_data(&self.path, data).await
    }
}

pub async fn load_data(path: &Path) -> TrackerData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                TrackerData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => TrackerData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            TrackerData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &TrackerData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await.map_err(|err| {
        error!("failed to write data file {}: {err}", path.display());
        AppError::internal(err)
    })?;
    Ok(())
}

#[derive(Default)]
pub struct MemoryRepository {
    data: Mutex<TrackerData>,
}

impl MemoryRepository {
    pub fn with_data(data: TrackerData) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }
}

#[async_trait]
impl TrackerRepository for MemoryRepository {
    async fn load(&self) -> TrackerData {
        self.data.lock().await.clone()
    }

    async fn save(&self, data: &TrackerData) -> Result<(), AppError> {
        *self.data.lock().await = data.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, GoalCategory};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn temp_path(tag: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("fitcoach_{tag}_{}_{}.json", std::process::id(), Uuid::new_v4()));
        path
    }

    fn sample() -> TrackerData {
        TrackerData {
            entries: Vec::new(),
            goals: vec![Goal {
                id: Uuid::new_v4(),
                title: "Run 10k".to_string(),
                target: 10.0,
                current: 4.0,
                unit: "km".to_string(),
                deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                category: GoalCategory::Endurance,
            }],
        }
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let repo = JsonFileRepository::new(temp_path("missing"));
        assert_eq!(repo.load().await, TrackerData::default());
    }

    #[tokio::test]
    async fn saved_document_loads_back() {
        let path = temp_path("saved");
        let repo = JsonFileRepository::new(path.clone());
        let data = sample();

        repo.save(&data).await.unwrap();
        assert_eq!(repo.load().await, data);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, b"{ not json").unwrap();
        let repo = JsonFileRepository::new(path.clone());

        assert_eq!(repo.load().await, TrackerData::default());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn memory_repository_keeps_last_save() {
        let repo = MemoryRepository::default();
        let data = sample();
        repo.save(&data).await.unwrap();
        assert_eq!(repo.load().await, data);
    }
}
