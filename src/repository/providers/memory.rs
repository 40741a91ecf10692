use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Identified;
use crate::repository::{Repository, RepositoryError, Result};

/// Process-local repository. Contents reset on restart.
#[derive(Debug, Default)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T>
where
    T: Identified,
{
    /// Seed with `records`. Later duplicates of an id are dropped.
    pub fn with_records(records: Vec<T>) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().all(|r| r.id() != record.id()) {
                unique.push(record);
            } else {
                tracing::warn!(id = %record.id(), "Dropping seed record with duplicate id");
            }
        }
        Self {
            records: RwLock::new(unique),
        }
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Identified + Clone + Send + Sync + std::fmt::Debug + 'static,
{
    async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    async fn add(&self, record: T) -> Result<()> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(RepositoryError::DuplicateId(record.id().to_string()));
        }
        records.push(record);
        Ok(())
    }

    async fn update(&self, record: T) -> Result<()> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| RepositoryError::NotFound(record.id().to_string()))?;
        *slot = record;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<T> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        Ok(records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Client, mock_clients};

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            last_visit: "2024-05-01".to_string(),
        }
    }

    #[tokio::test]
    async fn seeded_with_mock_clients() {
        let repo = InMemoryRepository::with_records(mock_clients());
        assert_eq!(repo.count().await, 2);
        assert_eq!(repo.list().await[0].name, "John Doe");
    }

    #[tokio::test]
    async fn add_rejects_duplicate_id() {
        let repo = InMemoryRepository::with_records(mock_clients());
        let err = repo.add(client("1", "Other")).await.unwrap_err();
        assert_eq!(err, RepositoryError::DuplicateId("1".to_string()));
        assert_eq!(repo.count().await, 2);

        repo.add(client("3", "Ada")).await.unwrap();
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn update_replaces_matching_record() {
        let repo = InMemoryRepository::with_records(mock_clients());
        repo.update(client("2", "Janet")).await.unwrap();
        let list = repo.list().await;
        assert_eq!(list[1].name, "Janet");

        let err = repo.update(client("9", "Nobody")).await.unwrap_err();
        assert_eq!(err, RepositoryError::NotFound("9".to_string()));
    }

    #[tokio::test]
    async fn remove_returns_record() {
        let repo = InMemoryRepository::with_records(mock_clients());
        let removed = repo.remove("1").await.unwrap();
        assert_eq!(removed.name, "John Doe");
        assert_eq!(repo.count().await, 1);
        assert!(repo.remove("1").await.is_err());
    }

    #[test]
    fn seed_drops_duplicate_ids() {
        let repo = InMemoryRepository::with_records(vec![client("1", "A"), client("1", "B")]);
        assert_eq!(repo.records.try_read().unwrap().len(), 1);
    }
}
