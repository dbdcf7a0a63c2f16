use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::debug;

use models::bank::{self, Entity as BankEntity};

use crate::bank::domain::Bank;
use crate::bank::repository::BankRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmBankRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBankRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl BankRepository for SeaOrmBankRepository {
    async fn create(&self, entity: bank::Model) -> Result<(), ServiceError> {
        let created = bank::insert(&self.db, entity).await?;
        debug!(bank_id = %created.id, "bank row inserted");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<bank::Model>, ServiceError> {
        let rows = BankEntity::find().all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<bank::Model>, ServiceError> {
        let found = BankEntity::find_by_id(id.to_string()).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn update(&self, id: &str, fields: &Bank) -> Result<bank::Model, ServiceError> {
        let current = BankEntity::find_by_id(id.to_string()).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Err(ServiceError::not_found("Bank")); };
        let updated = bank::overwrite(&self.db, existing, &fields.name, &fields.location).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let res = BankEntity::delete_by_id(id.to_string()).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::mapper;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn bank_crud_repository() -> Result<(), anyhow::Error> {
        let repo = SeaOrmBankRepository::new(get_db().await?);

        let a = mapper::to_new_entity(&Bank::new("Bank A", "London"));
        let b = mapper::to_new_entity(&Bank::new("Bank C", "Berlin"));
        repo.create(a.clone()).await?;
        repo.create(b.clone()).await?;

        let all = repo.get_all().await?;
        assert_eq!(all.len(), 2);
        assert!(all.contains(&a) && all.contains(&b));

        let found = repo.get_by_id(&a.id).await?.unwrap();
        assert_eq!(found, a);

        let updated = repo.update(&a.id, &Bank::new("Bank B", "Paris")).await?;
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "Bank B");
        assert_eq!(updated.location, "Paris");

        assert!(repo.delete(&a.id).await?);
        assert!(repo.get_by_id(&a.id).await?.is_none());
        assert!(!repo.delete(&a.id).await?);

        let remaining = repo.get_all().await?;
        assert_eq!(remaining, vec![b]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_keep_their_signals() -> Result<(), anyhow::Error> {
        let repo = SeaOrmBankRepository::new(get_db().await?);

        assert!(repo.get_by_id("no-such-id").await?.is_none());
        assert!(!repo.delete("no-such-id").await?);

        let err = repo.update("no-such-id", &Bank::new("X", "Y")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Bank not found");
        Ok(())
    }

    #[tokio::test]
    async fn store_rejects_invalid_rows() -> Result<(), anyhow::Error> {
        let repo = SeaOrmBankRepository::new(get_db().await?);

        let blank = mapper::to_new_entity(&Bank::new("", "London"));
        let err = repo.create(blank).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(repo.get_all().await?.is_empty());
        Ok(())
    }
}
