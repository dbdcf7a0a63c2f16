use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Bank, BankRecord};
use super::mapper;
use super::repository::BankRepository;
use crate::errors::ServiceError;

/// Bank business service independent of web framework.
/// Orchestrates repository calls and maps rows to domain records.
pub struct BankService<R: BankRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: BankRepository + ?Sized> BankService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a new bank under a freshly generated id.
    ///
    /// # Examples
    /// ```
    /// use service::bank::{Bank, BankService, repository::mock::MockBankRepository};
    /// use std::sync::Arc;
    /// let svc = BankService::new(Arc::new(MockBankRepository::default()));
    /// tokio_test::block_on(svc.create_bank(Bank::new("Bank A", "London"))).unwrap();
    /// let banks = tokio_test::block_on(svc.list_banks()).unwrap();
    /// assert_eq!(banks.len(), 1);
    /// assert_eq!(banks[0].bank.name, "Bank A");
    /// ```
    #[instrument(skip(self, bank), fields(name = %bank.name, location = %bank.location))]
    pub async fn create_bank(&self, bank: Bank) -> Result<(), ServiceError> {
        let entity = mapper::to_new_entity(&bank);
        let id = entity.id.clone();
        self.repo.create(entity).await?;
        info!(bank_id = %id, "bank_created");
        Ok(())
    }

    /// All banks in the order the store returns them.
    pub async fn list_banks(&self) -> Result<Vec<BankRecord>, ServiceError> {
        let rows = self.repo.get_all().await?;
        Ok(rows.into_iter().map(mapper::to_record).collect())
    }

    /// Overwrite name and location. A missing id fails with `NotFound`.
    #[instrument(skip(self, bank), fields(bank_id = %id))]
    pub async fn update_bank(&self, id: &str, bank: Bank) -> Result<BankRecord, ServiceError> {
        let updated = self.repo.update(id, &bank).await?;
        info!(bank_id = %updated.id, "bank_updated");
        Ok(mapper::to_record(updated))
    }

    /// `true` when a row was removed, `false` when the id was unknown.
    #[instrument(skip(self), fields(bank_id = %id))]
    pub async fn delete_bank(&self, id: &str) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(bank_id = %id, "bank_deleted");
        }
        Ok(deleted)
    }

    pub async fn get_bank(&self, id: &str) -> Result<Option<BankRecord>, ServiceError> {
        Ok(self.repo.get_by_id(id).await?.map(mapper::to_record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::repo::SeaOrmBankRepository;
    use crate::bank::repository::mock::MockBankRepository;
    use crate::test_support::get_db;
    use models::bank;

    fn stored(id: &str, name: &str, location: &str) -> bank::Model {
        bank::Model { id: id.into(), name: name.into(), location: location.into() }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() -> anyhow::Result<()> {
        let repo = Arc::new(MockBankRepository::with_rows(vec![stored("existing", "Bank Z", "Oslo")]));
        let svc = BankService::new(repo.clone());

        svc.create_bank(Bank::new("Bank A", "London")).await?;
        svc.create_bank(Bank::new("Bank A", "London")).await?;

        let rows = repo.rows();
        assert_eq!(rows.len(), 3);
        assert_ne!(rows[1].id, rows[2].id);
        assert!(rows[1..].iter().all(|r| r.id != "existing"));
        Ok(())
    }

    #[tokio::test]
    async fn list_preserves_repository_order() -> anyhow::Result<()> {
        let repo = Arc::new(MockBankRepository::with_rows(vec![
            stored("1", "Bank A", "City A"),
            stored("2", "Bank B", "City B"),
        ]));
        let svc = BankService::new(repo);

        let banks = svc.list_banks().await?;
        let ids: Vec<&str> = banks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(banks[1].bank, Bank::new("Bank B", "City B"));
        Ok(())
    }

    #[tokio::test]
    async fn update_propagates_not_found() -> anyhow::Result<()> {
        let svc = BankService::new(Arc::new(MockBankRepository::default()));
        let err = svc.update_bank("1", Bank::new("X", "Y")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Bank not found");
        Ok(())
    }

    #[tokio::test]
    async fn get_and_delete_report_absence_without_error() -> anyhow::Result<()> {
        let repo = Arc::new(MockBankRepository::with_rows(vec![stored("1", "Bank A", "City A")]));
        let svc = BankService::new(repo.clone());

        assert!(svc.get_bank("2").await?.is_none());
        assert!(!svc.delete_bank("2").await?);
        assert_eq!(repo.rows().len(), 1);

        assert!(svc.delete_bank("1").await?);
        assert!(svc.get_bank("1").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn store_failures_surface_as_db_errors() {
        let svc = BankService::new(Arc::new(MockBankRepository::failing("connection refused")));
        let err = svc.list_banks().await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    /// Bank A/London -> Bank B/Paris -> delete -> gone, against SQLite.
    #[tokio::test]
    async fn bank_lifecycle_scenario() -> anyhow::Result<()> {
        let repo: Arc<dyn BankRepository> = Arc::new(SeaOrmBankRepository::new(get_db().await?));
        let svc = BankService::new(repo);

        svc.create_bank(Bank::new("Bank A", "London")).await?;
        let banks = svc.list_banks().await?;
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].bank, Bank::new("Bank A", "London"));
        let id = banks[0].id.clone();

        let fetched = svc.get_bank(&id).await?.expect("bank exists");
        assert_eq!(fetched.bank, Bank::new("Bank A", "London"));

        let updated = svc.update_bank(&id, Bank::new("Bank B", "Paris")).await?;
        assert_eq!(updated, BankRecord { id: id.clone(), bank: Bank::new("Bank B", "Paris") });

        assert!(svc.delete_bank(&id).await?);
        assert!(svc.get_bank(&id).await?.is_none());
        Ok(())
    }
}
