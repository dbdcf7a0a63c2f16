use async_trait::async_trait;
use models::bank;

use super::domain::Bank;
use crate::errors::ServiceError;

/// Repository abstraction over the `banks` table.
///
/// Only `update` treats a missing id as an error; `get_by_id` and `delete`
/// report absence through `None` / `false`.
#[async_trait]
pub trait BankRepository: Send + Sync {
    async fn create(&self, entity: bank::Model) -> Result<(), ServiceError>;
    async fn get_all(&self) -> Result<Vec<bank::Model>, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<bank::Model>, ServiceError>;
    async fn update(&self, id: &str, fields: &Bank) -> Result<bank::Model, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBankRepository {
        rows: Mutex<Vec<bank::Model>>, // insertion order
        failure: Mutex<Option<String>>,
    }

    impl MockBankRepository {
        /// Repository whose every call fails with a database error.
        pub fn failing(message: &str) -> Self {
            Self { rows: Mutex::default(), failure: Mutex::new(Some(message.to_string())) }
        }

        pub fn with_rows(rows: Vec<bank::Model>) -> Self {
            Self { rows: Mutex::new(rows), failure: Mutex::default() }
        }

        pub fn rows(&self) -> Vec<bank::Model> {
            self.rows.lock().unwrap().clone()
        }

        fn check(&self) -> Result<(), ServiceError> {
            match self.failure.lock().unwrap().as_ref() {
                Some(msg) => Err(ServiceError::Db(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl BankRepository for MockBankRepository {
        async fn create(&self, entity: bank::Model) -> Result<(), ServiceError> {
            self.check()?;
            bank::validate_name(&entity.name)?;
            bank::validate_location(&entity.location)?;
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|r| r.id == entity.id) {
                return Err(ServiceError::Db(format!("duplicate key {}", entity.id)));
            }
            rows.push(entity);
            Ok(())
        }

        async fn get_all(&self) -> Result<Vec<bank::Model>, ServiceError> {
            self.check()?;
            Ok(self.rows())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<bank::Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
        }

        async fn update(&self, id: &str, fields: &Bank) -> Result<bank::Model, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ServiceError::not_found("Bank"))?;
            bank::validate_name(&fields.name)?;
            bank::validate_location(&fields.location)?;
            row.name = fields.name.clone();
            row.location = fields.location.clone();
            Ok(row.clone())
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            Ok(rows.len() < before)
        }
    }
}
