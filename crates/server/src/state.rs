use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::bank::{repo::SeaOrmBankRepository, BankRepository, BankService};

/// Shared handler state. Built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub banks: Arc<BankService<dyn BankRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn BankRepository>) -> Self {
        Self { banks: Arc::new(BankService::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmBankRepository::new(db)))
    }
}
