//! Bank module: domain model, entity mapping, repository and service.

pub mod domain;
pub mod mapper;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Bank, BankRecord};
pub use repository::BankRepository;
pub use service::BankService;
