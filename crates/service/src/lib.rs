//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access through `BankRepository`.
//! - Reuses validation and entity definitions in `models` crate.
//! - Keeps one error type for every layer below the HTTP boundary.

pub mod errors;
pub mod bank;
#[cfg(test)]
pub mod test_support;
