//! Persistence model for the bank service: the `banks` entity, connection
//! bootstrap and model-level errors.

pub mod errors;
pub mod db;
pub mod bank;

#[cfg(test)]
mod tests;
