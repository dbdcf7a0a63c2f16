//! Shared pieces used by the server, the client and the binaries:
//! wire message bodies and logging setup.

pub mod types;
pub mod utils;
