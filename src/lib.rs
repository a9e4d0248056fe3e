//! SHA-256 (FIPS 180-4) hashing engine with a small file/stdin CLI on top.
//!
//! The engine lives in [`core`]; `cli`, `config`, `commands` and `io` are the
//! glue used by the `sha256` binary.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{sha256, Digest, HashError, Sha256};
