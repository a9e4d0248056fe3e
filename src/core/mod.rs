//! Core module tree for the SHA-256 engine.
//! Leaves first: constants, schedule, compress, then the incremental state.

pub mod constants;
pub mod schedule;
pub mod compress;
pub mod digest;
pub mod error;
pub mod state;
#[macro_use]
pub mod debug; // gated debug logging (SHA256_DEBUG=1) provides debug_log! macro

pub use self::digest::Digest;
pub use self::error::HashError;
pub use self::state::{sha256, Sha256};
