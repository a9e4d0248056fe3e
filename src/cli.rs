use clap::Parser;
use std::path::PathBuf;

use crate::core::HashError;

/// I/O or config failure.
pub const EXIT_IO: u8 = 1;
/// Usage error; clap exits with this itself.
pub const EXIT_USAGE: u8 = 2;
/// The hash engine rejected the input.
pub const EXIT_HASH: u8 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "sha256",
    about = "Print the SHA-256 digest of FILE, or of standard input when no FILE is given",
    version
)]
pub struct Sha256Cli {
    /// Path to config (TOML); default: ~/.sha256/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File to hash; reads standard input when omitted
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Process exit status for a failed run.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.chain().any(|c| c.is::<HashError>()) {
        EXIT_HASH
    } else {
        EXIT_IO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Sha256Cli::command().debug_assert();
    }

    #[test]
    fn zero_or_one_positional() {
        let none = Sha256Cli::try_parse_from(["sha256"]).unwrap();
        assert!(none.input.is_none());
        let one = Sha256Cli::try_parse_from(["sha256", "a.bin"]).unwrap();
        assert_eq!(one.input, Some(PathBuf::from("a.bin")));
    }

    #[test]
    fn two_positionals_is_a_usage_error() {
        let err = Sha256Cli::try_parse_from(["sha256", "a", "b"]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE as i32);
    }

    #[test]
    fn hash_errors_map_to_their_own_status() {
        let bare = anyhow::Error::new(HashError::Finalized);
        assert_eq!(exit_code_for(&bare), EXIT_HASH);

        let wrapped = Err::<(), _>(HashError::Finalized)
            .context("finalizing digest")
            .context("hashing <stdin>")
            .unwrap_err();
        assert_eq!(exit_code_for(&wrapped), EXIT_HASH);

        let overflow = anyhow::Error::new(HashError::length_overflow(u64::MAX / 8, 1)).context("absorbing input");
        assert_eq!(exit_code_for(&overflow), EXIT_HASH);
    }

    #[test]
    fn other_errors_map_to_io_status() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Err::<(), _>(io).context("opening nope.bin").unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_IO);
        assert_eq!(exit_code_for(&anyhow::anyhow!("chunk_size must be greater than zero")), EXIT_IO);
    }
}
