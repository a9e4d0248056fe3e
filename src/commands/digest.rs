use anyhow::{Context, Result};
use std::io::{Read, Write};

use crate::config::Config;
use crate::core::{Digest, Sha256};
use crate::debug_log;
use crate::io::input::{read_chunks, InputSource};

/// Hash everything `reader` yields, `chunk_size` bytes per absorb.
pub fn digest_reader<R: Read>(reader: R, chunk_size: usize) -> Result<Digest> {
    let mut state = Sha256::new();
    let total = read_chunks(reader, chunk_size, |chunk| {
        state.absorb(chunk).context("absorbing input")?;
        Ok(())
    })?;
    debug_log!("absorbed {} bytes", total);
    let digest = state.finalize().context("finalizing digest")?;
    Ok(digest)
}

/// Hash `source` and write the hex digest plus a newline to `out`.
pub fn main_with_opts<W: Write>(source: &InputSource, cfg: &Config, out: &mut W) -> Result<()> {
    debug_log!("input: {} (chunk size {})", source.describe(), cfg.chunk_size);
    let reader = source.open()?;
    let digest = digest_reader(reader, cfg.chunk_size)
        .with_context(|| format!("hashing {}", source.describe()))?;
    writeln!(out, "{}", digest).context("writing digest")?;
    out.flush().context("writing digest")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn digest_is_independent_of_chunk_size() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let expected = digest_reader(&data[..], 64 * 1024).unwrap();
        for chunk_size in [1, 3, 63, 64, 65, 1000] {
            assert_eq!(digest_reader(&data[..], chunk_size).unwrap(), expected);
        }
    }

    #[test]
    fn writes_hex_line_for_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("abc.txt");
        fs::write(&p, b"abc").unwrap();
        let mut out = Vec::new();
        main_with_opts(&InputSource::File(p), &Config::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
        );
    }
}
