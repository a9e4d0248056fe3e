//! Input sources for the CLI: a named file or standard input, read in fixed chunks.

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(p) => InputSource::File(p),
            None => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::File(p) => p.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::File(p) => Ok(Box::new(open_file(p)?)),
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("opening {}", path.display()))
}

/// Feed `reader` to `sink` in chunks of at most `chunk_size` bytes until EOF.
/// Returns the number of bytes read.
pub fn read_chunks<R, F>(mut reader: R, chunk_size: usize, mut sink: F) -> Result<u64>
where
    R: Read,
    F: FnMut(&[u8]) -> Result<()>,
{
    let chunk_size = chunk_size.max(1);
    let mut buf = Vec::new();
    buf.try_reserve_exact(chunk_size)
        .with_context(|| format!("allocating a {chunk_size}-byte read buffer"))?;
    buf.resize(chunk_size, 0u8);
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("reading input"),
        };
        sink(&buf[..n])?;
        total += n as u64;
    }
    Ok(total)
}
