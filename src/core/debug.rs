//! Lightweight debug logging gated by SHA256_DEBUG=1 or `debug = true` in config.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

static FROM_ENV: OnceLock<bool> = OnceLock::new();
static FORCED: AtomicBool = AtomicBool::new(false);

pub fn is_enabled() -> bool {
    FORCED.load(Ordering::Relaxed)
        || *FROM_ENV.get_or_init(|| std::env::var("SHA256_DEBUG").ok().as_deref() == Some("1"))
}

pub fn enable() { FORCED.store(true, Ordering::Relaxed); }

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[sha256] {}", format_args!($($arg)*)); }
    }};
}
