//! System-wide constants for the OpenLot auction engine.

/// Maximum notices retained per auction before evicting the oldest.
pub const DEFAULT_NOTICE_CAPACITY: usize = 1024;

/// Default auction window length in seconds (used by test helpers).
pub const DEFAULT_DURATION_SECS: u64 = 3600;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenLot";
