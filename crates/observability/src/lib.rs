//! Tracing and logging (shared setup).

/// Initialize process-wide logging in the given format.
///
/// This is safe to call multiple times; subsequent calls become no-ops and
/// return `false`.
pub fn init(format: LogFormat) -> bool {
    self::tracing::init(format)
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{LogFormat, UnknownLogFormat};
