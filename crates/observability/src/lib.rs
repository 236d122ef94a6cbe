//! Tracing/logging setup shared by storefront binaries.

/// Initialize process-wide logging in the given format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::LogFormat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_root_init_accepts_either_format() {
        init(LogFormat::Json);
        init(LogFormat::Text);
    }
}
