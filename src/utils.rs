use std::env;
use std::path::Path;

/// Absolute, forward-slashed form of `source_path` for diagnostics.
///
/// Paths that do not exist (the usual reason we are printing one) are still
/// made absolute; only the symlink/`..` resolution is skipped.
pub fn display_path(source_path: &Path) -> String {
    let absolute = if source_path.is_absolute() {
        source_path.to_path_buf()
    } else {
        env::current_dir().unwrap_or_default().join(source_path)
    };

    // dunce drops the \\?\ prefix std::fs::canonicalize adds on Windows
    let canonical = dunce::canonicalize(&absolute).unwrap_or(absolute);

    canonical.to_string_lossy().replace('\\', "/")
}
