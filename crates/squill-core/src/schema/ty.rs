/// Canonical column type names. Column types are free-form strings so a
/// caller can pass backend-specific spellings, but everything the
/// adapters report back is normalized onto this vocabulary.
pub const INTEGER: &str = "INTEGER";
pub const VARCHAR: &str = "VARCHAR";
pub const CHAR: &str = "CHAR";
pub const BOOL: &str = "BOOL";

/// Maps a driver-reported type name onto the canonical vocabulary.
/// Unknown names fall back to `VARCHAR`.
pub fn normalize_column_type(raw: &str) -> &'static str {
    match raw.to_ascii_uppercase().as_str() {
        "INT" | "INTEGER" => INTEGER,
        "VARCHAR" => VARCHAR,
        "CHAR" => CHAR,
        "BOOL" | "BOOLEAN" => BOOL,
        _ => VARCHAR,
    }
}
