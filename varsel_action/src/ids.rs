/// Varsel action: Identifier Formats
///
/// A varselId is either a UUID (8-4-4-4-12 hex, any case) or a ULID
/// (26 Crockford base32 characters, first character 0-7).

use std::sync::LazyLock;

use regex::Regex;

const BASE_16: &str = "[0-9a-fA-F]";
const BASE_32_ULID: &str = "[0-9ABCDEFGHJKMNPQRSTVWXYZabcdefghjkmnpqrstvwxyz]";

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^{BASE_16}{{8}}-{BASE_16}{{4}}-{BASE_16}{{4}}-{BASE_16}{{4}}-{BASE_16}{{12}}$"
    ))
    .expect("valid regex")
});

static ULID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^[0-7]{BASE_32_ULID}{{25}}$")).expect("valid regex"));

/// True if `id` has UUID shape.
pub fn is_uuid(id: &str) -> bool {
    UUID_PATTERN.is_match(id)
}

/// True if `id` has ULID shape.
pub fn is_ulid(id: &str) -> bool {
    ULID_PATTERN.is_match(id)
}

/// True if `id` is accepted as a varselId.
pub fn is_valid_varsel_id(id: &str) -> bool {
    is_uuid(id) || is_ulid(id)
}
