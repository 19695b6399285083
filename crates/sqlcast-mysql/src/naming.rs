//! Length-bounded constraint names.

use sha1::{Digest, Sha1};
use sqlcast_core::dialect::naming::sanitize_identifier;
use tracing::debug;

/// MySQL's limit on identifier length, in characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Characters of the referenced table kept in front of the digest.
const PREFIX_LENGTH: usize = 24;

/// Fits `name` within [`MAX_IDENTIFIER_LENGTH`].
///
/// Names that already fit are returned unchanged. Longer names become the
/// sanitized first 24 characters of `dest` followed by the 40-character hex
/// digest of the full name.
#[must_use]
pub fn shorten(name: String, dest: &str) -> String {
    if name.chars().count() <= MAX_IDENTIFIER_LENGTH {
        return name;
    }

    let prefix: String = sanitize_identifier(dest).chars().take(PREFIX_LENGTH).collect();
    let shortened = format!("{prefix}{}", digest_hex(&name));
    debug!(original = %name, %shortened, "shortened constraint name");
    shortened
}

/// Lower-case hex SHA-1 of `name`.
fn digest_hex(name: &str) -> String {
    format!("{:x}", Sha1::digest(name.as_bytes()))
}
