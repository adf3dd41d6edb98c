use sha2::{Digest, Sha256};

/// Stable SHA-256 fingerprint for a constraint finding.
///
/// Identity: `check_id|code|file|expression`. Line numbers are left out so
/// unrelated edits above the `terraform` block do not change it.
pub fn fingerprint_for_constraint(
    check_id: &str,
    code: &str,
    file_path: &str,
    expression: &str,
) -> String {
    let canonical = [check_id, code, file_path, expression].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_hex_and_field_sensitive() {
        let a = fingerprint_for_constraint("c", "x", "main.tf", ">= 1.0");
        let b = fingerprint_for_constraint("c", "x", "main.tf", ">= 1.0");
        let c = fingerprint_for_constraint("c", "x", "versions.tf", ">= 1.0");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
