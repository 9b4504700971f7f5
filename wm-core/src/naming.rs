//! Deterministic mapping from an identity to its canonical tenant
//! namespace name.

/// Maximum length of a cluster resource name.
const MAX_NAME_LEN: usize = 63;

const TENANT_SUFFIX: &str = "-tenant";

/// Derive the canonical, DNS-label-safe tenant namespace name for an
/// identity. `@`, `+` and `.` become `-`, the result is lowercased and
/// suffixed with `-tenant`; over-long names keep the suffix and lose
/// the tail of the prefix so the total never exceeds 63 characters.
///
/// Total and deterministic: repeated requests for the same identity
/// always target the same record.
///
/// Truncation happens on character boundaries, so multibyte input may
/// come out shorter than 63 bytes; ASCII identities land on exactly 63.
/// The name is always valid UTF-8, never a split character.
pub fn normalize_identity(identity: &str) -> String {
    let normalized: String = identity
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '@' | '+' | '.' => '-',
            other => other,
        })
        .collect();

    let keep = MAX_NAME_LEN - TENANT_SUFFIX.len();
    if normalized.len() <= keep {
        return format!("{normalized}{TENANT_SUFFIX}");
    }

    let mut prefix = String::with_capacity(keep);
    for c in normalized.chars() {
        if prefix.len() + c.len_utf8() > keep {
            break;
        }
        prefix.push(c);
    }
    format!("{prefix}{TENANT_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_email() {
        assert_eq!(normalize_identity("user@konflux.dev"), "user-konflux-dev-tenant");
    }

    #[test]
    fn email_with_dot_in_local_part() {
        assert_eq!(
            normalize_identity("user.name@konflux.dev"),
            "user-name-konflux-dev-tenant"
        );
    }

    #[test]
    fn email_with_plus_sign() {
        assert_eq!(
            normalize_identity("user+konflux@konflux.dev"),
            "user-konflux-konflux-dev-tenant"
        );
    }

    #[test]
    fn email_with_dot_and_plus() {
        assert_eq!(
            normalize_identity("user.name+test@konflux.dev"),
            "user-name-test-konflux-dev-tenant"
        );
    }

    #[test]
    fn long_identity_is_trimmed_to_63() {
        let input = "user+aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa@konflux.dev";
        let name = normalize_identity(input);
        assert_eq!(
            name,
            "user-aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa-tenant"
        );
        assert_eq!(name.len(), 63);
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(normalize_identity("User@Konflux.Dev"), "user-konflux-dev-tenant");
    }

    #[test]
    fn multibyte_identity_truncates_on_a_char_boundary() {
        // 30 three-byte chars: 90 bytes. The 56-byte prefix budget fits
        // only 18 whole chars (54 bytes), so the name ends up 61 bytes.
        let input = "€".repeat(30);
        let name = normalize_identity(&input);
        assert_eq!(name, format!("{}-tenant", "€".repeat(18)));
        assert_eq!(name.len(), 61);
        assert!(name.ends_with("-tenant"));
    }

    #[test]
    fn deterministic_and_bounded() {
        for identity in ["a@b.c", "x".repeat(200).as_str(), "user+tag@example.com"] {
            let first = normalize_identity(identity);
            let second = normalize_identity(identity);
            assert_eq!(first, second);
            assert!(first.len() <= 63);
            assert!(first.ends_with("-tenant"));
        }
    }
}
