/// Canonical form shared by registered and scanned codes.
///
/// Trims surrounding whitespace, uppercases ASCII letters, and strips every
/// hyphen. Codes are only ever compared after passing through this function,
/// and it is idempotent, so a value may be re-normalized freely.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trims_uppercases_and_strips_hyphens() {
        assert_eq!(normalize(" ab-12 "), "AB12");
        assert_eq!(normalize("1Z-999-AA1"), "1Z999AA1");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn idempotent() {
        for raw in ["", " ab-12 ", "ABC123", "a-b-c", "  1z999  "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn only_ascii_case_is_folded() {
        assert_eq!(normalize("straße"), "STRAßE");
    }
}
