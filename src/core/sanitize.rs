// src/core/sanitize.rs

/// Strip exactly one trailing `suffix` char (after trimming), or `None` if absent.
/// `"70%"` -> `Some("70")`, `"70%%"` -> `Some("70%")`, `"70"` -> `None`.
pub fn strip_unit_suffix(s: &str, suffix: char) -> Option<&str> {
    s.trim().strip_suffix(suffix).map(str::trim_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_unit_suffix_only_once() {
        assert_eq!(strip_unit_suffix(" 70% ", '%'), Some("70"));
        assert_eq!(strip_unit_suffix("70 %", '%'), Some("70"));
        assert_eq!(strip_unit_suffix("70%%", '%'), Some("70%"));
        assert_eq!(strip_unit_suffix("70", '%'), None);
    }
}
