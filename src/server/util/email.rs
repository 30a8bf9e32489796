/// Trims and lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Loose syntactic check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email("  Anna@Example.RU "), "anna@example.ru");
    }

    #[test]
    fn validates_shape() {
        assert!(is_valid_email("anna@example.ru"));
        assert!(!is_valid_email("anna.example.ru"));
        assert!(!is_valid_email("@example.ru"));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("anna@@example.ru"));
        assert!(!is_valid_email("an na@example.ru"));
        assert!(!is_valid_email("anna@example.ru."));
    }
}
