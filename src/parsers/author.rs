/// Strip the site's literal "By " prefix from an author line.
/// Idempotent: an already-stripped name comes back unchanged.
pub fn strip_author_prefix(text: &str) -> &str {
    text.strip_prefix("By ").unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_prefix() {
        assert_eq!(strip_author_prefix("By Jane Austen"), "Jane Austen");
    }

    #[test]
    fn strip_is_idempotent() {
        let once = strip_author_prefix("By Jane Austen");
        assert_eq!(strip_author_prefix(once), "Jane Austen");
        assert_eq!(strip_author_prefix("Jane Austen"), "Jane Austen");
    }

    #[test]
    fn only_strips_at_start() {
        assert_eq!(strip_author_prefix("Edited By Jane"), "Edited By Jane");
    }
}
