/// Collapse every run of whitespace into a single space and trim both ends.
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize_whitespace;

    #[test]
    fn collapses_newlines_and_tabs() {
        assert_eq!(
            normalize_whitespace("\n   Yellow \t\n  (Coldplay)\n"),
            "Yellow (Coldplay)"
        );
    }

    #[test]
    fn blank_input_becomes_empty() {
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }
}
