//! Comma-separated list parsing shared by sizes and tags.

/// Split operator input on commas, trim each token and drop empty ones.
///
/// Order and duplicates are preserved; callers decide whether to dedupe.
/// Tokens are compared verbatim afterwards, so `"S"` and `"s"` stay distinct.
pub fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_tokens() {
        let tokens: Vec<_> = split_list(" S, M ,, ,L,").collect();
        assert_eq!(tokens, vec!["S", "M", "L"]);
    }

    #[test]
    fn keeps_duplicates_and_case() {
        let tokens: Vec<_> = split_list("S,s,S").collect();
        assert_eq!(tokens, vec!["S", "s", "S"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(split_list("").count(), 0);
        assert_eq!(split_list(" , ,").count(), 0);
    }
}
