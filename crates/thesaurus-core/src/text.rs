/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trim trailing `old` separators, split on `old` and join with `new`
pub fn rejoin(input: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return input.to_string();
    }
    input
        .trim_end_matches(old)
        .split(old)
        .collect::<Vec<_>>()
        .join(new)
}

pub fn display_tag(text: &str) -> String {
    text.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("a fruit; a tree"), "A fruit; a tree");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first("NASA rocket"), "NASA rocket");
    }

    #[test]
    fn test_rejoin_trims_trailing_separator() {
        assert_eq!(rejoin("'one'\n'two'\n", "\n", ", "), "'one', 'two'");
        assert_eq!(rejoin("'one'\n\n", "\n", ", "), "'one'");
        assert_eq!(rejoin("", "\n", ", "), "");
    }

    #[test]
    fn test_display_tag() {
        assert_eq!(display_tag("North_American"), "North American");
        assert_eq!(display_tag("informal"), "informal");
    }
}
