/// `"charizard"` -> `"Charizard"`
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Zero-padded to three digits: `#006`, `#150`, `#1025`.
pub fn format_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// Keep the tail of `s` within `max_chars`, marking the cut with `…`.
pub fn truncate_start(s: &str, max_chars: usize) -> String {
    let len = s.chars().count();
    if len <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let keep = max_chars - 1;
    let tail: String = s.chars().skip(len - keep).collect();
    format!("…{}", tail)
}

/// Quote `arg` for a POSIX shell when it would otherwise split or expand.
pub fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':'));
    if plain {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("charizard"), "Charizard");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(1), "#001");
        assert_eq!(format_id(25), "#025");
        assert_eq!(format_id(150), "#150");
        assert_eq!(format_id(1025), "#1025");
    }

    #[test]
    fn test_truncate_start() {
        assert_eq!(truncate_start("abc", 5), "abc");
        assert_eq!(truncate_start("abcdef", 4), "…def");
        assert_eq!(truncate_start("abcdef", 0), "");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("char"), "char");
        assert_eq!(shell_quote("mr-mime"), "mr-mime");
        assert_eq!(shell_quote("mr mime"), "'mr mime'");
        assert_eq!(shell_quote("farfetch'd"), r"'farfetch'\''d'");
        assert_eq!(shell_quote(""), "''");
    }
}
