//! Shell quoting helpers shared by every tool.
//!
//! All single-quoted interpolation goes through [`escape_single_quotes`] so
//! the tools agree on one escaping rule: close the quote, emit an escaped
//! quote, reopen (`'\''`).

/// Escape `'` for use inside a single-quoted shell word.
pub fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', r"'\''")
}

/// Wrap `s` in single quotes, escaping embedded quotes.
pub fn single_quote(s: &str) -> String {
    format!("'{}'", escape_single_quotes(s))
}

/// Escape `\` and `"` for use inside a double-quoted shell word.
pub fn escape_double_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', "\\\"")
}

/// Trim and collapse every run of whitespace to a single space.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a user-entered list on whitespace and commas, dropping empties.
pub fn split_list(s: &str) -> Vec<&str> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect()
}

/// Whether a path is absolute in the POSIX sense.
pub fn is_absolute(path: &str) -> bool {
    path.trim_start().starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quote_escaping() {
        assert_eq!(escape_single_quotes("it's"), r"it'\''s");
        assert_eq!(single_quote("it's"), r"'it'\''s'");
        assert_eq!(single_quote(""), "''");
    }

    #[test]
    fn test_single_quote_survives_shell_tokenization() {
        let word = single_quote("don't $expand `me`");
        let tokens = shlex::split(&format!("echo {word}")).unwrap();
        assert_eq!(tokens, vec!["echo", "don't $expand `me`"]);
    }

    #[test]
    fn test_double_quote_escaping() {
        assert_eq!(escape_double_quotes(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_double_quotes(r"C:\"), r"C:\\");
    }

    #[test]
    fn test_double_quoted_word_survives_shell_tokenization() {
        let text = r#"path "C:\" then \n"#;
        let word = format!("\"{}\"", escape_double_quotes(text));
        let tokens = shlex::split(&format!("echo {word}")).unwrap();
        assert_eq!(tokens, vec!["echo", text]);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  curl   -X  POST\t url "), "curl -X POST url");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a.txt, b.txt  c.txt"), vec!["a.txt", "b.txt", "c.txt"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/srv/data"));
        assert!(!is_absolute("./data"));
        assert!(!is_absolute("data/"));
    }
}
