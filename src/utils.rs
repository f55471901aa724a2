/// removes every occurrence of any character in `chars` from `s`.
pub fn strip_chars(s: &str, chars: &[char]) -> String {
    s.chars().filter(|c| !chars.contains(c)).collect()
}

/// true when `s` is non-empty and made only of ascii decimal digits.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// replaces every `.csv` substring, not only a trailing extension.
pub fn replace_csv_suffix(s: &str, with: &str) -> String {
    s.replace(".csv", with)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_chars() {
        assert_eq!(strip_chars("'a\"b'", &['\'', '"']), "ab");
        assert_eq!(strip_chars("1.2.3", &['.']), "123");
        assert_eq!(strip_chars("", &['.']), "");
    }

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits("0042"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("4.2"));
        assert!(!is_all_digits("-1"));
        assert!(!is_all_digits(" 1"));
    }

    #[test]
    fn test_replace_csv_suffix_hits_every_occurrence() {
        assert_eq!(replace_csv_suffix("data.csv", ".sql"), "data.sql");
        assert_eq!(replace_csv_suffix("data.csv.csv", ".sql"), "data.sql.sql");
        assert_eq!(replace_csv_suffix("dir.csv/data.csv", ""), "dir/data");
    }
}
