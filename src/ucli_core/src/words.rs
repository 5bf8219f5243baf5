//! Word scanning over a raw input line.
//!
//! Words are runs of non-space bytes. Every separator is ASCII, so each
//! index produced here is a valid `str` boundary.

/// Same set as C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline(always)]
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Byte length of the word `s` starts with (0 if `s` starts with a space).
#[inline(always)]
pub(crate) fn word_len(s: &str) -> usize {
    s.bytes().position(is_space).unwrap_or(s.len())
}

/// The word `s` starts with.
#[inline(always)]
pub(crate) fn leading_word(s: &str) -> &str {
    &s[..word_len(s)]
}

/// Drops leading spaces.
#[inline(always)]
pub(crate) fn skip_spaces(s: &str) -> &str {
    let start = s.bytes().position(|b| !is_space(b)).unwrap_or(s.len());
    &s[start..]
}

/// Moves past the current word, then past the spaces after it, so the result
/// starts at the next word or is empty.
#[inline(always)]
pub(crate) fn next_word(s: &str) -> &str {
    skip_spaces(&s[word_len(s)..])
}

// ==================== TESTS =======================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_space_matches_c_set() {
        for b in [b' ', b'\t', b'\n', 0x0b, 0x0c, b'\r'] {
            assert!(is_space(b));
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
        assert!(!is_space(b'?'));
    }

    #[test]
    fn test_leading_word() {
        assert_eq!(leading_word("set 3 2.5"), "set");
        assert_eq!(leading_word("last"), "last");
        assert_eq!(leading_word(" lead"), "");
        assert_eq!(leading_word("tab\tsep"), "tab");
        assert_eq!(leading_word(""), "");
    }

    #[test]
    fn test_next_word_walks_the_line() {
        let line = "set  3\t 2.5 ";
        let second = next_word(line);
        assert_eq!(second, "3\t 2.5 ");
        let third = next_word(second);
        assert_eq!(third, "2.5 ");
        assert_eq!(next_word(third), "");
        assert_eq!(next_word(""), "");
    }

    #[test]
    fn test_next_word_on_leading_space_only_skips_spaces() {
        assert_eq!(next_word("   ping"), "ping");
    }

    #[test]
    fn test_skip_spaces() {
        assert_eq!(skip_spaces(" \t ping "), "ping ");
        assert_eq!(skip_spaces("   "), "");
    }
}
