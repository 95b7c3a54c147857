//! Quote- and bracket-aware top-level scanning.
//!
//! The DSL has no operator precedence or required parentheses, so splitting
//! an expression on its top-level operator means walking it once, tracking
//! whether we're inside a quoted string literal or nested inside
//! `(...)`/`[...]` (so a comma inside a `map(...)` call, or a `+` inside a
//! string, never gets mistaken for the outer operator). Ported idiom from
//! the original's `isOperatorProtected`, generalized to also respect
//! bracket/paren nesting per spec.md §4.2.1's "scanning outside of quoted
//! strings" rule.

#[derive(Clone, Copy, Default)]
struct ScanState {
    in_single: bool,
    in_double: bool,
    depth: i32,
}

impl ScanState {
    fn at_top_level(&self) -> bool {
        !self.in_single && !self.in_double && self.depth == 0
    }

    fn advance(&mut self, c: char) {
        match c {
            '\'' if !self.in_double => self.in_single = !self.in_single,
            '"' if !self.in_single => self.in_double = !self.in_double,
            '(' | '[' if !self.in_single && !self.in_double => self.depth += 1,
            ')' | ']' if !self.in_single && !self.in_double => self.depth -= 1,
            _ => {}
        }
    }
}

/// Finds the leftmost byte index of a top-level occurrence of `needle`.
/// `min_start` lets a caller forbid a match at (or before) the very start of
/// the haystack — used by the arithmetic scanner to skip a leading unary
/// sign, since the grammar only defines a binary form.
pub fn find_top_level(haystack: &str, needle: &str, min_start: usize) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let mut state = ScanState::default();
    let mut i = 0usize;
    let chars: Vec<char> = haystack.chars().collect();
    let mut byte_pos = 0usize;
    for (char_idx, &c) in chars.iter().enumerate() {
        let _ = char_idx;
        if state.at_top_level() && byte_pos >= min_start && haystack[byte_pos..].starts_with(needle)
        {
            return Some(byte_pos);
        }
        state.advance(c);
        byte_pos += c.len_utf8();
        i += 1;
    }
    let _ = (bytes, i);
    None
}

/// Finds the leftmost top-level occurrence of any of `ops`, trying longer
/// operators first at each position so `>=` wins over `>`.
pub fn find_top_level_any<'a>(
    haystack: &str,
    ops: &[&'a str],
    min_start: usize,
) -> Option<(usize, &'a str)> {
    let mut best: Option<(usize, &str)> = None;
    for op in ops {
        if let Some(idx) = find_top_level(haystack, op, min_start) {
            best = Some(match best {
                Some((bidx, bop)) if bidx < idx || (bidx == idx && bop.len() >= op.len()) => {
                    (bidx, bop)
                }
                _ => (idx, op),
            });
        }
    }
    best
}

/// Splits `haystack` on every top-level occurrence of `needle`, left to
/// right (used for `AND`/`OR` chains, which are left-associative).
pub fn split_top_level<'a>(haystack: &'a str, needle: &str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut rest = haystack;
    let mut base = 0usize;
    loop {
        match find_top_level(rest, needle, 0) {
            Some(idx) => {
                parts.push(&haystack[base..base + idx]);
                base += idx + needle.len();
                rest = &haystack[base..];
            }
            None => {
                parts.push(&haystack[base..]);
                break;
            }
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_operator_inside_quotes() {
        assert_eq!(find_top_level("'a+b' + 1", "+", 1), Some(6));
    }

    #[test]
    fn ignores_operator_inside_brackets() {
        assert_eq!(find_top_level("[1, 2] + $.a", "+", 1), Some(7));
    }

    #[test]
    fn splits_on_all_top_level_or() {
        let parts = split_top_level("$.a == 1 OR $.b == 2 OR $.c == 3", " OR ");
        assert_eq!(parts, vec!["$.a == 1", "$.b == 2", "$.c == 3"]);
    }

    #[test]
    fn longest_operator_wins_at_same_position() {
        assert_eq!(
            find_top_level_any("$.a >= 1", &["<=", ">=", "==", "!=", "<", ">"], 1),
            Some((4, ">="))
        );
    }

    #[test]
    fn leading_unary_minus_is_skipped() {
        assert_eq!(find_top_level("-5 * 3", "-", 1), None);
        assert_eq!(find_top_level("-5 * 3", "*", 1), Some(3));
    }
}
