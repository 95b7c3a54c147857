//! Fixed line-shape recognizers for the four rule forms (spec.md §6 EBNF).
//!
//! Unlike `policy_expr::regex_cache`, these patterns are known at compile
//! time and never grow, so each is its own `Lazy<Regex>` static rather than
//! a dynamic cache.

use once_cell::sync::Lazy;
use regex::Regex;

static SET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^SET\s+(\S.*?)\s*=\s*(.+)$").unwrap());
static ADD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^ADD\s+(.+?)\s+TO\s+(\S.+)$").unwrap());
static IF_THEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^IF\s+(.+?)\s+THEN\s+(.+)$").unwrap());

/// `SET <path> = <expr>` — captures `(path, expr)`.
pub fn match_set(line: &str) -> Option<(String, String)> {
    SET.captures(line)
        .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
}

/// `ADD <jsonLit> TO <path>` — captures `(jsonLit, path)`.
pub fn match_add(line: &str) -> Option<(String, String)> {
    ADD.captures(line)
        .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
}

/// `IF <cond> THEN <action>` — captures `(cond, action)`.
pub fn match_if_then(line: &str) -> Option<(String, String)> {
    IF_THEN
        .captures(line)
        .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_set() {
        let (path, expr) = match_set("SET $.desconto = $.valor * 0.1").unwrap();
        assert_eq!(path, "$.desconto");
        assert_eq!(expr, "$.valor * 0.1");
    }

    #[test]
    fn recognizes_add() {
        let (json_lit, path) = match_add("ADD 10 TO $.historico").unwrap();
        assert_eq!(json_lit, "10");
        assert_eq!(path, "$.historico");
    }

    #[test]
    fn recognizes_if_then() {
        let (cond, action) =
            match_if_then("IF $.cliente.tipo == \"premium\" THEN SET $.desconto = $.valor * 0.15")
                .unwrap();
        assert_eq!(cond, "$.cliente.tipo == \"premium\"");
        assert_eq!(action, "SET $.desconto = $.valor * 0.15");
    }

    #[test]
    fn non_matching_lines_are_none() {
        assert_eq!(match_set("$.valor > 100"), None);
        assert_eq!(match_add("$.valor > 100"), None);
        assert_eq!(match_if_then("$.valor > 100"), None);
    }
}
