//! kebab-case conversion

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::error::{Error, Result};

static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid regex pattern"));
// The last capital of an acronym run that starts a new capitalized
// word, e.g. the second `S` in `NASASpaceship`.
static ACRONYM_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("Invalid regex pattern"));
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("Invalid regex pattern"));
static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9-]").expect("Invalid regex pattern"));
static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid regex pattern"));

/// Convert a string to lower-case, hyphen-separated form.
///
/// A missing input (`None`) yields an empty string rather than passing
/// through. Boundaries come from camelCase transitions (including the
/// tail of an acronym run), whitespace, and underscores; any other
/// symbol becomes a separator, and the final collapse/trim passes
/// guarantee the output never carries doubled, leading, or trailing
/// hyphens.
///
/// # Errors
///
/// Returns [`Error::TrailingUnderscore`] when the input ends with an
/// underscore.
///
/// ```
/// use recase::to_kebab_case;
///
/// assert_eq!(to_kebab_case(Some("NASASpaceship")).unwrap(), "nasa-spaceship");
/// assert_eq!(to_kebab_case(None).unwrap(), "");
/// ```
pub fn to_kebab_case(input: Option<&str>) -> Result<String> {
    match input {
        Some(s) => convert(s),
        None => Ok(String::new()),
    }
}

pub(crate) fn convert(s: &str) -> Result<String> {
    trace!("Converting {:?} to kebab-case", s);
    if s.ends_with('_') {
        debug!("Rejected input with trailing underscore: {:?}", s);
        return Err(Error::TrailingUnderscore);
    }

    // Nothing to split and nothing to fold: hand the string back as-is.
    if !s.contains(|c: char| c.is_whitespace() || c == '-' || c == '_' || c.is_uppercase()) {
        return Ok(s.to_lowercase());
    }

    let split = LOWER_THEN_UPPER.replace_all(s, "${1}-${2}");
    let split = ACRONYM_TAIL.replace_all(&split, "${1}-${2}");
    let separated = SEPARATOR_RUN.replace_all(&split, "-");
    let cleaned = NON_ALNUM.replace_all(&separated, "-");
    let lowered = cleaned.to_lowercase();
    let collapsed = HYPHEN_RUN.replace_all(&lowered, "-");
    Ok(collapsed.trim_matches('-').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_boundaries_get_hyphens() {
        assert_eq!(convert("myVar").unwrap(), "my-var");
        assert_eq!(convert("myVar2Count").unwrap(), "my-var2-count");
    }

    #[test]
    fn test_acronym_tail_is_a_boundary() {
        assert_eq!(convert("NASASpaceship").unwrap(), "nasa-spaceship");
        assert_eq!(convert("parseHTTPResponse").unwrap(), "parse-http-response");
    }

    #[test]
    fn test_separated_words() {
        assert_eq!(convert("first_name").unwrap(), "first-name");
        assert_eq!(convert("first  name").unwrap(), "first-name");
    }

    #[test]
    fn test_plain_lowercase_is_returned_unchanged() {
        assert_eq!(convert("simple").unwrap(), "simple");
        assert_eq!(convert("v2").unwrap(), "v2");
    }

    #[test]
    fn test_symbols_become_boundaries_without_strays() {
        assert_eq!(convert("Wait*For*It").unwrap(), "wait-for-it");
        assert_eq!(convert("Price ($usd)").unwrap(), "price-usd");
    }

    #[test]
    fn test_no_leading_or_trailing_hyphens() {
        assert_eq!(convert("-padded-").unwrap(), "padded");
        assert_eq!(convert("  spaced  ").unwrap(), "spaced");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(convert("a---b").unwrap(), "a-b");
        assert_eq!(convert("a -_ b").unwrap(), "a-b");
    }

    #[test]
    fn test_all_separator_input_becomes_empty() {
        assert_eq!(convert("---").unwrap(), "");
        assert_eq!(convert("   ").unwrap(), "");
    }

    #[test]
    fn test_trailing_underscore_is_rejected() {
        assert_eq!(convert("invalid_end_"), Err(Error::TrailingUnderscore));
        assert_eq!(convert("_"), Err(Error::TrailingUnderscore));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(convert("").unwrap(), "");
    }

    #[test]
    fn test_missing_input_becomes_empty_string() {
        assert_eq!(to_kebab_case(None).unwrap(), "");
    }

    #[test]
    fn test_lowercase_symbol_string_short_circuits_unchanged() {
        // The fast path only inspects separators and capitals, so a
        // separator-free lower-case string keeps its symbols.
        assert_eq!(convert("wait*for*it").unwrap(), "wait*for*it");
    }
}
