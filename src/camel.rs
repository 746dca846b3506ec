//! camelCase conversion
//!
//! Two variants are exposed: the strict converter recognizes
//! whitespace, hyphens, and underscores as word separators; the loose
//! converter treats every non-alphanumeric character as a separator.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::error::{Error, Result};

// A maximal separator run plus the character that starts the next word
// (absent when the run reaches end-of-string).
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+(.)?").expect("Invalid regex pattern"));
static LOOSE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+(.)?").expect("Invalid regex pattern"));

/// Convert a string to camelCase.
///
/// A missing input (`None`) passes through untouched. Whitespace,
/// hyphens, and underscores mark word boundaries; the string is
/// lower-cased up front so an all-caps run collapses into a single
/// word before boundary detection.
///
/// # Errors
///
/// Returns [`Error::TrailingUnderscore`] when the input ends with an
/// underscore.
///
/// ```
/// use recase::to_camel_case;
///
/// assert_eq!(
///     to_camel_case(Some("SCREEN_NAME")).unwrap(),
///     Some("screenName".to_string())
/// );
/// assert_eq!(to_camel_case(None).unwrap(), None);
/// ```
pub fn to_camel_case(input: Option<&str>) -> Result<Option<String>> {
    input.map(convert).transpose()
}

/// Loose variant of [`to_camel_case`]: every non-alphanumeric
/// character is a word separator, so `"first.name"` becomes
/// `"firstName"`. Missing-input and trailing-underscore handling match
/// the strict converter.
pub fn to_camel_case_loose(input: Option<&str>) -> Result<Option<String>> {
    input.map(|s| apply(s, &LOOSE_BOUNDARY)).transpose()
}

pub(crate) fn convert(s: &str) -> Result<String> {
    apply(s, &WORD_BOUNDARY)
}

fn apply(s: &str, boundary: &Regex) -> Result<String> {
    trace!("Converting {:?} to camelCase", s);
    if s.ends_with('_') {
        debug!("Rejected input with trailing underscore: {:?}", s);
        return Err(Error::TrailingUnderscore);
    }

    let lowered = s.to_lowercase();
    let joined = boundary.replace_all(&lowered, |caps: &Captures| {
        caps.get(1)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    });

    Ok(lower_first(&joined))
}

// Inputs that started out PascalCase keep their leading capital through
// the boundary pass; fold it here.
fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
