//! dot.case conversion

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::error::{Error, Result};

static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid regex pattern"));
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("Invalid regex pattern"));
static DOT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("Invalid regex pattern"));
static LEADING_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.+").expect("Invalid regex pattern"));

/// Convert a string to lower-case, dot-separated form.
///
/// A missing input (`None`) passes through untouched. Word boundaries
/// come from two sources: a lower-case letter immediately followed by
/// an upper-case one (camelCase/PascalCase), and runs of whitespace,
/// hyphens, or underscores. An all-caps run gets no internal dots;
/// only the separator-driven boundaries apply to it.
///
/// # Errors
///
/// Returns [`Error::TrailingDot`] when the input ends with a dot.
///
/// ```
/// use recase::to_dot_case;
///
/// assert_eq!(
///     to_dot_case(Some("convert-to-dot")).unwrap(),
///     Some("convert.to.dot".to_string())
/// );
/// ```
pub fn to_dot_case(input: Option<&str>) -> Result<Option<String>> {
    input.map(convert).transpose()
}

pub(crate) fn convert(s: &str) -> Result<String> {
    trace!("Converting {:?} to dot.case", s);
    if s.ends_with('.') {
        debug!("Rejected input with trailing dot: {:?}", s);
        return Err(Error::TrailingDot);
    }

    let split = LOWER_THEN_UPPER.replace_all(s, "${1}.${2}");
    let separated = SEPARATOR_RUN.replace_all(&split, ".");
    let lowered = separated.to_lowercase();
    let collapsed = DOT_RUN.replace_all(&lowered, ".");
    Ok(LEADING_DOTS.replace(&collapsed, "").into_owned())
}
