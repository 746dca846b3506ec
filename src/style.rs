//! Case-style selection and dispatch

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{camel, dot, kebab};

/// The naming conventions this crate converts between.
///
/// `apply` dispatches to the strict converters. It takes a present
/// string rather than an `Option` because the converters disagree
/// about missing input (camelCase and dot.case pass it through,
/// kebab-case maps it to an empty string); dispatch is only defined
/// once a value exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Camel,
    Dot,
    Kebab,
}

impl CaseStyle {
    /// Convert `input` into this style.
    pub fn apply(&self, input: &str) -> Result<String> {
        match self {
            CaseStyle::Camel => camel::convert(input),
            CaseStyle::Dot => dot::convert(input),
            CaseStyle::Kebab => kebab::convert(input),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Camel => "camelCase",
            CaseStyle::Dot => "dot.case",
            CaseStyle::Kebab => "kebab-case",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "dot" | "dot.case" | "dotcase" => Ok(CaseStyle::Dot),
            "kebab" | "kebab-case" | "kebabcase" => Ok(CaseStyle::Kebab),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}
