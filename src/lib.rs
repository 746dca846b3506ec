//! # Recase
//!
//! Pure, synchronous conversion of identifier strings between naming
//! conventions: camelCase, dot.case, and kebab-case.
//!
//! Every converter is a stateless function of its input. Missing input
//! is modeled as `Option<&str>`; camelCase and dot.case pass `None`
//! through, while kebab-case maps it to an empty string. Each
//! converter rejects exactly one trailing character (`_` for camelCase
//! and kebab-case, `.` for dot.case) with [`Error`].
//!
//! ```
//! use recase::{to_camel_case, to_dot_case, to_kebab_case};
//!
//! assert_eq!(
//!     to_camel_case(Some("first name")).unwrap(),
//!     Some("firstName".to_string())
//! );
//! assert_eq!(
//!     to_dot_case(Some("SCREEN_NAME")).unwrap(),
//!     Some("screen.name".to_string())
//! );
//! assert_eq!(to_kebab_case(Some("NASASpaceship")).unwrap(), "nasa-spaceship");
//! ```
//!
//! ## Modules
//!
//! - `camel` - camelCase conversion, strict and loose separator rules
//! - `dot` - dot.case conversion
//! - `kebab` - kebab-case conversion
//! - `style` - `CaseStyle` selection and dispatch
//! - `error` - the error type shared by all converters

pub mod camel;
pub mod dot;
pub mod error;
pub mod kebab;
pub mod style;


pub use camel::{to_camel_case, to_camel_case_loose};
pub use dot::to_dot_case;
pub use error::{Error, Result};
pub use kebab::to_kebab_case;
pub use style::CaseStyle;
