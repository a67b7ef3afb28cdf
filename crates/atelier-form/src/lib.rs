//! Form-definition class rewriting for Atelier sites.
//!
//! Site forms are authored in a bracketed field mini-language
//! (`[text* your-name]`, `[submit "Send Message"]`). Authors style fields
//! with an informal inline convention, writing `class:<token>` markers
//! among the field attributes. This crate normalizes that convention:
//! every marker is collected, removed, and merged into a single
//! well-formed `class="..."` attribute, leaving all other attributes and
//! label text untouched.
//!
//! The pass is best-effort by design: it never fails, and anything it
//! cannot parse passes through unchanged. A broken field in the output is
//! preferable to a broken page.
//!
//! # Example
//!
//! ```
//! use atelier_form::rewrite;
//!
//! let form = "[submit class:btn class:bg-blue \"Send Message\"]";
//! assert_eq!(rewrite(form), "[submit class=\"btn bg-blue\" \"Send Message\"]");
//! ```

mod class_map;
mod error;
mod field;
mod lexer;
mod rewrite;

pub use class_map::ClassMap;
pub use error::FieldError;
pub use field::FormField;
pub use rewrite::{parse_fields, rewrite};
