//! # valdoc
//!
//! Appends the values allowed by `stringvalidator.OneOf(...)` validators to schema
//! attribute descriptions, working from the validators' source text.
//!
//! ```text
//! Some description.
//! Possible values: `foo`, `bar`
//! ```

pub mod valdoc;
