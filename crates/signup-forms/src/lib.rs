//! Form schema and validation for the sign-up form
//!
//! This crate provides the pure, synchronous half of the sign-up form:
//! - Field identifiers, widgets and element ids
//! - Reusable string validators (email syntax, charset, character classes)
//! - `CharField` rule chains with required and length checks
//! - `SignUpSchema`, turning raw `FormInput` into a trimmed `ValidatedRecord`
//!   or a list of per-field errors
//! - `BoundField`, deriving ARIA attributes for a rendered input

pub mod bound_field;
pub mod field;
pub mod fields;
pub mod form;
pub mod validators;

pub use bound_field::BoundField;
pub use field::{Field, FieldError, Widget};
pub use fields::CharField;
pub use form::{
	FormInput, PASSWORD_MISMATCH_MESSAGE, SignUpSchema, ValidatedRecord, ValidationErrors,
	validate, validate_field,
};
pub use validators::{ValidationError, ValidationResult, Validator};
