//! Character field for text input

use crate::field::{Field, Widget};
use crate::validators::{ValidationError, ValidationResult, Validator};

/// Character field with required, length and custom validation.
///
/// Rules run in a fixed order and the first failure wins: required,
/// minimum length, maximum length, then each validator in the order it
/// was added. Length is counted in characters.
#[derive(Debug)]
pub struct CharField {
	pub field: Field,
	pub label: String,
	pub required: bool,
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	validators: Vec<Box<dyn Validator>>,
}

impl CharField {
	/// Create a new CharField for the given form field
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{CharField, Field};
	///
	/// let field = CharField::new(Field::Username);
	/// assert_eq!(field.label, "Username");
	/// assert!(!field.required);
	/// ```
	pub fn new(field: Field) -> Self {
		Self {
			field,
			label: field.label().to_string(),
			required: false,
			min_length: None,
			max_length: None,
			validators: Vec::new(),
		}
	}

	/// Set the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the minimum length for the field
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{CharField, Field};
	///
	/// let field = CharField::new(Field::Username).with_min_length(3);
	/// let error = field.clean("ab").unwrap_err();
	/// assert_eq!(error.to_string(), "Username must be at least 3 characters");
	/// ```
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set the maximum length for the field
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Append a validator to the rule chain
	pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
		self.validators.push(Box::new(validator));
		self
	}

	pub fn widget(&self) -> Widget {
		self.field.widget()
	}

	/// Clean a raw value, returning the trimmed value or the first failure
	///
	/// Trimming happens before the required check, so a value made of
	/// whitespace only is reported as missing.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{CharField, Field};
	///
	/// let field = CharField::new(Field::Email).required();
	/// assert_eq!(field.clean("  user@example.com  ").unwrap(), "user@example.com");
	/// assert_eq!(field.clean("   ").unwrap_err().to_string(), "Email is required");
	/// ```
	pub fn clean(&self, raw: &str) -> ValidationResult<String> {
		let value = raw.trim();

		if value.is_empty() {
			if self.required {
				return Err(ValidationError::Required(format!("{} is required", self.label)));
			}
			return Ok(String::new());
		}

		let length = value.chars().count();
		if let Some(min) = self.min_length
			&& length < min
		{
			return Err(ValidationError::TooShort {
				min,
				message: format!("{} must be at least {} characters", self.label, min),
			});
		}
		if let Some(max) = self.max_length
			&& length > max
		{
			return Err(ValidationError::TooLong {
				max,
				message: format!("{} must be at most {} characters", self.label, max),
			});
		}

		for validator in &self.validators {
			validator.validate(value)?;
		}

		Ok(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validators::{CharClass, ContainsValidator};
	use rstest::rstest;

	#[rstest]
	fn test_optional_empty_value_is_clean() {
		let field = CharField::new(Field::Username);
		assert_eq!(field.clean("   ").unwrap(), "");
	}

	#[rstest]
	fn test_length_counts_characters_not_bytes() {
		let field = CharField::new(Field::Username).with_max_length(3);
		assert_eq!(field.clean("äöü").unwrap(), "äöü");
	}

	#[rstest]
	fn test_first_failing_rule_wins() {
		let field = CharField::new(Field::Password)
			.required()
			.with_min_length(8)
			.with_validator(ContainsValidator::new(CharClass::Uppercase))
			.with_validator(ContainsValidator::new(CharClass::Digit));

		// Too short and missing both classes: length is checked first.
		assert!(matches!(
			field.clean("abc"),
			Err(ValidationError::TooShort { min: 8, .. })
		));
		// Long enough: the first validator reports.
		assert!(matches!(
			field.clean("abcdefgh"),
			Err(ValidationError::MissingCharacter {
				class: CharClass::Uppercase,
				..
			})
		));
	}

	#[rstest]
	fn test_value_is_trimmed_before_length_checks() {
		let field = CharField::new(Field::Username).with_max_length(3);
		assert_eq!(field.clean("  abc  ").unwrap(), "abc");
	}
}
