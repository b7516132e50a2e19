//! String validators for form fields
//!
//! Validators in this module run after a field's required and length checks
//! and report the first rule a value breaks. Each validator carries a default
//! message which can be replaced with [`with_message`](EmailValidator::with_message).

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Email pattern used by common web schema libraries.
//
// The local part may not start with a dot and must end with a word
// character, `+` or `-`. The domain is one or more labels followed by an
// alphabetic TLD of at least two letters. Consecutive dots are rejected
// separately since the regex crate has no lookaround.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// Letters, digits, underscores and hyphens only.
pub(crate) static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9_-]+$").expect("USERNAME_REGEX: invalid regex pattern")
});

/// Rule-level validation failure. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("{0}")]
	Required(String),
	#[error("{message}")]
	TooShort { min: usize, message: String },
	#[error("{message}")]
	TooLong { max: usize, message: String },
	#[error("{0}")]
	InvalidCharacters(String),
	#[error("{message}")]
	MissingCharacter { class: CharClass, message: String },
	#[error("{0}")]
	InvalidEmail(String),
	#[error("{0}")]
	Mismatch(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single rule applied to an already trimmed, non-empty value
pub trait Validator: fmt::Debug + Send + Sync {
	fn validate(&self, value: &str) -> ValidationResult<()>;
}

/// Validates that a value is a syntactically valid email address.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("user@example.com").is_ok());
/// assert!(validator.validate("first.last+tag@mail.example.org").is_ok());
/// assert!(validator.validate("invalid-email").is_err());
/// assert!(validator.validate("a..b@example.com").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::validators::{EmailValidator, Validator};
	///
	/// let validator = EmailValidator::new().with_message("Invalid email format");
	/// let error = validator.validate("nope").unwrap_err();
	/// assert_eq!(error.to_string(), "Invalid email format");
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Validator for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Enter a valid email address");
			Err(ValidationError::InvalidEmail(msg.to_string()))
		}
	}
}

/// Validates that every character of a value is allowed by a pattern.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use signup_forms::validators::{CharsetValidator, Validator};
///
/// let validator = CharsetValidator::new(Regex::new(r"^[a-z]+$").unwrap());
/// assert!(validator.validate("abc").is_ok());
/// assert!(validator.validate("ab c").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CharsetValidator {
	regex: Regex,
	message: Option<String>,
}

impl CharsetValidator {
	pub fn new(regex: Regex) -> Self {
		Self {
			regex,
			message: None,
		}
	}

	/// Letters, digits, underscores and hyphens
	pub fn username() -> Self {
		Self::new(USERNAME_REGEX.clone())
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}
}

impl Validator for CharsetValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.clone()
				.unwrap_or_else(|| format!("Value must match pattern: {}", self.regex.as_str()));
			Err(ValidationError::InvalidCharacters(msg))
		}
	}
}

/// Character classes a value can be required to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
	Uppercase,
	Lowercase,
	Digit,
	/// Anything that is not an ASCII letter or digit
	Special,
}

impl CharClass {
	pub fn matches(&self, c: char) -> bool {
		match self {
			CharClass::Uppercase => c.is_ascii_uppercase(),
			CharClass::Lowercase => c.is_ascii_lowercase(),
			CharClass::Digit => c.is_ascii_digit(),
			CharClass::Special => !c.is_ascii_alphanumeric(),
		}
	}

	/// Noun used in messages, e.g. "uppercase letter"
	pub fn noun(&self) -> &'static str {
		match self {
			CharClass::Uppercase => "uppercase letter",
			CharClass::Lowercase => "lowercase letter",
			CharClass::Digit => "number",
			CharClass::Special => "special character",
		}
	}
}

/// Validates that a value contains at least one character of a class.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::{CharClass, ContainsValidator, Validator};
///
/// let validator = ContainsValidator::new(CharClass::Special);
/// assert!(validator.validate("Password123!").is_ok());
///
/// let error = validator.validate("Password123").unwrap_err();
/// assert_eq!(error.to_string(), "Value must contain at least one special character");
/// ```
#[derive(Debug, Clone)]
pub struct ContainsValidator {
	class: CharClass,
	message: Option<String>,
}

impl ContainsValidator {
	pub fn new(class: CharClass) -> Self {
		Self {
			class,
			message: None,
		}
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn class(&self) -> CharClass {
		self.class
	}
}

impl Validator for ContainsValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if value.chars().any(|c| self.class.matches(c)) {
			return Ok(());
		}
		let message = self
			.message
			.clone()
			.unwrap_or_else(|| format!("Value must contain at least one {}", self.class.noun()));
		Err(ValidationError::MissingCharacter {
			class: self.class,
			message,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("user@example.com")]
	#[case("first.last@example.co.uk")]
	#[case("o'neil+news@sub-domain.example.org")]
	#[case("a_b-c@x1.io")]
	fn test_email_accepts(#[case] value: &str) {
		assert!(EmailValidator::new().validate(value).is_ok());
	}

	#[rstest]
	#[case("invalid-email")]
	#[case("@example.com")]
	#[case(".user@example.com")]
	#[case("user.@example.com")]
	#[case("us..er@example.com")]
	#[case("user@example")]
	#[case("user@example.c")]
	#[case("user@-example.com")]
	#[case("user@exa mple.com")]
	#[case("user@@example.com")]
	fn test_email_rejects(#[case] value: &str) {
		let error = EmailValidator::new().validate(value).unwrap_err();
		assert!(matches!(error, ValidationError::InvalidEmail(_)));
	}

	#[rstest]
	#[case("ValidUser1", true)]
	#[case("with_under-score", true)]
	#[case("invalid user!", false)]
	#[case("dotted.name", false)]
	#[case("ünïcode", false)]
	fn test_username_charset(#[case] value: &str, #[case] ok: bool) {
		assert_eq!(CharsetValidator::username().validate(value).is_ok(), ok);
	}

	#[rstest]
	#[case(CharClass::Uppercase, "abcD", "abcd")]
	#[case(CharClass::Lowercase, "ABCd", "ABCD")]
	#[case(CharClass::Digit, "abc1", "abcd")]
	#[case(CharClass::Special, "abc-", "abc1")]
	fn test_contains_validator(#[case] class: CharClass, #[case] pass: &str, #[case] fail: &str) {
		let validator = ContainsValidator::new(class);
		assert!(validator.validate(pass).is_ok());
		match validator.validate(fail) {
			Err(ValidationError::MissingCharacter { class: got, .. }) => assert_eq!(got, class),
			other => panic!("expected missing {:?}, got {:?}", class, other),
		}
	}

	#[rstest]
	fn test_custom_message_overrides_default() {
		let validator = ContainsValidator::new(CharClass::Digit)
			.with_message("Username must contain at least one number");
		let error = validator.validate("NoNumbersHere").unwrap_err();
		assert_eq!(error.to_string(), "Username must contain at least one number");
	}
}
