//! Sign-up form input, validated record and schema

use crate::field::{Field, FieldError};
use crate::fields::CharField;
use crate::validators::{CharClass, CharsetValidator, ContainsValidator, EmailValidator, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

static DEFAULT_SCHEMA: LazyLock<SignUpSchema> = LazyLock::new(SignUpSchema::new);

/// Raw values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
	pub username: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

impl FormInput {
	/// Get the raw value of a field
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{Field, FormInput};
	///
	/// let mut input = FormInput::default();
	/// input.set(Field::Email, "user@example.com");
	/// assert_eq!(input.value(Field::Email), "user@example.com");
	/// ```
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Username => &self.username,
			Field::Email => &self.email,
			Field::Password => &self.password,
			Field::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn set(&mut self, field: Field, value: impl Into<String>) {
		let slot = match field {
			Field::Username => &mut self.username,
			Field::Email => &mut self.email,
			Field::Password => &mut self.password,
			Field::ConfirmPassword => &mut self.confirm_password,
		};
		*slot = value.into();
	}
}

/// Trimmed values that passed the schema.
///
/// Only [`SignUpSchema::validate`] produces a record, and it has no setters.
/// `Debug` redacts both password fields.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRecord {
	username: String,
	email: String,
	password: String,
	confirm_password: String,
}

impl ValidatedRecord {
	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	pub fn password(&self) -> &str {
		&self.password
	}

	pub fn confirm_password(&self) -> &str {
		&self.confirm_password
	}
}

impl fmt::Debug for ValidatedRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValidatedRecord")
			.field("username", &self.username)
			.field("email", &self.email)
			.field("password", &"[redacted]")
			.field("confirm_password", &"[redacted]")
			.finish()
	}
}

/// Field errors from a failed schema run, one per invalid field, in tab order.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
	errors: Vec<FieldError>,
}

impl ValidationErrors {
	fn from_vec(mut errors: Vec<FieldError>) -> Option<Self> {
		if errors.is_empty() {
			return None;
		}
		errors.sort_by_key(|error| error.field);
		Some(Self { errors })
	}

	/// The error for the first invalid field in tab order
	pub fn first(&self) -> &FieldError {
		&self.errors[0]
	}

	pub fn get(&self, field: Field) -> Option<&FieldError> {
		self.errors.iter().find(|error| error.field == field)
	}

	pub fn contains(&self, field: Field) -> bool {
		self.get(field).is_some()
	}

	pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.errors.iter().map(|error| error.field)
	}

	pub fn as_slice(&self) -> &[FieldError] {
		&self.errors
	}

	pub fn into_vec(self) -> Vec<FieldError> {
		self.errors
	}
}

impl<'a> IntoIterator for &'a ValidationErrors {
	type Item = &'a FieldError;
	type IntoIter = std::slice::Iter<'a, FieldError>;

	fn into_iter(self) -> Self::IntoIter {
		self.errors.iter()
	}
}

/// Per-field rule chains for the sign-up form.
///
/// Every field is evaluated independently and reports at most one error,
/// the first rule it breaks. `confirmPassword` is compared against the
/// cleaned password, and only once the password itself is valid.
#[derive(Debug)]
pub struct SignUpSchema {
	username: CharField,
	email: CharField,
	password: CharField,
}

impl SignUpSchema {
	/// Build the schema with the standard sign-up rules
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FormInput, SignUpSchema};
	///
	/// let schema = SignUpSchema::new();
	/// let input = FormInput {
	///     username: "ValidUser1".into(),
	///     email: "  user@example.com  ".into(),
	///     password: "ValidPass123!".into(),
	///     confirm_password: "ValidPass123!".into(),
	/// };
	///
	/// let record = schema.validate(&input).unwrap();
	/// assert_eq!(record.email(), "user@example.com");
	/// ```
	pub fn new() -> Self {
		let username = CharField::new(Field::Username)
			.required()
			.with_min_length(USERNAME_MIN_LENGTH)
			.with_max_length(USERNAME_MAX_LENGTH)
			.with_validator(CharsetValidator::username().with_message(
				"Username can only contain letters, numbers, underscores, and hyphens",
			))
			.with_validator(contains(Field::Username, CharClass::Uppercase))
			.with_validator(contains(Field::Username, CharClass::Lowercase))
			.with_validator(contains(Field::Username, CharClass::Digit));

		let email = CharField::new(Field::Email)
			.required()
			.with_validator(EmailValidator::new().with_message("Invalid email format"));

		let password = CharField::new(Field::Password)
			.required()
			.with_min_length(PASSWORD_MIN_LENGTH)
			.with_max_length(PASSWORD_MAX_LENGTH)
			.with_validator(contains(Field::Password, CharClass::Uppercase))
			.with_validator(contains(Field::Password, CharClass::Lowercase))
			.with_validator(contains(Field::Password, CharClass::Digit))
			.with_validator(contains(Field::Password, CharClass::Special));

		Self {
			username,
			email,
			password,
		}
	}

	/// Validate the whole form
	///
	/// Returns the trimmed record, or one error per invalid field.
	pub fn validate(&self, input: &FormInput) -> Result<ValidatedRecord, ValidationErrors> {
		let mut errors = Vec::new();
		let mut clean = |field: Field| {
			self.validate_field(field, input).unwrap_or_else(|error| {
				errors.push(error);
				String::new()
			})
		};

		let username = clean(Field::Username);
		let email = clean(Field::Email);
		let password = clean(Field::Password);
		let confirm_password = clean(Field::ConfirmPassword);

		if let Some(errors) = ValidationErrors::from_vec(errors) {
			tracing::debug!(
				invalid = ?errors.fields().collect::<Vec<_>>(),
				"sign-up input failed validation"
			);
			return Err(errors);
		}

		Ok(ValidatedRecord {
			username,
			email,
			password,
			confirm_password,
		})
	}

	/// Validate a single field against the current input
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{Field, FormInput, SignUpSchema};
	///
	/// let schema = SignUpSchema::new();
	/// let input = FormInput { username: "ab".into(), ..Default::default() };
	///
	/// let error = schema.validate_field(Field::Username, &input).unwrap_err();
	/// assert_eq!(error.message, "Username must be at least 3 characters");
	/// ```
	pub fn validate_field(&self, field: Field, input: &FormInput) -> Result<String, FieldError> {
		let result = match field {
			Field::Username => self.username.clean(input.value(field)),
			Field::Email => self.email.clean(input.value(field)),
			Field::Password => self.password.clean(input.value(field)),
			Field::ConfirmPassword => self.clean_confirmation(input),
		};
		result.map_err(|error| FieldError::new(field, error.to_string()))
	}

	fn clean_confirmation(&self, input: &FormInput) -> Result<String, ValidationError> {
		let confirmation = input.confirm_password.trim().to_string();
		match self.password.clean(&input.password) {
			Ok(password) if password != confirmation => Err(ValidationError::Mismatch(
				PASSWORD_MISMATCH_MESSAGE.to_string(),
			)),
			_ => Ok(confirmation),
		}
	}
}

impl Default for SignUpSchema {
	fn default() -> Self {
		Self::new()
	}
}

fn contains(field: Field, class: CharClass) -> ContainsValidator {
	ContainsValidator::new(class).with_message(format!(
		"{} must contain at least one {}",
		field.label(),
		class.noun()
	))
}

/// Validate input against the standard sign-up schema
pub fn validate(input: &FormInput) -> Result<ValidatedRecord, ValidationErrors> {
	DEFAULT_SCHEMA.validate(input)
}

/// Validate a single field against the standard sign-up schema
pub fn validate_field(field: Field, input: &FormInput) -> Result<String, FieldError> {
	DEFAULT_SCHEMA.validate_field(field, input)
}
