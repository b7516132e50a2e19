//! Field identifiers, widgets and field-level errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	EmailInput,
	PasswordInput,
}

impl Widget {
	/// The HTML `type` attribute for this widget
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::Widget;
	///
	/// assert_eq!(Widget::EmailInput.input_type(), "email");
	/// assert_eq!(Widget::PasswordInput.input_type(), "password");
	/// ```
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::EmailInput => "email",
			Widget::PasswordInput => "password",
		}
	}

	/// Whether the current value may be echoed back into rendered markup
	pub fn renders_value(&self) -> bool {
		!matches!(self, Widget::PasswordInput)
	}
}

/// One of the four sign-up form fields.
///
/// Variants are declared in tab order, so the derived `Ord` matches the
/// order in which fields are focused and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
	Username,
	Email,
	Password,
	ConfirmPassword,
}

impl Field {
	/// All fields in tab order
	pub const ALL: [Field; 4] = [
		Field::Username,
		Field::Email,
		Field::Password,
		Field::ConfirmPassword,
	];

	/// The field name, also used as the input's `id` and `name` attributes
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::Field;
	///
	/// assert_eq!(Field::ConfirmPassword.name(), "confirmPassword");
	/// ```
	pub fn name(&self) -> &'static str {
		match self {
			Field::Username => "username",
			Field::Email => "email",
			Field::Password => "password",
			Field::ConfirmPassword => "confirmPassword",
		}
	}

	/// Look up a field by its name
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::Field;
	///
	/// assert_eq!(Field::from_name("email"), Some(Field::Email));
	/// assert_eq!(Field::from_name("nickname"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Field> {
		Field::ALL.into_iter().find(|field| field.name() == name)
	}

	/// Human readable label
	pub fn label(&self) -> &'static str {
		match self {
			Field::Username => "Username",
			Field::Email => "Email",
			Field::Password => "Password",
			Field::ConfirmPassword => "Confirm Password",
		}
	}

	pub fn widget(&self) -> Widget {
		match self {
			Field::Username => Widget::TextInput,
			Field::Email => Widget::EmailInput,
			Field::Password | Field::ConfirmPassword => Widget::PasswordInput,
		}
	}

	/// Element id of the schema error message for this field
	pub fn error_id(&self) -> &'static str {
		match self {
			Field::Username => "username-error",
			Field::Email => "email-error",
			Field::Password => "password-error",
			Field::ConfirmPassword => "confirm-password-error",
		}
	}

	/// Element id of the "already taken" banner, for fields that can conflict
	pub fn taken_error_id(&self) -> Option<&'static str> {
		match self {
			Field::Username => Some("username-taken-error"),
			Field::Email => Some("email-taken-error"),
			Field::Password | Field::ConfirmPassword => None,
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A validation failure attached to a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
	pub field: Field,
	pub message: String,
}

impl FieldError {
	pub fn new(field: Field, message: impl Into<String>) -> Self {
		Self {
			field,
			message: message.into(),
		}
	}
}
