use crate::field::{Field, Widget};

/// BoundField represents a field bound to its current value and messages.
///
/// It derives the accessibility attributes of the rendered input: the
/// input is invalid while either message is shown, and `aria-describedby`
/// lists exactly the ids of the messages that are visible.
#[derive(Debug, Clone, Copy)]
pub struct BoundField<'a> {
	field: Field,
	value: &'a str,
	error: Option<&'a str>,
	conflict: Option<&'a str>,
}

impl<'a> BoundField<'a> {
	/// Bind a field to its raw value
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{BoundField, Field};
	///
	/// let bound = BoundField::new(Field::Email, "user@example.com");
	/// assert_eq!(bound.id_for_label(), "email");
	/// assert!(!bound.aria_invalid());
	/// assert_eq!(bound.aria_describedby(), None);
	/// ```
	pub fn new(field: Field, value: &'a str) -> Self {
		Self {
			field,
			value,
			error: None,
			conflict: None,
		}
	}

	/// Attach the schema error message, if any
	pub fn with_error(mut self, error: Option<&'a str>) -> Self {
		self.error = error;
		self
	}

	/// Attach the "already taken" message, if any.
	///
	/// Ignored for fields that cannot conflict.
	pub fn with_conflict(mut self, conflict: Option<&'a str>) -> Self {
		if self.field.taken_error_id().is_some() {
			self.conflict = conflict;
		}
		self
	}

	pub fn field(&self) -> Field {
		self.field
	}

	/// Get the HTML name attribute
	pub fn html_name(&self) -> &'static str {
		self.field.name()
	}

	/// Get the HTML id attribute, referenced by the label's `for`
	pub fn id_for_label(&self) -> &'static str {
		self.field.name()
	}

	pub fn label(&self) -> &'static str {
		self.field.label()
	}

	pub fn widget(&self) -> Widget {
		self.field.widget()
	}

	pub fn value(&self) -> &'a str {
		self.value
	}

	pub fn error(&self) -> Option<&'a str> {
		self.error
	}

	pub fn conflict(&self) -> Option<&'a str> {
		self.conflict
	}

	pub fn aria_invalid(&self) -> bool {
		self.error.is_some() || self.conflict.is_some()
	}

	/// Ids of the message elements currently visible for this field
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{BoundField, Field};
	///
	/// let bound = BoundField::new(Field::Username, "ab")
	///     .with_error(Some("Username must be at least 3 characters"))
	///     .with_conflict(Some("This username is already taken"));
	///
	/// assert_eq!(bound.visible_message_ids(), vec!["username-error", "username-taken-error"]);
	/// ```
	pub fn visible_message_ids(&self) -> Vec<&'static str> {
		let mut ids = Vec::with_capacity(2);
		if self.error.is_some() {
			ids.push(self.field.error_id());
		}
		if self.conflict.is_some()
			&& let Some(id) = self.field.taken_error_id()
		{
			ids.push(id);
		}
		ids
	}

	/// Value for `aria-describedby`, or `None` when nothing is shown
	pub fn aria_describedby(&self) -> Option<String> {
		let ids = self.visible_message_ids();
		if ids.is_empty() {
			None
		} else {
			Some(ids.join(" "))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_marks_invalid() {
		let bound = BoundField::new(Field::Password, "").with_error(Some("Password is required"));
		assert!(bound.aria_invalid());
		assert_eq!(bound.aria_describedby().as_deref(), Some("password-error"));
	}

	#[rstest]
	fn test_conflict_alone_marks_invalid() {
		let bound = BoundField::new(Field::Email, "user@example.com")
			.with_conflict(Some("This email is already registered"));
		assert!(bound.aria_invalid());
		assert_eq!(bound.aria_describedby().as_deref(), Some("email-taken-error"));
	}

	#[rstest]
	fn test_conflict_ignored_for_password_fields() {
		let bound = BoundField::new(Field::ConfirmPassword, "").with_conflict(Some("taken"));
		assert_eq!(bound.conflict(), None);
		assert!(!bound.aria_invalid());
	}

	#[rstest]
	fn test_html_attributes() {
		let bound = BoundField::new(Field::ConfirmPassword, "secret");
		assert_eq!(bound.html_name(), "confirmPassword");
		assert_eq!(bound.id_for_label(), "confirmPassword");
		assert_eq!(bound.label(), "Confirm Password");
		assert_eq!(bound.widget(), Widget::PasswordInput);
	}
}
