//! Render-ready snapshot of the form
//!
//! A `FormView` captures everything a renderer or an assistive-technology
//! test needs: the live region text, busy indicator, button state, and for
//! each input its label, ARIA attributes and visible messages.

use serde::Serialize;
use signup_forms::{BoundField, Field};

/// A visible message element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
	pub id: &'static str,
	pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
	pub field: Field,
	pub id: &'static str,
	pub name: &'static str,
	pub label: &'static str,
	pub input_type: &'static str,
	/// Current value; always empty for password inputs
	pub value: String,
	pub aria_invalid: bool,
	pub aria_describedby: Option<String>,
	pub error: Option<MessageView>,
	pub conflict: Option<MessageView>,
	pub focused: bool,
}

impl FieldView {
	pub(crate) fn from_bound(bound: &BoundField<'_>, focused: bool) -> Self {
		let field = bound.field();
		let widget = bound.widget();
		Self {
			field,
			id: bound.id_for_label(),
			name: bound.html_name(),
			label: bound.label(),
			input_type: widget.input_type(),
			value: if widget.renders_value() {
				bound.value().to_string()
			} else {
				String::new()
			},
			aria_invalid: bound.aria_invalid(),
			aria_describedby: bound.aria_describedby(),
			error: bound.error().map(|text| MessageView {
				id: field.error_id(),
				text: text.to_string(),
			}),
			conflict: bound
				.conflict()
				.zip(field.taken_error_id())
				.map(|(text, id)| MessageView {
					id,
					text: text.to_string(),
				}),
			focused,
		}
	}

	/// Visible messages for this field, schema error first
	pub fn messages(&self) -> impl Iterator<Item = &MessageView> {
		self.error.iter().chain(self.conflict.iter())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
	pub test_id: String,
	/// Text of the polite live region
	pub status_message: String,
	/// Busy indicator text, present only while submitting
	pub spinner: Option<String>,
	pub submit_label: String,
	pub submit_disabled: bool,
	pub submit_focused: bool,
	/// One entry per field, in tab order
	pub fields: Vec<FieldView>,
}

impl FormView {
	pub fn field(&self, field: Field) -> Option<&FieldView> {
		self.fields.iter().find(|view| view.field == field)
	}

	/// Every visible message in document order
	pub fn messages(&self) -> impl Iterator<Item = &MessageView> {
		self.fields.iter().flat_map(FieldView::messages)
	}

	/// Fields currently marked `aria-invalid`
	pub fn invalid_fields(&self) -> Vec<Field> {
		self.fields
			.iter()
			.filter(|view| view.aria_invalid)
			.map(|view| view.field)
			.collect()
	}

	pub fn spinner_visible(&self) -> bool {
		self.spinner.is_some()
	}
}
