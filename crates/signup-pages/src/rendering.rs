//! HTML rendering for the sign-up form
//!
//! Renders a [`FormView`] to markup. Attribute order is stable so the output
//! can be compared directly. All text and attribute values are escaped.

use crate::view::{FieldView, FormView, MessageView};

/// HTML escape utility
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Ordered attribute builder for data-* and ARIA attributes
#[derive(Debug, Clone, Default)]
pub struct ElementAttrs {
	attrs: Vec<(String, Option<String>)>,
}

impl ElementAttrs {
	pub fn new() -> Self {
		Self { attrs: Vec::new() }
	}

	/// Add an attribute, replacing an earlier one with the same name
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key.into(), Some(value.into()));
		self
	}

	/// Add a valueless boolean attribute such as `disabled`
	pub fn flag(mut self, key: impl Into<String>) -> Self {
		self.set(key.into(), None);
		self
	}

	pub fn id(self, value: impl Into<String>) -> Self {
		self.attr("id", value)
	}

	/// Add a data-* attribute
	pub fn data(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attr(format!("data-{}", key.into()), value)
	}

	/// Add an ARIA attribute
	pub fn aria(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attr(format!("aria-{}", key.into()), value)
	}

	/// Add a CSS class
	pub fn class(mut self, value: impl Into<String>) -> Self {
		let value = value.into();
		match self.attrs.iter_mut().find(|(k, _)| k == "class") {
			Some((_, Some(existing))) => {
				existing.push(' ');
				existing.push_str(&value);
			}
			_ => self.set("class".to_string(), Some(value)),
		}
		self
	}

	fn set(&mut self, key: String, value: Option<String>) {
		match self.attrs.iter_mut().find(|(k, _)| *k == key) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((key, value)),
		}
	}

	/// Render as ` key="value"` pairs, leading space included
	pub fn render(&self) -> String {
		let mut html = String::new();
		for (key, value) in &self.attrs {
			html.push(' ');
			html.push_str(key);
			if let Some(value) = value {
				html.push_str(&format!(r#"="{}""#, html_escape(value)));
			}
		}
		html
	}
}

fn element(tag: &str, attrs: &ElementAttrs, text: &str) -> String {
	format!("<{tag}{}>{}</{tag}>", attrs.render(), html_escape(text))
}

fn render_message(message: &MessageView) -> String {
	let attrs = ElementAttrs::new()
		.id(message.id)
		.data("testid", message.id)
		.class("field-error");
	element("p", &attrs, &message.text)
}

fn render_field(view: &FieldView) -> String {
	let mut html = String::from(r#"<div class="form-field">"#);
	html.push_str(&element(
		"label",
		&ElementAttrs::new().attr("for", view.id),
		view.label,
	));

	let mut input = ElementAttrs::new()
		.id(view.id)
		.data("testid", view.id)
		.attr("name", view.name)
		.attr("type", view.input_type);
	if !view.value.is_empty() {
		input = input.attr("value", view.value.as_str());
	}
	input = input.aria("invalid", if view.aria_invalid { "true" } else { "false" });
	if let Some(describedby) = &view.aria_describedby {
		input = input.aria("describedby", describedby.as_str());
	}
	if view.focused {
		input = input.flag("autofocus");
	}
	html.push_str(&format!("<input{}>", input.render()));

	for message in view.messages() {
		html.push_str(&render_message(message));
	}
	html.push_str("</div>");
	html
}

/// Render the whole form
///
/// # Examples
///
/// ```
/// use signup_pages::{FormController, render_form};
///
/// let controller = FormController::default();
/// let html = render_form(&controller.view());
/// assert!(html.starts_with(r#"<form data-testid="sign-up-form" novalidate>"#));
/// assert!(html.contains(r#"<label for="confirmPassword">Confirm Password</label>"#));
/// ```
pub fn render_form(view: &FormView) -> String {
	let mut html = format!(
		"<form{}>",
		ElementAttrs::new()
			.data("testid", view.test_id.as_str())
			.flag("novalidate")
			.render()
	);

	let live_region = ElementAttrs::new()
		.aria("live", "polite")
		.aria("atomic", "true")
		.data("testid", "form-status-message")
		.class("visually-hidden");
	html.push_str(&element("div", &live_region, &view.status_message));

	if let Some(spinner) = &view.spinner {
		let overlay = ElementAttrs::new()
			.data("testid", "spinner-overlay")
			.class("spinner-overlay");
		html.push_str(&element("div", &overlay, spinner));
	}

	for field in &view.fields {
		html.push_str(&render_field(field));
	}

	let mut button = ElementAttrs::new().attr("type", "submit");
	if view.submit_disabled {
		button = button.flag("disabled");
	}
	if view.submit_focused {
		button = button.flag("autofocus");
	}
	html.push_str(&element("button", &button, &view.submit_label));
	html.push_str("</form>");
	html
}
