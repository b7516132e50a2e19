//! Form controller settings
//!
//! Settings are plain serde data with defaults for every key, so a JSON
//! document only needs the keys it changes. Environment variables prefixed
//! with `SIGNUP_` are applied on top.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable prefix for setting overrides
pub const ENV_PREFIX: &str = "SIGNUP_";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Invalid settings document: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Invalid value for {key}: {value:?}")]
	InvalidValue { key: String, value: String },
}

/// Settings for a sign-up form instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// How long the success announcement stays up, in milliseconds
	pub success_clear_delay_ms: u64,
	pub submit_label: String,
	/// Live region and busy indicator text while submitting
	pub submitting_message: String,
	/// Live region text after a successful submission
	pub success_message: String,
	pub form_test_id: String,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			success_clear_delay_ms: 4000,
			submit_label: "Sign Up".to_string(),
			submitting_message: "Submitting...".to_string(),
			success_message: "Form submitted successfully!".to_string(),
			form_test_id: "sign-up-form".to_string(),
		}
	}
}

impl FormSettings {
	/// Parse settings from JSON, filling missing keys with defaults
	///
	/// # Examples
	///
	/// ```
	/// use signup_pages::FormSettings;
	///
	/// let settings = FormSettings::from_json(r#"{"submit_label": "Create account"}"#).unwrap();
	/// assert_eq!(settings.submit_label, "Create account");
	/// assert_eq!(settings.success_clear_delay_ms, 4000);
	/// ```
	pub fn from_json(json: &str) -> Result<Self, SettingsError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Apply `SIGNUP_*` overrides from the process environment
	pub fn with_env_overrides(self) -> Result<Self, SettingsError> {
		self.with_overrides(|key| std::env::var(key).ok())
	}

	/// Apply overrides from an arbitrary key lookup.
	///
	/// Keys are the upper-cased setting names with the `SIGNUP_` prefix.
	///
	/// # Examples
	///
	/// ```
	/// use signup_pages::FormSettings;
	///
	/// let settings = FormSettings::default()
	///     .with_overrides(|key| (key == "SIGNUP_SUCCESS_CLEAR_DELAY_MS").then(|| "250".to_string()))
	///     .unwrap();
	/// assert_eq!(settings.success_clear_delay_ms, 250);
	/// ```
	pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, SettingsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let key = |name: &str| format!("{}{}", ENV_PREFIX, name.to_uppercase());

		if let Some(value) = lookup(&key("success_clear_delay_ms")) {
			let parsed = value.trim().parse::<u64>();
			self.success_clear_delay_ms = parsed.map_err(|_| SettingsError::InvalidValue {
				key: key("success_clear_delay_ms"),
				value,
			})?;
		}
		if let Some(value) = lookup(&key("submit_label")) {
			self.submit_label = value;
		}
		if let Some(value) = lookup(&key("submitting_message")) {
			self.submitting_message = value;
		}
		if let Some(value) = lookup(&key("success_message")) {
			self.success_message = value;
		}
		if let Some(value) = lookup(&key("form_test_id")) {
			self.form_test_id = value;
		}
		Ok(self)
	}

	pub fn success_clear_delay(&self) -> Duration {
		Duration::from_millis(self.success_clear_delay_ms)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	#[rstest]
	fn test_defaults() {
		let settings = FormSettings::default();
		assert_eq!(settings.success_clear_delay(), Duration::from_secs(4));
		assert_eq!(settings.submitting_message, "Submitting...");
		assert_eq!(settings.success_message, "Form submitted successfully!");
		assert_eq!(settings.submit_label, "Sign Up");
	}

	#[rstest]
	fn test_empty_json_is_default() {
		assert_eq!(FormSettings::from_json("{}").unwrap(), FormSettings::default());
	}

	#[rstest]
	fn test_malformed_json_rejected() {
		let result = FormSettings::from_json(r#"{"success_clear_delay_ms": "soon"}"#);
		assert!(matches!(result, Err(SettingsError::Json(_))));
	}

	#[rstest]
	fn test_overrides_applied() {
		let env: HashMap<&str, &str> = HashMap::from([
			("SIGNUP_SUBMIT_LABEL", "Register"),
			("SIGNUP_SUCCESS_MESSAGE", "Welcome!"),
		]);
		let settings = FormSettings::default()
			.with_overrides(|key| env.get(key).map(|v| v.to_string()))
			.unwrap();
		assert_eq!(settings.submit_label, "Register");
		assert_eq!(settings.success_message, "Welcome!");
		assert_eq!(settings.success_clear_delay_ms, 4000);
	}

	#[rstest]
	fn test_invalid_delay_override_rejected() {
		let result = FormSettings::default().with_overrides(|key| {
			(key == "SIGNUP_SUCCESS_CLEAR_DELAY_MS").then(|| "four seconds".to_string())
		});
		match result {
			Err(SettingsError::InvalidValue { key, value }) => {
				assert_eq!(key, "SIGNUP_SUCCESS_CLEAR_DELAY_MS");
				assert_eq!(value, "four seconds");
			}
			other => panic!("expected invalid value, got {:?}", other),
		}
	}
}
