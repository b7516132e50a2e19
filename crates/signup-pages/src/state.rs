//! Submission lifecycle states

use serde::Serialize;
use signup_forms::Field;

/// Why a submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conflict {
	Email,
	Username,
	/// An unrecognized rejection, handed back to the caller
	Other,
}

impl Conflict {
	/// Field whose banner shows this conflict
	pub fn field(&self) -> Option<Field> {
		match self {
			Conflict::Email => Some(Field::Email),
			Conflict::Username => Some(Field::Username),
			Conflict::Other => None,
		}
	}

	/// Banner text shown next to the conflicting field
	pub fn banner(&self) -> Option<&'static str> {
		match self {
			Conflict::Email => Some("This email is already registered"),
			Conflict::Username => Some("This username is already taken"),
			Conflict::Other => None,
		}
	}
}

/// Where the form is in its submission lifecycle.
///
/// ```text
/// Idle ──submit, schema fails──▶ Idle (field errors, focus moved)
/// Idle ──submit, schema passes──▶ Submitting ──ok──▶ Success ──delay──▶ Idle
///                                            └─err─▶ Failed(conflict)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "conflict", rename_all = "snake_case")]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
	/// Transient; expires after the configured delay
	Success,
	Failed(Conflict),
}

impl SubmissionState {
	pub fn is_submitting(&self) -> bool {
		matches!(self, SubmissionState::Submitting)
	}
}

/// Result of one submit attempt that did not end in an unhandled rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The schema rejected the input; the callback was not invoked
	Invalid,
	/// The callback resolved
	Submitted,
	/// The callback rejected with a recognized conflict
	Conflict(Conflict),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Conflict::Email, Some(Field::Email), Some("This email is already registered"))]
	#[case(Conflict::Username, Some(Field::Username), Some("This username is already taken"))]
	#[case(Conflict::Other, None, None)]
	fn test_conflict_banners(
		#[case] conflict: Conflict,
		#[case] field: Option<Field>,
		#[case] banner: Option<&str>,
	) {
		assert_eq!(conflict.field(), field);
		assert_eq!(conflict.banner(), banner);
	}

	#[rstest]
	fn test_state_serialization() {
		let json = serde_json::to_value(SubmissionState::Failed(Conflict::Email)).unwrap();
		assert_eq!(json["state"], "failed");
		assert_eq!(json["conflict"], "email");
		assert_eq!(SubmissionState::default(), SubmissionState::Idle);
	}
}
