//! Sign-up Flow Tests
//!
//! End-to-end scenarios through the `signup` facade: a user fills the form,
//! hits a username conflict, corrects it and signs up.

use rstest::rstest;
use signup::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_conflict_then_successful_signup() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = calls.clone();
	let submitter = submit_fn(move |record: ValidatedRecord| {
		let counter = counter.clone();
		async move {
			counter.fetch_add(1, Ordering::SeqCst);
			if record.username() == "TakenUser1" {
				return Err(anyhow::Error::from(ConflictError::UsernameTaken));
			}
			Ok(())
		}
	});

	let mut form = FormController::default();
	form.set_value(Field::Username, "TakenUser1");
	form.set_value(Field::Email, " new@example.com ");
	form.set_value(Field::Password, "ValidPass123!");
	form.set_value(Field::ConfirmPassword, "ValidPass123!");

	let outcome = form.submit(&submitter).await.unwrap();
	assert_eq!(outcome, SubmitOutcome::Conflict(Conflict::Username));
	assert_eq!(
		form.view().field(Field::Username).unwrap().aria_describedby.as_deref(),
		Some("username-taken-error")
	);

	form.set_value(Field::Username, "FreshUser1");
	let outcome = form.submit(&submitter).await.unwrap();

	assert_eq!(outcome, SubmitOutcome::Submitted);
	assert_eq!(calls.load(Ordering::SeqCst), 2);
	assert_eq!(form.conflict_message(Field::Username), None);
	assert!(form.render().contains("Form submitted successfully!"));

	form.settle().await;
	assert_eq!(form.state(), SubmissionState::Idle);
	assert!(!form.render().contains("Form submitted successfully!"));
}

#[rstest]
fn test_facade_exposes_schema() {
	let input = FormInput {
		username: "ab".to_string(),
		..FormInput::default()
	};
	let errors = signup::forms::validate(&input).unwrap_err();
	assert_eq!(errors.first().field, Field::Username);
	assert_eq!(
		errors.first().message,
		"Username must be at least 3 characters"
	);
}
