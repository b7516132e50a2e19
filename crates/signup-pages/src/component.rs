//! Sign-up form controller
//!
//! `FormController` owns one form instance: the raw input, schema errors,
//! conflict banners, the submission state and keyboard focus. UI events map
//! onto discrete transitions:
//!
//! | Event                        | Transition                          |
//! |------------------------------|-------------------------------------|
//! | input changed                | [`FormController::set_value`]       |
//! | submit clicked               | [`FormController::begin_submit`]    |
//! | callback settled             | [`FormController::complete_submit`] |
//! | timer fired                  | [`FormController::tick`]            |
//!
//! [`FormController::submit`] runs the middle two around an awaited
//! [`Submitter`] call.
//!
//! ## Example
//!
//! ```
//! use signup_forms::Field;
//! use signup_pages::{FormController, LoggingSubmitter, SubmitOutcome};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut form = FormController::default();
//! form.set_value(Field::Username, "ValidUser1");
//! form.set_value(Field::Email, "user@example.com");
//! form.set_value(Field::Password, "ValidPass123!");
//! form.set_value(Field::ConfirmPassword, "ValidPass123!");
//!
//! let outcome = form.submit(&LoggingSubmitter).await.unwrap();
//! assert_eq!(outcome, SubmitOutcome::Submitted);
//! assert_eq!(form.status_message(), "Form submitted successfully!");
//! # });
//! ```

use crate::callback::{EMAIL_TAKEN_REASON, Submitter, USERNAME_TAKEN_REASON};
use crate::focus::FocusTarget;
use crate::rendering::render_form;
use crate::settings::FormSettings;
use crate::state::{Conflict, SubmissionState, SubmitOutcome};
use crate::view::{FieldView, FormView};
use signup_forms::{BoundField, Field, FieldError, FormInput, SignUpSchema, ValidatedRecord};
use std::collections::BTreeMap;
use tokio::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
	/// A submission is in flight; the submit button is disabled
	#[error("A submission is already in progress")]
	Busy,
	#[error("No submission is in progress")]
	NotSubmitting,
	/// The callback rejected with an unrecognized error, passed through as is
	#[error(transparent)]
	Unhandled(anyhow::Error),
}

/// State machine and view model for one sign-up form
#[derive(Debug)]
pub struct FormController {
	schema: SignUpSchema,
	settings: FormSettings,
	input: FormInput,
	field_errors: BTreeMap<Field, FieldError>,
	conflicts: BTreeMap<Field, &'static str>,
	state: SubmissionState,
	success_deadline: Option<Instant>,
	focus: Option<FocusTarget>,
	attempted: bool,
}

impl FormController {
	pub fn new(settings: FormSettings) -> Self {
		Self::with_schema(SignUpSchema::new(), settings)
	}

	pub fn with_schema(schema: SignUpSchema, settings: FormSettings) -> Self {
		Self {
			schema,
			settings,
			input: FormInput::default(),
			field_errors: BTreeMap::new(),
			conflicts: BTreeMap::new(),
			state: SubmissionState::Idle,
			success_deadline: None,
			focus: None,
			attempted: false,
		}
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn input(&self) -> &FormInput {
		&self.input
	}

	pub fn value(&self, field: Field) -> &str {
		self.input.value(field)
	}

	/// Record an edit to a field.
	///
	/// Before the first submit attempt edits are not validated. Afterwards
	/// the edited field is re-checked: its error is removed once it passes,
	/// or replaced by the new first failure.
	pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
		self.input.set(field, value);
		if !self.attempted {
			return;
		}
		match self.schema.validate_field(field, &self.input) {
			Ok(_) => {
				if self.field_errors.remove(&field).is_some() {
					tracing::debug!(%field, "field error cleared by edit");
				}
			}
			Err(error) => {
				self.field_errors.insert(field, error);
			}
		}
	}

	pub fn state(&self) -> SubmissionState {
		self.state
	}

	pub fn is_submitting(&self) -> bool {
		self.state.is_submitting()
	}

	pub fn submit_disabled(&self) -> bool {
		self.is_submitting()
	}

	pub fn spinner_visible(&self) -> bool {
		self.is_submitting()
	}

	/// Text of the polite live region
	pub fn status_message(&self) -> &str {
		match self.state {
			SubmissionState::Submitting => &self.settings.submitting_message,
			SubmissionState::Success => &self.settings.success_message,
			SubmissionState::Idle | SubmissionState::Failed(_) => "",
		}
	}

	pub fn field_error(&self, field: Field) -> Option<&FieldError> {
		self.field_errors.get(&field)
	}

	/// Current schema errors in tab order
	pub fn field_errors(&self) -> impl Iterator<Item = &FieldError> {
		self.field_errors.values()
	}

	/// The "already taken" banner shown for a field, if any
	pub fn conflict_message(&self, field: Field) -> Option<&'static str> {
		self.conflicts.get(&field).copied()
	}

	pub fn has_errors(&self) -> bool {
		!self.field_errors.is_empty() || !self.conflicts.is_empty()
	}

	pub fn focus(&self) -> Option<FocusTarget> {
		self.focus
	}

	pub fn focus_on(&mut self, target: FocusTarget) {
		self.focus = Some(target);
	}

	/// Move focus forward in tab order. With nothing focused, the first
	/// field receives focus.
	pub fn focus_next(&mut self) -> FocusTarget {
		let target = self
			.focus
			.map(|current| current.next())
			.unwrap_or(FocusTarget::TAB_ORDER[0]);
		self.focus = Some(target);
		target
	}

	pub fn focus_previous(&mut self) -> FocusTarget {
		let target = self
			.focus
			.map(|current| current.previous())
			.unwrap_or(FocusTarget::Submit);
		self.focus = Some(target);
		target
	}

	/// Handle a submit click.
	///
	/// Returns the record to hand to the callback, or `None` when the
	/// schema rejected the input. In that case field errors are set and
	/// focus moves to the first invalid field. When the record is returned
	/// the form has entered `Submitting` and stale conflict banners are gone.
	pub fn begin_submit(&mut self) -> Result<Option<ValidatedRecord>, ControllerError> {
		if self.is_submitting() {
			return Err(ControllerError::Busy);
		}
		self.attempted = true;
		self.field_errors.clear();

		match self.schema.validate(&self.input) {
			Err(errors) => {
				let first = errors.first().field;
				self.field_errors = errors
					.into_vec()
					.into_iter()
					.map(|error| (error.field, error))
					.collect();
				self.focus = Some(FocusTarget::Field(first));
				tracing::debug!(
					invalid = self.field_errors.len(),
					focus = %first,
					"submission blocked by validation"
				);
				Ok(None)
			}
			Ok(record) => {
				self.conflicts.clear();
				self.success_deadline = None;
				self.state = SubmissionState::Submitting;
				tracing::info!(
					username = record.username(),
					email = record.email(),
					"submitting sign-up form"
				);
				Ok(Some(record))
			}
		}
	}

	/// Interpret the callback's outcome.
	///
	/// A rejection whose message is one of the two conflict reasons shows
	/// the matching banner. Any other rejection is returned as
	/// [`ControllerError::Unhandled`] after the form leaves `Submitting`.
	pub fn complete_submit(
		&mut self,
		outcome: anyhow::Result<()>,
	) -> Result<SubmitOutcome, ControllerError> {
		if !self.is_submitting() {
			return Err(ControllerError::NotSubmitting);
		}

		let error = match outcome {
			Ok(()) => {
				self.state = SubmissionState::Success;
				self.success_deadline = Some(Instant::now() + self.settings.success_clear_delay());
				tracing::info!("sign-up form submitted");
				return Ok(SubmitOutcome::Submitted);
			}
			Err(error) => error,
		};

		let conflict = match error.to_string().as_str() {
			EMAIL_TAKEN_REASON => Conflict::Email,
			USERNAME_TAKEN_REASON => Conflict::Username,
			_ => {
				self.state = SubmissionState::Failed(Conflict::Other);
				tracing::error!(error = %error, "unhandled sign-up submission failure");
				return Err(ControllerError::Unhandled(error));
			}
		};

		if let (Some(field), Some(banner)) = (conflict.field(), conflict.banner()) {
			self.conflicts.insert(field, banner);
		}
		self.state = SubmissionState::Failed(conflict);
		tracing::warn!(?conflict, "sign-up rejected by uniqueness check");
		Ok(SubmitOutcome::Conflict(conflict))
	}

	/// Validate, invoke the callback once, and interpret its outcome
	pub async fn submit<S>(&mut self, submitter: &S) -> Result<SubmitOutcome, ControllerError>
	where
		S: Submitter + ?Sized,
	{
		let Some(record) = self.begin_submit()? else {
			return Ok(SubmitOutcome::Invalid);
		};
		let outcome = submitter.submit(record).await;
		self.complete_submit(outcome)
	}

	/// When the success announcement expires, if one is showing
	pub fn success_deadline(&self) -> Option<Instant> {
		self.success_deadline
	}

	/// Expire the success state once its deadline has passed.
	///
	/// Returns true when the state changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.success_deadline {
			Some(deadline) if now >= deadline && self.state == SubmissionState::Success => {
				self.state = SubmissionState::Idle;
				self.success_deadline = None;
				true
			}
			_ => false,
		}
	}

	/// Sleep until the success announcement expires, then clear it
	pub async fn settle(&mut self) {
		if let Some(deadline) = self.success_deadline {
			tokio::time::sleep_until(deadline).await;
			self.tick(Instant::now());
		}
	}

	/// Snapshot of everything the form currently displays
	pub fn view(&self) -> FormView {
		let fields = Field::ALL
			.into_iter()
			.map(|field| {
				let bound = BoundField::new(field, self.input.value(field))
					.with_error(self.field_errors.get(&field).map(|e| e.message.as_str()))
					.with_conflict(self.conflict_message(field));
				FieldView::from_bound(&bound, self.focus == Some(FocusTarget::Field(field)))
			})
			.collect();

		FormView {
			test_id: self.settings.form_test_id.clone(),
			status_message: self.status_message().to_string(),
			spinner: self
				.spinner_visible()
				.then(|| self.settings.submitting_message.clone()),
			submit_label: self.settings.submit_label.clone(),
			submit_disabled: self.submit_disabled(),
			submit_focused: self.focus == Some(FocusTarget::Submit),
			fields,
		}
	}

	pub fn render(&self) -> String {
		render_form(&self.view())
	}
}

impl Default for FormController {
	fn default() -> Self {
		Self::new(FormSettings::default())
	}
}
