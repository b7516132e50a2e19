//! # Signup
//!
//! An accessible account-registration form.
//!
//! The form collects a username, an email address and a password typed twice,
//! validates them against a fixed schema, and hands the trimmed record to an
//! injected callback. Rejections meaning "already taken" become per-field
//! banners; everything the user sees is exposed as a view with ARIA state.
//!
//! ## Crates
//!
//! - [`forms`]: the synchronous schema (fields, validators, errors)
//! - [`pages`]: the controller, submission lifecycle, focus and rendering
//!
//! ## Quick Example
//!
//! ```
//! use signup::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let submitter = submit_fn(|record: ValidatedRecord| async move {
//!     if record.username() == "TakenUser1" {
//!         return Err(anyhow::Error::from(ConflictError::UsernameTaken));
//!     }
//!     Ok(())
//! });
//!
//! let mut form = FormController::default();
//! form.set_value(Field::Username, "TakenUser1");
//! form.set_value(Field::Email, "user@example.com");
//! form.set_value(Field::Password, "ValidPass123!");
//! form.set_value(Field::ConfirmPassword, "ValidPass123!");
//!
//! let outcome = form.submit(&submitter).await.unwrap();
//! assert_eq!(outcome, SubmitOutcome::Conflict(Conflict::Username));
//! assert_eq!(
//!     form.conflict_message(Field::Username),
//!     Some("This username is already taken")
//! );
//! # });
//! ```

pub use signup_forms as forms;
pub use signup_pages as pages;

/// Commonly used types
pub mod prelude {
	pub use signup_forms::{
		Field, FieldError, FormInput, SignUpSchema, ValidatedRecord, ValidationErrors, validate,
	};
	pub use signup_pages::{
		Conflict, ConflictError, ControllerError, FocusTarget, FormController, FormSettings,
		FormView, LoggingSubmitter, SubmissionState, SubmitOutcome, Submitter, render_form,
		submit_fn,
	};
}
