//! # signup-pages
//!
//! Interactive layer of the account-registration form.
//!
//! [`FormController`] drives one form: it validates with the schema from
//! `signup-forms`, invokes an injected [`Submitter`] exactly once per valid
//! submission, maps "already taken" rejections onto per-field banners, and
//! exposes a [`FormView`] carrying the ARIA state and keyboard focus.
//! [`render_form`] turns that view into HTML.
//!
//! ## Modules
//!
//! - [`callback`]: the submitter seam and recognized rejections
//! - [`component`]: the controller state machine
//! - [`focus`]: tab order
//! - [`rendering`]: HTML output
//! - [`settings`]: configurable texts and timings
//! - [`state`]: submission lifecycle
//! - [`view`]: render-ready snapshots

pub mod callback;
pub mod component;
pub mod focus;
pub mod rendering;
pub mod settings;
pub mod state;
pub mod view;

pub use callback::{
	ConflictError, EMAIL_TAKEN_REASON, LoggingSubmitter, SubmitFn, Submitter,
	USERNAME_TAKEN_REASON, submit_fn,
};
pub use component::{ControllerError, FormController};
pub use focus::FocusTarget;
pub use rendering::{ElementAttrs, html_escape, render_form};
pub use settings::{FormSettings, SettingsError};
pub use state::{Conflict, SubmissionState, SubmitOutcome};
pub use view::{FieldView, FormView, MessageView};
