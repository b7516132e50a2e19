//! The injected account-creation callback.
//!
//! The controller hands every validated record to a [`Submitter`]. A
//! submitter signals a uniqueness conflict by rejecting with an error whose
//! message is exactly [`EMAIL_TAKEN_REASON`] or [`USERNAME_TAKEN_REASON`];
//! [`ConflictError`] produces those messages. Any other rejection is
//! returned to the caller of the controller untouched.
//!
//! ## Example
//!
//! ```
//! use signup_pages::{ConflictError, submit_fn};
//!
//! let submitter = submit_fn(|record| async move {
//!     if record.username() == "admin" {
//!         return Err(anyhow::Error::from(ConflictError::UsernameTaken));
//!     }
//!     Ok(())
//! });
//! # let _ = submitter;
//! ```

use async_trait::async_trait;
use signup_forms::ValidatedRecord;
use std::future::Future;
use std::sync::Arc;

/// Rejection message meaning the email address is already registered
pub const EMAIL_TAKEN_REASON: &str = "Email already registered";
/// Rejection message meaning the username is already in use
pub const USERNAME_TAKEN_REASON: &str = "Username already taken";

/// Typed rejections recognized by the form controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
	#[error("Email already registered")]
	EmailTaken,
	#[error("Username already taken")]
	UsernameTaken,
}

/// Creates the account for a validated record
#[async_trait]
pub trait Submitter: Send + Sync {
	async fn submit(&self, record: ValidatedRecord) -> anyhow::Result<()>;
}

#[async_trait]
impl<S: Submitter + ?Sized> Submitter for Arc<S> {
	async fn submit(&self, record: ValidatedRecord) -> anyhow::Result<()> {
		(**self).submit(record).await
	}
}

/// A [`Submitter`] backed by an async closure
#[derive(Clone)]
pub struct SubmitFn<F> {
	f: F,
}

/// Wrap an async closure as a [`Submitter`]
pub fn submit_fn<F, Fut>(f: F) -> SubmitFn<F>
where
	F: Fn(ValidatedRecord) -> Fut + Send + Sync,
	Fut: Future<Output = anyhow::Result<()>> + Send,
{
	SubmitFn { f }
}

#[async_trait]
impl<F, Fut> Submitter for SubmitFn<F>
where
	F: Fn(ValidatedRecord) -> Fut + Send + Sync,
	Fut: Future<Output = anyhow::Result<()>> + Send,
{
	async fn submit(&self, record: ValidatedRecord) -> anyhow::Result<()> {
		(self.f)(record).await
	}
}

/// Accepts every record and logs its non-secret fields
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmitter;

#[async_trait]
impl Submitter for LoggingSubmitter {
	async fn submit(&self, record: ValidatedRecord) -> anyhow::Result<()> {
		tracing::info!(
			username = record.username(),
			email = record.email(),
			"sign-up form submitted"
		);
		Ok(())
	}
}
