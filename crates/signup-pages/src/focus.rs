//! Keyboard focus targets and tab order

use serde::Serialize;
use signup_forms::Field;

/// An element of the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
	Field(Field),
	Submit,
}

impl FocusTarget {
	/// Tab order: username, email, password, confirmPassword, submit
	pub const TAB_ORDER: [FocusTarget; 5] = [
		FocusTarget::Field(Field::Username),
		FocusTarget::Field(Field::Email),
		FocusTarget::Field(Field::Password),
		FocusTarget::Field(Field::ConfirmPassword),
		FocusTarget::Submit,
	];

	fn position(&self) -> usize {
		match self {
			FocusTarget::Field(field) => Field::ALL
				.iter()
				.position(|f| f == field)
				.unwrap_or_default(),
			FocusTarget::Submit => Self::TAB_ORDER.len() - 1,
		}
	}

	/// The next target in tab order, wrapping after the submit button
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::Field;
	/// use signup_pages::FocusTarget;
	///
	/// let target = FocusTarget::Field(Field::ConfirmPassword);
	/// assert_eq!(target.next(), FocusTarget::Submit);
	/// assert_eq!(FocusTarget::Submit.next(), FocusTarget::Field(Field::Username));
	/// ```
	pub fn next(&self) -> FocusTarget {
		Self::TAB_ORDER[(self.position() + 1) % Self::TAB_ORDER.len()]
	}

	/// The previous target in tab order, wrapping before the first field
	pub fn previous(&self) -> FocusTarget {
		let len = Self::TAB_ORDER.len();
		Self::TAB_ORDER[(self.position() + len - 1) % len]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_forward_walk_visits_every_target_once() {
		let mut target = FocusTarget::Field(Field::Username);
		let mut visited = vec![target];
		for _ in 1..FocusTarget::TAB_ORDER.len() {
			target = target.next();
			visited.push(target);
		}
		assert_eq!(visited, FocusTarget::TAB_ORDER.to_vec());
		assert_eq!(target.next(), FocusTarget::Field(Field::Username));
	}

	#[rstest]
	fn test_previous_inverts_next() {
		for target in FocusTarget::TAB_ORDER {
			assert_eq!(target.next().previous(), target);
		}
		assert_eq!(
			FocusTarget::Field(Field::Username).previous(),
			FocusTarget::Submit
		);
	}
}
