//! Sign-up Schema Integration Tests
//!
//! Table tests for every rule of the sign-up schema, driven through the
//! public `validate` entry point the way the form controller uses it.

use rstest::{fixture, rstest};
use signup_forms::{Field, FormInput, validate, validate_field};

#[fixture]
fn valid_input() -> FormInput {
	FormInput {
		username: "ValidUser1".to_string(),
		email: "user@example.com".to_string(),
		password: "ValidPass123!".to_string(),
		confirm_password: "ValidPass123!".to_string(),
	}
}

fn error_for(input: &FormInput, field: Field) -> String {
	let errors = validate(input).expect_err("input should be rejected");
	errors
		.get(field)
		.unwrap_or_else(|| panic!("no error for {field}"))
		.message
		.clone()
}

// ============================================================================
// Email
// ============================================================================

#[rstest]
#[case("", "Email is required")]
#[case("    ", "Email is required")]
#[case("invalid-email", "Invalid email format")]
#[case("user@example", "Invalid email format")]
fn test_email_errors(mut valid_input: FormInput, #[case] email: &str, #[case] expected: &str) {
	valid_input.email = email.to_string();
	assert_eq!(error_for(&valid_input, Field::Email), expected);
}

#[rstest]
fn test_email_trimmed_in_record(mut valid_input: FormInput) {
	valid_input.email = "  user@example.com  ".to_string();
	let record = validate(&valid_input).unwrap();
	assert_eq!(record.email(), "user@example.com");
}

// ============================================================================
// Username
// ============================================================================

#[rstest]
#[case("", "Username is required")]
#[case("ab", "Username must be at least 3 characters")]
#[case(&"A".repeat(21), "Username must be at most 20 characters")]
#[case("invalid user!", "Username can only contain letters, numbers, underscores, and hyphens")]
#[case("alllowercase", "Username must contain at least one uppercase letter")]
#[case("ALLUPPERCASE", "Username must contain at least one lowercase letter")]
#[case("NoNumbersHere", "Username must contain at least one number")]
fn test_username_errors(
	mut valid_input: FormInput,
	#[case] username: &str,
	#[case] expected: &str,
) {
	valid_input.username = username.to_string();
	assert_eq!(error_for(&valid_input, Field::Username), expected);
}

#[rstest]
#[case("Ab1")]
#[case("Abc1")]
#[case("Valid_User-1")]
#[case("Ab345678901234567890")]
fn test_username_accepted(mut valid_input: FormInput, #[case] username: &str) {
	valid_input.username = username.to_string();
	assert!(validate(&valid_input).is_ok());
}

#[rstest]
fn test_whitespace_only_username_reported_as_required(mut valid_input: FormInput) {
	valid_input.username = "   ".to_string();
	assert_eq!(error_for(&valid_input, Field::Username), "Username is required");
}

// ============================================================================
// Password and confirmation
// ============================================================================

#[rstest]
#[case("", "Password is required")]
#[case("short!", "Password must be at least 8 characters")]
#[case(&format!("{}!", "a".repeat(128)), "Password must be at most 128 characters")]
#[case("Password123", "Password must contain at least one special character")]
#[case("alllowercase123!", "Password must contain at least one uppercase letter")]
#[case("PASSWORD123!", "Password must contain at least one lowercase letter")]
#[case("Password!", "Password must contain at least one number")]
fn test_password_errors(
	mut valid_input: FormInput,
	#[case] password: &str,
	#[case] expected: &str,
) {
	valid_input.password = password.to_string();
	valid_input.confirm_password = password.to_string();
	assert_eq!(error_for(&valid_input, Field::Password), expected);
}

#[rstest]
#[case("Abcdef1!")]
#[case(&format!("Aa1!{}", "a".repeat(124)))]
fn test_password_accepted_at_length_bounds(mut valid_input: FormInput, #[case] password: &str) {
	valid_input.password = password.to_string();
	valid_input.confirm_password = password.to_string();
	let record = validate(&valid_input).unwrap();
	assert_eq!(record.password(), password);
}

#[rstest]
fn test_password_mismatch(mut valid_input: FormInput) {
	valid_input.password = "Password123!".to_string();
	valid_input.confirm_password = "DifferentPass123!".to_string();
	assert_eq!(
		error_for(&valid_input, Field::ConfirmPassword),
		"Passwords do not match"
	);
}

#[rstest]
fn test_password_trimmed_in_record(mut valid_input: FormInput) {
	valid_input.password = "  Password123!  ".to_string();
	valid_input.confirm_password = "  Password123!  ".to_string();
	let record = validate(&valid_input).unwrap();
	assert_eq!(record.password(), "Password123!");
	assert_eq!(record.confirm_password(), "Password123!");
}

// ============================================================================
// Whole form
// ============================================================================

#[rstest]
#[case(Field::Username)]
#[case(Field::Email)]
#[case(Field::Password)]
fn test_any_empty_required_field_blocks(mut valid_input: FormInput, #[case] field: Field) {
	valid_input.set(field, "");
	let errors = validate(&valid_input).unwrap_err();
	assert!(errors.contains(field));
}

#[rstest]
fn test_one_error_per_field() {
	let errors = validate(&FormInput::default()).unwrap_err();
	let fields: Vec<Field> = errors.fields().collect();
	// Empty confirmation equals the (invalid) empty password, so only the
	// three required fields report.
	assert_eq!(fields, vec![Field::Username, Field::Email, Field::Password]);
	assert_eq!(errors.as_slice().len(), 3);
}

#[rstest]
fn test_validate_field_matches_whole_form(mut valid_input: FormInput) {
	valid_input.username = "ALLUPPERCASE".to_string();
	let single = validate_field(Field::Username, &valid_input).unwrap_err();
	let whole = validate(&valid_input).unwrap_err();
	assert_eq!(whole.get(Field::Username), Some(&single));
	assert_eq!(
		validate_field(Field::Email, &valid_input).unwrap(),
		"user@example.com"
	);
}
