// SPDX-License-Identifier: MPL-2.0
//! Authentication form model and validation rules.
//!
//! Validation is a pure function of the [`AuthMode`] and the entered
//! [`Credentials`]. Every rule is evaluated on each call so the user sees all
//! problems at once rather than one at a time.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose structural e-mail check: `something@something.something`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("e-mail pattern is a valid regex"));

/// Whether the form signs an existing member in or registers a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    #[must_use]
    pub fn is_signup(self) -> bool {
        matches!(self, AuthMode::Signup)
    }
}

/// Identifies one input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];
}

/// Raw values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Credentials {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// A single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    UsernameRequired,
    PasswordMismatch,
}

impl FieldError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::EmailRequired => "auth-error-email-required",
            FieldError::EmailInvalid => "auth-error-email-invalid",
            FieldError::PasswordRequired => "auth-error-password-required",
            FieldError::PasswordTooShort => "auth-error-password-too-short",
            FieldError::UsernameRequired => "auth-error-username-required",
            FieldError::PasswordMismatch => "auth-error-password-mismatch",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EmailRequired => write!(f, "Email is required"),
            FieldError::EmailInvalid => write!(f, "Email is invalid"),
            FieldError::PasswordRequired => write!(f, "Password is required"),
            FieldError::PasswordTooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_LEN} characters")
            }
            FieldError::UsernameRequired => write!(f, "Username is required"),
            FieldError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

/// One error slot per form field; `None` means the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Username => self.username = None,
            Field::Email => self.email = None,
            Field::Password => self.password = None,
            Field::ConfirmPassword => self.confirm_password = None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

/// Credentials that passed validation, shaped by the mode they were entered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedCredentials {
    Login {
        email: String,
        password: String,
    },
    Signup {
        username: String,
        email: String,
        password: String,
    },
}

impl ValidatedCredentials {
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            ValidatedCredentials::Login { email, .. }
            | ValidatedCredentials::Signup { email, .. } => email,
        }
    }

    #[must_use]
    pub fn password(&self) -> &str {
        match self {
            ValidatedCredentials::Login { password, .. }
            | ValidatedCredentials::Signup { password, .. } => password,
        }
    }

    /// Username chosen at sign-up; `None` for a plain login.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            ValidatedCredentials::Login { .. } => None,
            ValidatedCredentials::Signup { username, .. } => Some(username),
        }
    }
}

/// Returns `true` when `email` has the loose `x@y.z` shape.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates the form for the given mode.
///
/// All rules run on every call; the returned [`FieldErrors`] replaces any
/// previous errors wholesale.
pub fn validate(
    mode: AuthMode,
    fields: &Credentials,
) -> Result<ValidatedCredentials, FieldErrors> {
    let mut errors = FieldErrors::default();

    if fields.email.is_empty() {
        errors.email = Some(FieldError::EmailRequired);
    } else if !is_plausible_email(&fields.email) {
        errors.email = Some(FieldError::EmailInvalid);
    }

    if fields.password.is_empty() {
        errors.password = Some(FieldError::PasswordRequired);
    } else if fields.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        errors.password = Some(FieldError::PasswordTooShort);
    }

    if mode.is_signup() {
        if fields.username.is_empty() {
            errors.username = Some(FieldError::UsernameRequired);
        }
        if fields.password != fields.confirm_password {
            errors.confirm_password = Some(FieldError::PasswordMismatch);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(match mode {
        AuthMode::Login => ValidatedCredentials::Login {
            email: fields.email.clone(),
            password: fields.password.clone(),
        },
        AuthMode::Signup => ValidatedCredentials::Signup {
            username: fields.username.clone(),
            email: fields.email.clone(),
            password: fields.password.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
            ..Credentials::default()
        }
    }

    #[test]
    fn empty_email_is_required() {
        let errors = validate(AuthMode::Login, &login("", "secret1")).unwrap_err();
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn malformed_email_is_invalid() {
        for email in ["plainaddress", "a@b", "@.", "a @b.c d"] {
            let errors = validate(AuthMode::Login, &login(email, "secret1")).unwrap_err();
            assert_eq!(errors.email, Some(FieldError::EmailInvalid), "{email}");
        }
    }

    #[test]
    fn email_check_is_a_loose_substring_match() {
        assert!(is_plausible_email("player@club.com"));
        assert!(is_plausible_email("first last@club.org"));
        assert!(!is_plausible_email("player@club"));
    }

    #[test]
    fn password_rules_apply_in_order() {
        let errors = validate(AuthMode::Login, &login("a@b.co", "")).unwrap_err();
        assert_eq!(errors.password, Some(FieldError::PasswordRequired));

        let errors = validate(AuthMode::Login, &login("a@b.co", "12345")).unwrap_err();
        assert_eq!(errors.password, Some(FieldError::PasswordTooShort));

        assert!(validate(AuthMode::Login, &login("a@b.co", "123456")).is_ok());
    }

    #[test]
    fn login_ignores_signup_only_fields() {
        let fields = Credentials {
            confirm_password: "different".into(),
            ..login("fan@club.com", "goal!goal")
        };
        let validated = validate(AuthMode::Login, &fields).unwrap();
        assert_eq!(
            validated,
            ValidatedCredentials::Login {
                email: "fan@club.com".into(),
                password: "goal!goal".into(),
            }
        );
        assert_eq!(validated.username(), None);
    }

    #[test]
    fn signup_mismatch_is_reported_even_when_other_fields_fail() {
        let fields = Credentials {
            username: String::new(),
            email: String::new(),
            password: "abc".into(),
            confirm_password: "abd".into(),
        };
        let errors = validate(AuthMode::Signup, &fields).unwrap_err();
        assert_eq!(errors.confirm_password, Some(FieldError::PasswordMismatch));
        assert_eq!(errors.username, Some(FieldError::UsernameRequired));
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.password, Some(FieldError::PasswordTooShort));
    }

    #[test]
    fn valid_signup_carries_username() {
        let fields = Credentials {
            username: "keeper1".into(),
            email: "keeper@club.com".into(),
            password: "safehands".into(),
            confirm_password: "safehands".into(),
        };
        let validated = validate(AuthMode::Signup, &fields).unwrap();
        assert_eq!(validated.username(), Some("keeper1"));
        assert_eq!(validated.email(), "keeper@club.com");
        assert_eq!(validated.password(), "safehands");
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert!(validate(AuthMode::Login, &login("a@b.co", "éééééé")).is_ok());
        // Each emoji is a surrogate pair.
        assert!(validate(AuthMode::Login, &login("a@b.co", "😀😀😀")).is_ok());
        let errors = validate(AuthMode::Login, &login("a@b.co", "😀😀")).unwrap_err();
        assert_eq!(errors.password, Some(FieldError::PasswordTooShort));
    }

    #[test]
    fn field_errors_clear_single_slot() {
        let mut errors = FieldErrors {
            email: Some(FieldError::EmailRequired),
            password: Some(FieldError::PasswordRequired),
            ..FieldErrors::default()
        };
        errors.clear(Field::Email);
        assert_eq!(errors.email, None);
        assert_eq!(errors.password, Some(FieldError::PasswordRequired));
        assert!(!errors.is_empty());
    }

    #[test]
    fn error_messages_match_form_copy() {
        assert_eq!(
            FieldError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(FieldError::PasswordMismatch.to_string(), "Passwords do not match");
    }

    #[test]
    fn mode_toggles_back_and_forth() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
    }
}
