//! Form Field Validation
//!
//! Pure predicates over raw form strings and the [`Validation`] result the
//! composed validators hand back to the view. A failed validation is an
//! ordinary value, not an error: the form is re-rendered with the messages.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;
use serde::Serialize;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,20}$").expect("valid username pattern"));
static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.{3,20}$").expect("valid password pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\S]+@[\S]+\.[\S]+$").expect("valid email pattern"));

pub const EMAIL_TAKEN: &str = "This email is already registered";
pub const INVALID_EMAIL: &str = "That's not a valid email.";
pub const INVALID_USERNAME: &str = "That's not a valid username";
pub const INVALID_PASSWORD: &str = "That wasn't a valid password.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const INVALID_CREDENTIALS: &str = "Invalid email/password";

/// 3 to 20 letters, digits, `_` or `-`
pub fn valid_username(s: &str) -> bool {
    USERNAME_RE.is_match(s)
}

/// 3 to 20 characters of anything
pub fn valid_password(s: &str) -> bool {
    PASSWORD_RE.is_match(s)
}

/// `local@domain.tld` with no whitespace
pub fn valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn passwords_match(password: &str, verify: &str) -> bool {
    password == verify
}

/// Form field an error message is attached to
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FormField {
    #[display("username")]
    #[serde(rename = "username")]
    Username,
    #[display("password")]
    #[serde(rename = "password")]
    Password,
    #[display("verifyPass")]
    #[serde(rename = "verifyPass")]
    VerifyPass,
    #[display("email")]
    #[serde(rename = "email")]
    Email,
    /// The email/password pair as a whole
    #[display("credentials")]
    #[serde(rename = "credentials")]
    Credentials,
}

/// Outcome of validating a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub field_errors: BTreeMap<FormField, String>,
    /// Field values echoed back to the view (never passwords)
    pub fields: BTreeMap<String, String>,
}

impl Validation {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self {
            valid: true,
            field_errors: BTreeMap::new(),
            fields,
        }
    }

    /// Record a failed rule and mark the form invalid
    pub fn reject(mut self, field: FormField, message: impl Into<String>) -> Self {
        self.valid = false;
        self.field_errors.insert(field, message.into());
        self
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
