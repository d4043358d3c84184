//! Data Transfer Objects
//!
//! Form bodies as posted by the login and registration pages. Missing
//! fields deserialize as empty strings and are caught by validation.

use serde::Deserialize;
use platform::password::ClearTextPassword;

use crate::application::{LoginInput, RegisterInput};

/// POST /register body
#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(rename = "fields.username", default)]
    pub username: String,
    #[serde(rename = "fields.password", default)]
    pub password: String,
    #[serde(rename = "fields.verifyPass", default)]
    pub verify_pass: String,
    #[serde(rename = "fields.email", default)]
    pub email: String,
}

impl From<RegisterForm> for RegisterInput {
    fn from(form: RegisterForm) -> Self {
        RegisterInput {
            user_name: form.username,
            email: form.email,
            password: ClearTextPassword::new(form.password),
            verify_password: ClearTextPassword::new(form.verify_pass),
        }
    }
}

/// POST /login body
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(rename = "fields.email", default)]
    pub email: String,
    #[serde(rename = "fields.password", default)]
    pub password: String,
}

impl From<LoginForm> for LoginInput {
    fn from(form: LoginForm) -> Self {
        LoginInput {
            email: form.email,
            password: ClearTextPassword::new(form.password),
        }
    }
}
