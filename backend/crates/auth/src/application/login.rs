//! Login Use Case
//!
//! Checks an email/password pair against the stored password digest.

use std::collections::BTreeMap;
use std::sync::Arc;

use platform::crypto::HashCodec;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::validation::{
    FormField, INVALID_CREDENTIALS, INVALID_EMAIL, INVALID_PASSWORD, Validation, valid_email,
    valid_password,
};
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Login input
#[derive(Debug)]
pub struct LoginInput {
    pub email: String,
    pub password: ClearTextPassword,
}

/// Login outcome
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated(UserId),
    Rejected(Validation),
}

/// Validate a login form
///
/// On success `fields["userId"]` carries the authenticated user's id.
pub async fn validate_login_fields<U>(
    user_repo: &U,
    codec: &HashCodec,
    input: &LoginInput,
) -> AuthResult<Validation>
where
    U: UserRepository,
{
    check_credentials(user_repo, codec, input)
        .await
        .map(|(validation, _)| validation)
}

async fn check_credentials<U>(
    user_repo: &U,
    codec: &HashCodec,
    input: &LoginInput,
) -> AuthResult<(Validation, Option<UserId>)>
where
    U: UserRepository,
{
    let validation = Validation::new(BTreeMap::from([(
        "email".to_string(),
        input.email.clone(),
    )]));

    if !valid_email(&input.email) {
        return Ok((validation.reject(FormField::Email, INVALID_EMAIL), None));
    }
    if !valid_password(input.password.as_str()) {
        return Ok((validation.reject(FormField::Password, INVALID_PASSWORD), None));
    }

    let user = user_repo.find_by_email(&input.email).await?;
    match user {
        Some(user) if user.password_digest.verify(&input.password, codec) => {
            let mut validation = validation;
            validation
                .fields
                .insert("userId".to_string(), user.user_id.to_string());
            Ok((validation, Some(user.user_id)))
        }
        _ => Ok((
            validation.reject(FormField::Credentials, INVALID_CREDENTIALS),
            None,
        )),
    }
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutcome> {
        let codec = self.config.password_codec();
        let (validation, user_id) =
            check_credentials(self.user_repo.as_ref(), &codec, &input).await?;

        match user_id {
            Some(user_id) => {
                tracing::info!(user_id = %user_id, "User signed in");
                Ok(LoginOutcome::Authenticated(user_id))
            }
            None => {
                if validation.error(FormField::Credentials).is_some() {
                    tracing::warn!("Invalid login attempt");
                }
                Ok(LoginOutcome::Rejected(validation))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterOutcome, RegisterUseCase};
    use crate::infra::memory::MemoryUserRepository;

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: email.to_string(),
            password: ClearTextPassword::new(password),
        }
    }

    async fn registered(config: &Arc<AuthConfig>) -> (MemoryUserRepository, UserId) {
        let repo = MemoryUserRepository::new();
        let outcome = RegisterUseCase::new(Arc::new(repo.clone()), config.clone())
            .execute(RegisterInput {
                user_name: "bob12".to_string(),
                email: "bob@x.com".to_string(),
                password: ClearTextPassword::new("pw123"),
                verify_password: ClearTextPassword::new("pw123"),
            })
            .await
            .unwrap();
        let RegisterOutcome::Registered(user_id) = outcome else {
            panic!("registration rejected");
        };
        (repo, user_id)
    }

    #[tokio::test]
    async fn test_login_success_carries_user_id() {
        let config = Arc::new(AuthConfig::development());
        let (repo, user_id) = registered(&config).await;

        let validation =
            validate_login_fields(&repo, &config.password_codec(), &login_input("bob@x.com", "pw123"))
                .await
                .unwrap();
        assert!(validation.valid);
        assert_eq!(validation.field("userId"), Some(user_id.to_string().as_str()));

        let outcome = LoginUseCase::new(Arc::new(repo), config)
            .execute(login_input("bob@x.com", "pw123"))
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::Authenticated(id) if id == user_id));
    }

    #[tokio::test]
    async fn test_wrong_password_is_credentials_error() {
        let config = Arc::new(AuthConfig::development());
        let (repo, _) = registered(&config).await;

        let outcome = LoginUseCase::new(Arc::new(repo), config)
            .execute(login_input("bob@x.com", "pw999"))
            .await
            .unwrap();
        let LoginOutcome::Rejected(validation) = outcome else {
            panic!("wrong password accepted");
        };
        assert_eq!(validation.error(FormField::Credentials), Some(INVALID_CREDENTIALS));
        assert_eq!(validation.field("userId"), None);
    }

    #[tokio::test]
    async fn test_unknown_email_is_credentials_error() {
        let config = Arc::new(AuthConfig::development());
        let (repo, _) = registered(&config).await;

        let validation =
            validate_login_fields(&repo, &config.password_codec(), &login_input("eve@x.com", "pw123"))
                .await
                .unwrap();
        assert_eq!(validation.error(FormField::Credentials), Some(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_shape_rules_run_before_lookup() {
        let config = Arc::new(AuthConfig::development());
        let repo = MemoryUserRepository::new();
        let codec = config.password_codec();

        let validation = validate_login_fields(&repo, &codec, &login_input("nope", "pw123"))
            .await
            .unwrap();
        assert_eq!(validation.error(FormField::Email), Some(INVALID_EMAIL));

        let validation = validate_login_fields(&repo, &codec, &login_input("bob@x.com", "p"))
            .await
            .unwrap();
        assert_eq!(validation.error(FormField::Password), Some(INVALID_PASSWORD));
        assert_eq!(validation.error(FormField::Credentials), None);
    }

    #[tokio::test]
    async fn test_email_rule_runs_before_password_rule() {
        let config = Arc::new(AuthConfig::development());
        let repo = MemoryUserRepository::new();

        let validation =
            validate_login_fields(&repo, &config.password_codec(), &login_input("nope", "p"))
                .await
                .unwrap();
        assert_eq!(validation.field_errors.len(), 1);
        assert_eq!(validation.error(FormField::Email), Some(INVALID_EMAIL));
        assert_eq!(validation.error(FormField::Password), None);
    }

    #[tokio::test]
    async fn test_password_key_must_match() {
        let config = Arc::new(AuthConfig::development());
        let (repo, _) = registered(&config).await;

        // Same repository, different password key
        let other = AuthConfig::development().password_codec();
        let validation = validate_login_fields(&repo, &other, &login_input("bob@x.com", "pw123"))
            .await
            .unwrap();
        assert!(!validation.valid);
    }
}
