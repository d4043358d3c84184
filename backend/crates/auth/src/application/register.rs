//! Register Use Case
//!
//! Validates a registration form and creates the account.

use std::collections::BTreeMap;
use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::validation::{
    EMAIL_TAKEN, FormField, INVALID_EMAIL, INVALID_PASSWORD, INVALID_USERNAME, PASSWORD_MISMATCH,
    Validation, passwords_match, valid_email, valid_password, valid_username,
};
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Register input
#[derive(Debug)]
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: ClearTextPassword,
    pub verify_password: ClearTextPassword,
}

/// Register outcome
#[derive(Debug)]
pub enum RegisterOutcome {
    Registered(UserId),
    Rejected(Validation),
}

/// Validate a registration form
///
/// Rules run in order and stop at the first failure:
/// email already registered, email shape, username shape, password shape,
/// password confirmation.
pub async fn validate_registration_fields<U>(
    user_repo: &U,
    input: &RegisterInput,
) -> AuthResult<Validation>
where
    U: UserRepository,
{
    let fields = BTreeMap::from([
        ("username".to_string(), input.user_name.clone()),
        ("email".to_string(), input.email.clone()),
    ]);
    let validation = Validation::new(fields);

    if user_repo.exists_by_email(&input.email).await? {
        return Ok(validation.reject(FormField::Email, EMAIL_TAKEN));
    }
    if !valid_email(&input.email) {
        return Ok(validation.reject(FormField::Email, INVALID_EMAIL));
    }
    if !valid_username(&input.user_name) {
        return Ok(validation.reject(FormField::Username, INVALID_USERNAME));
    }
    if !valid_password(input.password.as_str()) {
        return Ok(validation.reject(FormField::Password, INVALID_PASSWORD));
    }
    if !passwords_match(input.password.as_str(), input.verify_password.as_str()) {
        return Ok(validation.reject(FormField::VerifyPass, PASSWORD_MISMATCH));
    }

    Ok(validation)
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutcome> {
        let validation = validate_registration_fields(self.user_repo.as_ref(), &input).await?;
        if !validation.valid {
            return Ok(RegisterOutcome::Rejected(validation));
        }

        let password_digest = input.password.digest(&self.config.password_codec());
        let user = User::new(input.user_name, input.email, password_digest);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterOutcome::Registered(user.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryUserRepository;

    fn input(user_name: &str, email: &str, password: &str, verify: &str) -> RegisterInput {
        RegisterInput {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: ClearTextPassword::new(password),
            verify_password: ClearTextPassword::new(verify),
        }
    }

    fn use_case(repo: &MemoryUserRepository) -> RegisterUseCase<MemoryUserRepository> {
        RegisterUseCase::new(Arc::new(repo.clone()), Arc::new(AuthConfig::development()))
    }

    #[tokio::test]
    async fn test_valid_registration() {
        let repo = MemoryUserRepository::new();
        let validation = validate_registration_fields(&repo, &input("bob12", "bob@x.com", "pw123", "pw123"))
            .await
            .unwrap();

        assert!(validation.valid);
        assert!(validation.field_errors.is_empty());
        assert_eq!(validation.field("username"), Some("bob12"));
        assert_eq!(validation.field("email"), Some("bob@x.com"));
        assert_eq!(validation.field("password"), None);
    }

    #[tokio::test]
    async fn test_each_rule_reports_its_field() {
        let repo = MemoryUserRepository::new();
        let cases = [
            (input("bob12", "bob", "pw123", "pw123"), FormField::Email, INVALID_EMAIL),
            (input("b", "bob@x.com", "pw123", "pw123"), FormField::Username, INVALID_USERNAME),
            (input("bob12", "bob@x.com", "pw", "pw"), FormField::Password, INVALID_PASSWORD),
            (input("bob12", "bob@x.com", "pw123", "pw124"), FormField::VerifyPass, PASSWORD_MISMATCH),
        ];

        for (form, field, message) in cases {
            let validation = validate_registration_fields(&repo, &form).await.unwrap();
            assert!(!validation.valid);
            assert_eq!(validation.field_errors.len(), 1);
            assert_eq!(validation.error(field), Some(message));
        }
    }

    #[tokio::test]
    async fn test_first_failing_rule_wins() {
        let repo = MemoryUserRepository::new();
        let cases = [
            (input("b", "bob", "pw123", "pw123"), FormField::Email, INVALID_EMAIL),
            (input("b", "bob@x.com", "pw", "pw"), FormField::Username, INVALID_USERNAME),
            (input("bob12", "bob@x.com", "pw", "pw9"), FormField::Password, INVALID_PASSWORD),
            (input("b", "bob", "pw", "pw9"), FormField::Email, INVALID_EMAIL),
        ];

        for (form, field, message) in cases {
            let validation = validate_registration_fields(&repo, &form).await.unwrap();
            assert!(!validation.valid);
            assert_eq!(validation.field_errors.len(), 1, "{field}");
            assert_eq!(validation.error(field), Some(message));
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_reported_before_other_rules() {
        let repo = MemoryUserRepository::new();
        let outcome = use_case(&repo)
            .execute(input("bob12", "bob@x.com", "pw123", "pw123"))
            .await
            .unwrap();
        assert!(matches!(outcome, RegisterOutcome::Registered(_)));

        // Every other field is invalid too; only the email is reported
        let validation = validate_registration_fields(&repo, &input("b", "bob@x.com", "p", "q"))
            .await
            .unwrap();
        assert!(!validation.valid);
        assert_eq!(validation.field_errors.len(), 1);
        assert_eq!(validation.error(FormField::Email), Some(EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn test_register_stores_blind_digest() {
        let repo = MemoryUserRepository::new();
        let outcome = use_case(&repo)
            .execute(input("bob12", "bob@x.com", "pw123", "pw123"))
            .await
            .unwrap();
        let RegisterOutcome::Registered(user_id) = outcome else {
            panic!("registration rejected");
        };

        let user = repo.find_by_id(&user_id).await.unwrap().unwrap();
        assert_eq!(user.user_name, "bob12");
        assert!(user.password_digest.as_stored().starts_with('|'));
        assert!(!user.password_digest.as_stored().contains("pw123"));
    }

    #[tokio::test]
    async fn test_rejected_registration_creates_nothing() {
        let repo = MemoryUserRepository::new();
        let outcome = use_case(&repo)
            .execute(input("bob12", "bob@x.com", "pw123", "nope1"))
            .await
            .unwrap();

        assert!(matches!(outcome, RegisterOutcome::Rejected(_)));
        assert!(!repo.exists_by_email("bob@x.com").await.unwrap());
    }
}
