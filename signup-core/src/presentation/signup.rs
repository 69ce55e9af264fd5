//! Sign-up controller
//!
//! Validates the registration form, runs the [`AddAccount`] use case and maps
//! every outcome onto an [`HttpResponse`]:
//!
//! | outcome                                   | status | body                                    |
//! |-------------------------------------------|--------|-----------------------------------------|
//! | a required field is missing or empty      | 400    | `MissingParamError(<field>)`            |
//! | `password != passwordConfirmation`        | 400    | `InvalidParamError(passwordConfirmation)` |
//! | email checker says the address is invalid | 400    | `InvalidParamError(email)`              |
//! | email checker or use case fails           | 500    | `ServerError`                           |
//! | account created                           | 200    | the created account                     |

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::domain::AddAccountModel;
use crate::ports::{AddAccount, EmailValidator};

use super::errors::HttpError;
use super::http::{bad_request, ok, server_error, HttpRequest, HttpResponse};
use super::Controller;

/// Registration form as submitted by the client
///
/// Every field is optional on the wire; presence is checked by the
/// controller so a missing field is reported by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

/// A required field: present and not empty
fn required(value: Option<String>, field: &str) -> Result<String, HttpError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| HttpError::missing_param(field))
}

impl SignUpBody {
    /// Check presence and confirmation, handing back the use-case payload
    ///
    /// Fields are checked in the order name, email, password,
    /// passwordConfirmation and the first failure is returned. The email
    /// checker is not consulted here since its failure is a server error,
    /// not a validation outcome.
    fn validate(self) -> Result<AddAccountModel, HttpError> {
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        let password = required(self.password, "password")?;
        let confirmation = required(self.password_confirmation, "passwordConfirmation")?;

        if password != confirmation {
            return Err(HttpError::invalid_param("passwordConfirmation"));
        }

        Ok(AddAccountModel::new(name, email, password))
    }
}

/// Handles sign-up requests
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Body = SignUpBody;

    #[instrument(name = "signup", skip_all)]
    async fn handle(&self, request: HttpRequest<SignUpBody>) -> HttpResponse {
        let account = match request.body.validate() {
            Ok(account) => account,
            Err(err) => {
                warn!(error = %err, "Sign-up request rejected");
                return bad_request(err);
            }
        };

        match self.email_validator.is_valid(&account.email) {
            Ok(true) => {}
            Ok(false) => {
                let err = HttpError::invalid_param("email");
                warn!(error = %err, "Sign-up request rejected");
                return bad_request(err);
            }
            Err(e) => {
                error!(error = %e, "Email validation failed");
                return server_error();
            }
        }

        match self.add_account.add(account).await {
            Ok(account) => {
                info!(account_id = %account.id, "Account created");
                ok(account)
            }
            Err(e) => {
                error!(error = %e, "Account registration failed");
                server_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::result::{Error, Result};
    use crate::domain::Account;
    use crate::presentation::http::ResponseBody;

    // ------------------------------------------------------------------
    // Test doubles
    // ------------------------------------------------------------------

    #[derive(Clone, Copy)]
    enum Validity {
        Valid,
        Invalid,
        Fails,
    }

    struct EmailValidatorStub {
        validity: Validity,
        calls: Mutex<Vec<String>>,
    }

    impl EmailValidator for EmailValidatorStub {
        fn is_valid(&self, email: &str) -> Result<bool> {
            self.calls.lock().unwrap().push(email.to_string());
            match self.validity {
                Validity::Valid => Ok(true),
                Validity::Invalid => Ok(false),
                Validity::Fails => Err(Error::config("validator exploded")),
            }
        }
    }

    struct AddAccountStub {
        fail: bool,
        calls: Mutex<Vec<AddAccountModel>>,
    }

    #[async_trait]
    impl AddAccount for AddAccountStub {
        async fn add(&self, account: AddAccountModel) -> Result<Account> {
            self.calls.lock().unwrap().push(account);
            if self.fail {
                return Err(Error::database("connection reset by peer"));
            }
            Ok(fake_account())
        }
    }

    fn fake_account() -> Account {
        Account {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid_email@mail.com".to_string(),
            password: "valid_pass".to_string(),
        }
    }

    struct Sut {
        sut: SignUpController,
        email_validator: Arc<EmailValidatorStub>,
        add_account: Arc<AddAccountStub>,
    }

    fn make_sut_with(validity: Validity, add_fails: bool) -> Sut {
        let email_validator = Arc::new(EmailValidatorStub {
            validity,
            calls: Mutex::new(Vec::new()),
        });
        let add_account = Arc::new(AddAccountStub {
            fail: add_fails,
            calls: Mutex::new(Vec::new()),
        });
        let sut = SignUpController::new(email_validator.clone(), add_account.clone());
        Sut {
            sut,
            email_validator,
            add_account,
        }
    }

    fn make_sut() -> Sut {
        make_sut_with(Validity::Valid, false)
    }

    fn request(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        password_confirmation: Option<&str>,
    ) -> HttpRequest<SignUpBody> {
        HttpRequest::new(SignUpBody {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
            password_confirmation: password_confirmation.map(String::from),
        })
    }

    fn valid_request() -> HttpRequest<SignUpBody> {
        request(
            Some("any_name"),
            Some("any@mail.com"),
            Some("any_pass"),
            Some("any_pass"),
        )
    }

    fn assert_error(response: &HttpResponse, status: u16, expected: HttpError) {
        assert_eq!(response.status_code, status);
        assert_eq!(
            response.body,
            Some(ResponseBody::Error((&expected).into()))
        );
    }

    // ------------------------------------------------------------------
    // Missing fields
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_returns_400_if_no_name_is_provided() {
        let Sut { sut, .. } = make_sut();
        let response = sut
            .handle(request(None, Some("email@mail.com"), Some("any_pass"), Some("any_pass")))
            .await;
        assert_error(&response, 400, HttpError::missing_param("name"));
    }

    #[tokio::test]
    async fn test_returns_400_if_no_email_is_provided() {
        let Sut { sut, .. } = make_sut();
        let response = sut
            .handle(request(Some("any_name"), None, Some("any_pass"), Some("any_pass")))
            .await;
        assert_error(&response, 400, HttpError::missing_param("email"));
    }

    #[tokio::test]
    async fn test_returns_400_if_no_password_is_provided() {
        let Sut { sut, .. } = make_sut();
        let response = sut
            .handle(request(Some("any_name"), Some("email@mail.com"), None, Some("any_pass")))
            .await;
        assert_error(&response, 400, HttpError::missing_param("password"));
    }

    #[tokio::test]
    async fn test_returns_400_if_no_password_confirmation_is_provided() {
        let Sut { sut, .. } = make_sut();
        let response = sut
            .handle(request(Some("any_name"), Some("email@mail.com"), Some("any_pass"), None))
            .await;
        assert_error(&response, 400, HttpError::missing_param("passwordConfirmation"));
    }

    #[tokio::test]
    async fn test_empty_string_counts_as_missing() {
        let Sut { sut, .. } = make_sut();
        let response = sut
            .handle(request(Some(""), Some("email@mail.com"), Some("any_pass"), Some("any_pass")))
            .await;
        assert_error(&response, 400, HttpError::missing_param("name"));
    }

    #[tokio::test]
    async fn test_first_missing_field_wins() {
        let Sut { sut, .. } = make_sut();
        let response = sut.handle(request(Some("any_name"), None, None, None)).await;
        assert_error(&response, 400, HttpError::missing_param("email"));
    }

    // ------------------------------------------------------------------
    // Semantic validation
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_returns_400_if_password_confirmation_fails() {
        let Sut { sut, add_account, .. } = make_sut();
        let response = sut
            .handle(request(
                Some("any_name"),
                Some("email@mail.com"),
                Some("any_pass"),
                Some("invalid_pass"),
            ))
            .await;
        assert_error(&response, 400, HttpError::invalid_param("passwordConfirmation"));
        assert!(add_account.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_returns_400_if_invalid_email_is_provided() {
        let Sut { sut, email_validator, add_account } = make_sut_with(Validity::Invalid, false);
        let response = sut
            .handle(request(
                Some("any_name"),
                Some("invalid_email@mail.com"),
                Some("any_pass"),
                Some("any_pass"),
            ))
            .await;
        assert_error(&response, 400, HttpError::invalid_param("email"));
        assert_eq!(
            *email_validator.calls.lock().unwrap(),
            vec!["invalid_email@mail.com".to_string()]
        );
        assert!(add_account.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validation_is_repeatable() {
        let Sut { sut, .. } = make_sut();
        let rejected = [
            request(Some("any_name"), Some("email@mail.com"), Some("a"), Some("b")),
            request(Some("any_name"), None, Some("any_pass"), Some("any_pass")),
        ];

        for bad in rejected {
            let first = sut.handle(bad.clone()).await;
            let second = sut.handle(bad).await;

            assert_eq!(first.status_code, 400);
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn test_invalid_email_rejection_is_repeatable() {
        let Sut { sut, email_validator, .. } = make_sut_with(Validity::Invalid, false);
        let bad = request(
            Some("any_name"),
            Some("invalid_email@mail.com"),
            Some("any_pass"),
            Some("any_pass"),
        );

        let first = sut.handle(bad.clone()).await;
        let second = sut.handle(bad).await;

        assert_eq!(first, second);
        assert_error(&second, 400, HttpError::invalid_param("email"));
        assert_eq!(email_validator.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_whitespace_name_reaches_use_case() {
        let Sut { sut, add_account, .. } = make_sut();
        let response = sut
            .handle(request(
                Some("   "),
                Some("any@mail.com"),
                Some("any_pass"),
                Some("any_pass"),
            ))
            .await;

        assert_eq!(response, ok(fake_account()));
        assert_eq!(
            *add_account.calls.lock().unwrap(),
            vec![AddAccountModel::new("   ", "any@mail.com", "any_pass")]
        );
    }

    // ------------------------------------------------------------------
    // Collaborator failures
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_returns_500_if_email_validator_fails() {
        let Sut { sut, add_account, .. } = make_sut_with(Validity::Fails, false);
        let response = sut.handle(valid_request()).await;
        assert_eq!(response, server_error());
        assert!(add_account.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_returns_500_if_add_account_fails() {
        let Sut { sut, .. } = make_sut_with(Validity::Valid, true);
        let response = sut.handle(valid_request()).await;
        assert_eq!(response, server_error());
        assert!(response.account().is_none());
        assert_eq!(response.error().unwrap().message, "Internal server error");
    }

    // ------------------------------------------------------------------
    // Success
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_calls_add_account_with_correct_values() {
        let Sut { sut, add_account, .. } = make_sut();
        sut.handle(valid_request()).await;
        assert_eq!(
            *add_account.calls.lock().unwrap(),
            vec![AddAccountModel::new("any_name", "any@mail.com", "any_pass")]
        );
    }

    #[tokio::test]
    async fn test_returns_200_with_account_on_success() {
        let Sut { sut, .. } = make_sut();
        let response = sut.handle(valid_request()).await;
        assert_eq!(response, ok(fake_account()));
    }

    #[test]
    fn test_body_deserializes_camel_case() {
        let body: SignUpBody = serde_json::from_str(
            r#"{"name": "any_name", "email": "any@mail.com", "passwordConfirmation": "any_pass"}"#,
        )
        .unwrap();
        assert_eq!(body.password, None);
        assert_eq!(body.password_confirmation.as_deref(), Some("any_pass"));
    }
}
