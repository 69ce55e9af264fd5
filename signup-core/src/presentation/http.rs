//! Request/response envelope shared by all controllers

use serde::{Deserialize, Serialize};

use crate::domain::Account;

use super::errors::{ErrorBody, HttpError};

/// Inbound request as handed over by the transport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// Payload of a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(Account),
    Error(ErrorBody),
}

/// Normalized `{ statusCode, body }` envelope produced for every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ResponseBody>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The error descriptor, if this is an error response
    pub fn error(&self) -> Option<&ErrorBody> {
        match &self.body {
            Some(ResponseBody::Error(err)) => Some(err),
            _ => None,
        }
    }

    /// The account, if this is a successful sign-up response
    pub fn account(&self) -> Option<&Account> {
        match &self.body {
            Some(ResponseBody::Account(account)) => Some(account),
            _ => None,
        }
    }
}

/// 200 with the created account
pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        body: Some(ResponseBody::Account(account)),
    }
}

/// 400 with the given validation error
pub fn bad_request(error: HttpError) -> HttpResponse {
    error_response(&error)
}

/// 500 with a detail-free server error
pub fn server_error() -> HttpResponse {
    error_response(&HttpError::Server)
}

fn error_response(error: &HttpError) -> HttpResponse {
    HttpResponse {
        status_code: error.status_code(),
        body: Some(ResponseBody::Error(error.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bad_request_envelope_json() {
        let response = bad_request(HttpError::missing_param("passwordConfirmation"));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 400,
                "body": { "name": "MissingParamError", "message": "Missing param: passwordConfirmation" }
            })
        );
    }

    #[test]
    fn test_server_error_is_uniform() {
        assert_eq!(server_error(), server_error());
        assert_eq!(server_error().status_code, 500);
        assert_eq!(server_error().error().unwrap().name, "ServerError");
    }

    #[test]
    fn test_ok_envelope_carries_account() {
        let account = Account {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        };

        let response = ok(account.clone());

        assert!(response.is_success());
        assert_eq!(response.account(), Some(&account));
        assert!(response.error().is_none());
    }

    #[test]
    fn test_envelope_round_trips_through_json() {
        let response = bad_request(HttpError::invalid_param("email"));
        let json = serde_json::to_string(&response).unwrap();
        let parsed: HttpResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
